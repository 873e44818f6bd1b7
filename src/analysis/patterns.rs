// src/analysis/patterns.rs
use std::collections::HashSet;
use lazy_static::lazy_static;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_SEQUENCE: &str = "01234567890";

lazy_static! {
    // "abc".."xyz" plus "012".."789" and "890"
    static ref SEQUENTIAL_WINDOWS: HashSet<String> = {
        let mut windows = HashSet::new();
        for sequence in [ALPHABET, DIGIT_SEQUENCE] {
            let chars: Vec<char> = sequence.chars().collect();
            for window in chars.windows(3) {
                windows.insert(window.iter().collect::<String>());
            }
        }
        windows
    };

    static ref COMMON_WORDS: Vec<&'static str> = vec![
        "password",
        "contraseña",
        "admin",
        "123456",
        "qwerty",
        "welcome",
        "letmein",
    ];
}

/// True when the lowercased password contains one of the fixed ascending
/// three-character windows.
pub fn has_sequential_run(password: &str) -> bool {
    let lowered: Vec<char> = password.to_lowercase().chars().collect();
    let mut window = String::with_capacity(12);
    lowered.windows(3).any(|w| {
        window.clear();
        window.extend(w.iter());
        SEQUENTIAL_WINDOWS.contains(window.as_str())
    })
}

/// True when a character occurs three or more times in a row. Line feeds
/// never form a run.
pub fn has_repeated_run(password: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in password.chars() {
        if c == '\n' {
            previous = None;
            run = 0;
            continue;
        }
        if Some(c) == previous {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

pub fn has_common_word_substring(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_WORDS.iter().any(|word| lowered.contains(word))
}
