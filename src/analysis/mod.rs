// src/analysis/mod.rs
use crate::generators::charset::class_presence;
use crate::models::{DeepAnalysis, StrengthLevel, StrengthReport};
use crate::utils::format_crack_time;

pub mod crack_time;
pub mod patterns;

const MAX_LENGTH_POINTS: usize = 40;
const POINTS_PER_CHAR: usize = 2;
const POINTS_PER_CLASS: u8 = 15;

/// Heuristic strength score between 0 and 100.
///
/// Up to 40 points for length (two per character) plus 15 for each
/// character class present anywhere in the password.
pub fn score(password: &str) -> u8 {
    let length_points = password
        .chars()
        .count()
        .saturating_mul(POINTS_PER_CHAR)
        .min(MAX_LENGTH_POINTS) as u8;

    let class_points = class_presence(password).count() as u8 * POINTS_PER_CLASS;

    length_points + class_points
}

pub fn level(score: u8) -> StrengthLevel {
    StrengthLevel::from_score(score)
}

pub fn evaluate(password: &str) -> StrengthReport {
    let score = score(password);
    StrengthReport {
        score,
        level: level(score),
    }
}

/// Scores the password and looks for weak patterns and a brute-force estimate.
pub fn analyze(password: &str) -> DeepAnalysis {
    let presence = class_presence(password);
    let length = password.chars().count();
    let report = evaluate(password);
    let seconds = crack_time::estimate_crack_seconds(&presence, length);

    DeepAnalysis {
        score: report.score,
        level: report.level,
        length,
        has_upper: presence.has_upper,
        has_lower: presence.has_lower,
        has_digit: presence.has_digit,
        has_special: presence.has_special,
        has_sequential_run: patterns::has_sequential_run(password),
        has_repeated_run: patterns::has_repeated_run(password),
        has_common_word_substring: patterns::has_common_word_substring(password),
        estimated_crack_time: format_crack_time(seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_examples() {
        assert_eq!(score(""), 0);
        assert_eq!(score("aaaaaaaaaaaaaaaaaaaa"), 55);
        assert_eq!(score("Aa1!"), 68);
        assert_eq!(score("a"), 17);
    }

    #[test]
    fn test_score_caps_at_hundred() {
        assert_eq!(score("Aa1!Aa1!Aa1!Aa1!Aa1!"), 100);
        let long = "Aa1!".repeat(1000);
        assert_eq!(score(&long), 100);
    }

    #[test]
    fn test_score_counts_characters_not_bytes() {
        // Two characters, four bytes; ñ counts as special
        assert_eq!(score("ññ"), 4 + 15);
    }

    #[test]
    fn test_score_is_deterministic() {
        for input in ["", "abc", "P@ssw0rd123!", "      ", "日本語パスワード"] {
            let first = score(input);
            assert_eq!(first, score(input));
            assert!(first <= 100);
        }
    }

    #[test]
    fn test_evaluate() {
        let report = evaluate("Aa1!");
        assert_eq!(report.score, 68);
        assert_eq!(report.level, StrengthLevel::Medium);
        assert_eq!(evaluate("").level, StrengthLevel::VeryWeak);
    }

    #[test]
    fn test_analyze_flags() {
        assert!(analyze("aaa").has_repeated_run);

        let analysis = analyze("abc123");
        assert!(analysis.has_sequential_run);
        assert!(!analysis.has_repeated_run);
        assert_eq!(analysis.length, 6);

        assert!(analyze("password1").has_common_word_substring);
    }

    #[test]
    fn test_analyze_report() {
        let analysis = analyze("P@ssw0rd123!");
        assert_eq!(analysis.score, 24 + 60);
        assert_eq!(analysis.level, StrengthLevel::Strong);
        assert!(analysis.has_upper && analysis.has_lower);
        assert!(analysis.has_digit && analysis.has_special);
        assert!(analysis.has_sequential_run);
        assert!(!analysis.has_common_word_substring);
        // 95^12 / 1e12 / 2 seconds is several thousand years
        assert_eq!(analysis.estimated_crack_time, "over 100 years");
    }

    #[test]
    fn test_analyze_crack_time_buckets() {
        assert_eq!(analyze("").estimated_crack_time, "under a second");
        assert_eq!(analyze("abcd").estimated_crack_time, "under a second");
        // 62^8 / 1e12 / 2 = 109.2 seconds
        assert_eq!(analyze("Ab3dEf6h").estimated_crack_time, "1.8 minutes");
        assert_eq!(analyze("Aa1!Aa1!Aa1!Aa1!Aa1!").estimated_crack_time, "over 100 years");
    }

    #[test]
    fn test_suggestions() {
        let analysis = analyze("aaa");
        let feedback = analysis.suggestions();
        assert!(feedback.iter().any(|f| f.contains("12 characters")));
        assert!(feedback.iter().any(|f| f.contains("repeating")));
        assert!(!feedback.iter().any(|f| f.contains("lowercase")));
        assert!(analyze("Zq9!Tx4#Mp2&Lw7*").suggestions().is_empty());
    }
}
