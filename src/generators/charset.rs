// src/generators/charset.rs
use crate::models::ClassPresence;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
// ASCII punctuation, 32 symbols
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four disjoint groups of symbols a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharacterClass {
    /// Fixed order used when building pools and iterating sets.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(&self) -> &'static [u8] {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Alphabet size assumed by the brute-force estimate.
    pub fn brute_force_size(&self) -> u32 {
        match self {
            CharacterClass::Upper | CharacterClass::Lower => 26,
            CharacterClass::Digit => 10,
            CharacterClass::Special => 33,
        }
    }

    /// Loose membership used when scoring arbitrary input: anything that is
    /// not an ASCII letter or digit counts as special.
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharacterClass::Upper => c.is_ascii_uppercase(),
            CharacterClass::Lower => c.is_ascii_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Special => !c.is_ascii_alphanumeric(),
        }
    }

    /// Strict membership in this class's own character set.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}

/// Set of enabled character classes, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    fn bit(class: CharacterClass) -> u8 {
        match class {
            CharacterClass::Upper => 1,
            CharacterClass::Lower => 1 << 1,
            CharacterClass::Digit => 1 << 2,
            CharacterClass::Special => 1 << 3,
        }
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= Self::bit(class);
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & Self::bit(class) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Concatenates the enabled classes' characters in the fixed class order.
    pub fn build_pool(&self) -> Vec<u8> {
        let mut pool = Vec::new();
        for class in self.iter() {
            pool.extend_from_slice(class.chars());
        }
        pool
    }

    /// True when every enabled class has at least one character in `password`.
    pub fn is_covered_by(&self, password: &str) -> bool {
        self.iter()
            .all(|class| password.chars().any(|c| class.contains(c)))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

// Detect which classes appear anywhere in the password
pub fn class_presence(password: &str) -> ClassPresence {
    let mut presence = ClassPresence::default();
    for c in password.chars() {
        presence.has_upper |= CharacterClass::Upper.matches(c);
        presence.has_lower |= CharacterClass::Lower.matches(c);
        presence.has_digit |= CharacterClass::Digit.matches(c);
        presence.has_special |= CharacterClass::Special.matches(c);
    }
    presence
}
