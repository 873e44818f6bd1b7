// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::generators::charset::{CharacterClass, ClassSet};

// Password generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    pub fn from_flags(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        special: bool,
    ) -> Self {
        let mut classes = ClassSet::empty();
        if uppercase {
            classes.insert(CharacterClass::Upper);
        }
        if lowercase {
            classes.insert(CharacterClass::Lower);
        }
        if numbers {
            classes.insert(CharacterClass::Digit);
        }
        if special {
            classes.insert(CharacterClass::Special);
        }
        Self { length, classes }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            classes: ClassSet::all(),
        }
    }
}

/// Qualitative strength band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Very weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => StrengthLevel::VeryWeak,
            25..=49 => StrengthLevel::Weak,
            50..=74 => StrengthLevel::Medium,
            75..=89 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Heuristic score between 0 and 100
    pub score: u8,
    /// Band the score falls into
    pub level: StrengthLevel,
}

// Which character classes occur in a given password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassPresence {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl ClassPresence {
    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.has_upper,
            CharacterClass::Lower => self.has_lower,
            CharacterClass::Digit => self.has_digit,
            CharacterClass::Special => self.has_special,
        }
    }

    pub fn count(&self) -> usize {
        CharacterClass::ALL.iter().filter(|c| self.has(**c)).count()
    }
}

/// Full breakdown produced by the deep analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeepAnalysis {
    pub score: u8,
    pub level: StrengthLevel,
    /// Number of characters (not bytes)
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Contains a window such as "abc" or "789"
    pub has_sequential_run: bool,
    /// Some character repeats three or more times in a row
    pub has_repeated_run: bool,
    /// Contains a well-known weak password fragment
    pub has_common_word_substring: bool,
    /// Average-case brute-force time, human readable
    pub estimated_crack_time: String,
}

impl DeepAnalysis {
    pub fn report(&self) -> StrengthReport {
        StrengthReport {
            score: self.score,
            level: self.level,
        }
    }

    // Hints for improving the password, in a stable order
    pub fn suggestions(&self) -> Vec<String> {
        let mut feedback = Vec::new();

        if self.length < 12 {
            feedback.push("Increase password length to at least 12 characters".to_string());
        }
        if !self.has_upper {
            feedback.push("Add uppercase letters".to_string());
        }
        if !self.has_lower {
            feedback.push("Add lowercase letters".to_string());
        }
        if !self.has_digit {
            feedback.push("Add numbers".to_string());
        }
        if !self.has_special {
            feedback.push("Add symbols".to_string());
        }
        if self.has_sequential_run {
            feedback.push("Avoid sequences such as 'abc' or '123'".to_string());
        }
        if self.has_repeated_run {
            feedback.push("Avoid repeating the same character three or more times".to_string());
        }
        if self.has_common_word_substring {
            feedback.push("Avoid common words such as 'password' or 'admin'".to_string());
        }

        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(24), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(25), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(49), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(74), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(75), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(89), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(90), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_level_serializes_as_display_string() {
        let json = serde_json::to_string(&StrengthLevel::VeryStrong).unwrap();
        assert_eq!(json, "\"Very strong\"");
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_from_flags() {
        let request = GenerationRequest::from_flags(8, true, false, true, false);
        assert_eq!(request.length, 8);
        assert!(request.classes.contains(CharacterClass::Upper));
        assert!(!request.classes.contains(CharacterClass::Lower));
        assert!(request.classes.contains(CharacterClass::Digit));
        assert!(!request.classes.contains(CharacterClass::Special));
    }
}
