// src/generators/mod.rs
use thiserror::Error;
use crate::generators::charset::ClassSet;
use crate::models::GenerationRequest;

pub mod charset;
pub mod password;
pub mod rng;

pub use password::PasswordGenerator;
pub use rng::RngSource;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Could not satisfy the character type requirements after {attempts} attempts")]
    RetryExhausted { attempts: usize },
}

impl GeneratorError {
    pub fn empty_pool() -> Self {
        GeneratorError::InvalidRequest("At least one character type must be selected".to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Uniform sampling from the enabled classes using the default generator.
pub fn generate(length: usize, classes: ClassSet) -> Result<String> {
    PasswordGenerator::new().generate(&GenerationRequest::new(length, classes))
}

/// Sampling with the one-character-per-class guarantee using the default generator.
pub fn generate_secure(length: usize, classes: ClassSet) -> Result<String> {
    PasswordGenerator::new().generate_secure(&GenerationRequest::new(length, classes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::CharacterClass;

    #[test]
    fn test_free_functions() {
        assert_eq!(generate(8, ClassSet::all()).unwrap().len(), 8);
        assert!(generate(8, ClassSet::empty()).is_err());

        let three: ClassSet = [CharacterClass::Upper, CharacterClass::Lower, CharacterClass::Digit]
            .into_iter()
            .collect();
        assert!(matches!(generate_secure(2, three), Err(GeneratorError::InvalidRequest(_))));
        assert_eq!(generate_secure(3, three).unwrap().len(), 3);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneratorError::empty_pool().to_string(),
            "Invalid request: At least one character type must be selected"
        );
        assert_eq!(
            GeneratorError::RetryExhausted { attempts: 5 }.to_string(),
            "Could not satisfy the character type requirements after 5 attempts"
        );
    }
}
