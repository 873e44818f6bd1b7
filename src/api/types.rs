// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::core::config::Config;
use crate::models::{DeepAnalysis, GenerationRequest, StrengthReport};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordRequest {
    /// Requested length (default 12, clamped to 4..=50)
    pub length: Option<i64>,
    /// Include uppercase letters (default true)
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default true)
    pub lowercase: Option<bool>,
    /// Include digits (default true)
    pub numbers: Option<bool>,
    /// Include punctuation (default true)
    pub special: Option<bool>,
}

impl GeneratePasswordRequest {
    /// Applies defaults and clamping. Lowercase is forced on when every
    /// class has been switched off.
    pub fn normalize(&self, config: &Config) -> GenerationRequest {
        let length = config.clamp_length(
            self.length.unwrap_or(config.default_password_length as i64),
        );

        let uppercase = self.uppercase.unwrap_or(true);
        let mut lowercase = self.lowercase.unwrap_or(true);
        let numbers = self.numbers.unwrap_or(true);
        let special = self.special.unwrap_or(true);

        if !(uppercase || lowercase || numbers || special) {
            lowercase = true;
        }

        GenerationRequest::from_flags(length, uppercase, lowercase, numbers, special)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordResponse {
    /// The generated password
    pub password: String,
    /// Score and band of the generated password
    pub strength: StrengthReport,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordRequest {
    /// Password to evaluate
    pub password: Option<String>,
}

impl CheckPasswordRequest {
    // Missing and empty passwords are both rejected
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordResponse {
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzePasswordResponse {
    pub analysis: DeepAnalysis,
    /// Hints for improving the password
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
