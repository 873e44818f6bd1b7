// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use crate::generators::password::DEFAULT_MAX_ATTEMPTS;
use crate::generators::RngSource;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub max_generation_attempts: usize,
    pub rng_source: RngSource,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            min_password_length: 4,
            max_password_length: 50,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_source: RngSource::Thread,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Rejected values are returned as messages so they can be logged once
    /// the logger exists.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => {
                    warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val))
                }
            }
        }

        if let Some(val) = lookup("MIN_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.min_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid MIN_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.max_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if config.min_password_length > config.max_password_length {
            warnings.push(format!(
                "MIN_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using defaults",
                config.min_password_length, config.max_password_length
            ));
            let defaults = Config::default();
            config.min_password_length = defaults.min_password_length;
            config.max_password_length = defaults.max_password_length;
        }

        if let Some(val) = lookup("MAX_GENERATION_ATTEMPTS") {
            match val.parse::<usize>() {
                Ok(attempts) if attempts > 0 => config.max_generation_attempts = attempts,
                _ => warnings.push(format!("Ignoring invalid MAX_GENERATION_ATTEMPTS '{}'", val)),
            }
        }

        if let Some(val) = lookup("PASSGEN_RNG") {
            match val.parse::<RngSource>() {
                Ok(source) => config.rng_source = source,
                Err(e) => warnings.push(format!("{}, using {}", e, config.rng_source)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring invalid WEB_PORT '{}'", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Pins a requested length into the configured range.
    pub fn clamp_length(&self, length: i64) -> usize {
        let min = self.min_password_length as i64;
        let max = self.max_password_length as i64;
        length.clamp(min, max) as usize
    }
}
