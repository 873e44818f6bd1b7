// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand_core::RngCore;
use log::{debug, warn};
use crate::core::config::Config;
use crate::models::GenerationRequest;
use super::{GeneratorError, Result};
use super::rng::RngSource;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

pub struct PasswordGenerator {
    rng_source: RngSource,
    max_attempts: usize,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            rng_source: RngSource::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        PasswordGenerator {
            rng_source: config.rng_source,
            max_attempts: config.max_generation_attempts,
        }
    }

    pub fn with_rng_source(mut self, rng_source: RngSource) -> Self {
        self.rng_source = rng_source;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Draws `length` characters uniformly (with replacement) from the pool
    /// of enabled classes. Makes no coverage promise.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let mut rng = self.rng_source.build();
        sample(rng.as_mut(), request)
    }

    /// Like [`generate`](Self::generate) but retries until every enabled
    /// class is represented at least once.
    pub fn generate_secure(&self, request: &GenerationRequest) -> Result<String> {
        if request.classes.is_empty() {
            return Err(GeneratorError::empty_pool());
        }

        let required = request.classes.len();
        if request.length < required {
            return Err(GeneratorError::InvalidRequest(format!(
                "Length must be at least {} to include every selected character type",
                required
            )));
        }

        // One RNG for the whole loop so seeded sources still make progress
        let mut rng = self.rng_source.build();
        for attempt in 1..=self.max_attempts {
            let password = sample(rng.as_mut(), request)?;
            if request.classes.is_covered_by(&password) {
                debug!(
                    "Generated {}-character password over {} classes after {} attempt(s)",
                    request.length, required, attempt
                );
                return Ok(password);
            }
        }

        warn!(
            "Gave up on class coverage for length {} after {} attempts",
            request.length, self.max_attempts
        );
        Err(GeneratorError::RetryExhausted { attempts: self.max_attempts })
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn sample(rng: &mut dyn RngCore, request: &GenerationRequest) -> Result<String> {
    let pool = request.classes.build_pool();
    if pool.is_empty() {
        return Err(GeneratorError::empty_pool());
    }

    let dist = Uniform::from(0..pool.len());
    Ok((0..request.length)
        .map(|_| pool[dist.sample(&mut *rng)] as char)
        .collect())
}
