// src/analysis/crack_time.rs
use crate::generators::charset::CharacterClass;
use crate::models::ClassPresence;

/// Guesses per second assumed for the attacker.
pub const GUESSES_PER_SECOND: f64 = 1e12;

// Used when the password matches no class at all (e.g. empty)
const FALLBACK_CHARSET_SIZE: u32 = 26;

pub fn charset_size(presence: &ClassPresence) -> u32 {
    let size: u32 = CharacterClass::ALL
        .iter()
        .filter(|class| presence.has(**class))
        .map(|class| class.brute_force_size())
        .sum();

    if size == 0 {
        FALLBACK_CHARSET_SIZE
    } else {
        size
    }
}

/// Average-case exhaustive search time: half the keyspace at
/// [`GUESSES_PER_SECOND`]. Overflows to infinity for very long inputs.
pub fn estimate_crack_seconds(presence: &ClassPresence, length: usize) -> f64 {
    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    let combinations = f64::from(charset_size(presence)).powi(exponent);
    (combinations / GUESSES_PER_SECOND) / 2.0
}
