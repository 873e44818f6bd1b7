// src/cli/commands.rs
use clap::Subcommand;
use crate::api::types::GeneratePasswordRequest;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords
    Generate {
        /// Password length (clamped to the configured range)
        #[arg(long, short, allow_hyphen_values = true)]
        length: Option<i64>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out punctuation
        #[arg(long)]
        no_special: bool,

        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Score an existing password (read from stdin when omitted)
    Check {
        password: Option<String>,
    },

    /// Detailed analysis of a password (read from stdin when omitted)
    Analyze {
        password: Option<String>,
    },

    /// Run the HTTP API server
    Serve,
}

impl CliCommand {
    /// Request body equivalent to a `generate` invocation
    pub fn generation_request(&self) -> Option<GeneratePasswordRequest> {
        match self {
            CliCommand::Generate {
                length,
                no_uppercase,
                no_lowercase,
                no_numbers,
                no_special,
                ..
            } => Some(GeneratePasswordRequest {
                length: *length,
                uppercase: Some(!no_uppercase),
                lowercase: Some(!no_lowercase),
                numbers: Some(!no_numbers),
                special: Some(!no_special),
            }),
            _ => None,
        }
    }
}
