// src/api/handlers/json_api.rs
use anyhow::Result;
use log::error;
use serde_json::{json, Value};
use crate::analysis;
use crate::cli::CliCommand;
use crate::cli::handlers::resolve_password;
use crate::core::config::Config;
use crate::api::handlers::generator::build_generate_response;
use crate::api::types::{AnalyzePasswordResponse, CheckPasswordResponse, ErrorResponse};

/// Handle JSON API requests from CLI
///
/// Runs the command given with `--json` and prints one JSON document per
/// result, shaped like the HTTP responses.
pub fn handle_json_api(command: &CliCommand, config: &Config) -> Result<()> {
    for response in json_responses(command, config) {
        println!("{}", response);
    }
    Ok(())
}

pub fn json_responses(command: &CliCommand, config: &Config) -> Vec<Value> {
    match command {
        CliCommand::Generate { count, .. } => {
            let request = command.generation_request().unwrap_or_default();
            (0..(*count).max(1))
                .map(|_| match build_generate_response(config, &request) {
                    Ok(response) => json!(response),
                    Err(e) => {
                        error!("Password generation failed: {}", e);
                        json!(ErrorResponse::new(e.to_string()))
                    }
                })
                .collect()
        }

        CliCommand::Check { password } => {
            vec![match resolve_password(password.clone()) {
                Ok(password) => json!(CheckPasswordResponse {
                    strength: analysis::evaluate(&password),
                }),
                Err(e) => json!(ErrorResponse::new(e.to_string())),
            }]
        }

        CliCommand::Analyze { password } => {
            vec![match resolve_password(password.clone()) {
                Ok(password) => {
                    let analysis = analysis::analyze(&password);
                    let suggestions = analysis.suggestions();
                    json!(AnalyzePasswordResponse { analysis, suggestions })
                }
                Err(e) => json!(ErrorResponse::new(e.to_string())),
            }]
        }

        CliCommand::Serve => {
            vec![json!(ErrorResponse::new("The serve command has no JSON output"))]
        }
    }
}
