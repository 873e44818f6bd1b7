// src/cli/menu.rs
use inquire::{Confirm, CustomType, Password, Select};
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::types::GeneratePasswordRequest;
use crate::core::config::Config;
use crate::cli::handlers;

const GENERATE: &str = "🔐  Generate password";
const CHECK: &str = "📊  Check password strength";
const ANALYZE: &str = "🔎  Analyze password";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUSTPASSGEN                ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        let choice = Select::new("What would you like to do?", vec![GENERATE, CHECK, ANALYZE, EXIT])
            .prompt()?;

        match choice {
            GENERATE => {
                let request = prompt_generation_request(config)?;
                if let Err(e) = handlers::handle_generate(config, &request, 1) {
                    eprintln!("❌ {:#}", e);
                }
            }
            CHECK => {
                let password = prompt_password()?;
                if password.is_empty() {
                    println!("❗ No password provided.");
                } else {
                    handlers::handle_check(&password)?;
                }
            }
            ANALYZE => {
                let password = prompt_password()?;
                if password.is_empty() {
                    println!("❗ No password provided.");
                } else {
                    handlers::handle_analyze(&password)?;
                }
            }
            _ => break,
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn prompt_generation_request(config: &Config) -> Result<GeneratePasswordRequest> {
    let length = CustomType::<i64>::new("Password length:")
        .with_default(config.default_password_length as i64)
        .with_help_message(&format!(
            "Clamped to {}..={}",
            config.min_password_length, config.max_password_length
        ))
        .with_error_message("Please enter a whole number")
        .prompt()?;

    let uppercase = Confirm::new("Include uppercase letters?").with_default(true).prompt()?;
    let lowercase = Confirm::new("Include lowercase letters?").with_default(true).prompt()?;
    let numbers = Confirm::new("Include numbers?").with_default(true).prompt()?;
    let special = Confirm::new("Include special characters?").with_default(true).prompt()?;

    Ok(GeneratePasswordRequest {
        length: Some(length),
        uppercase: Some(uppercase),
        lowercase: Some(lowercase),
        numbers: Some(numbers),
        special: Some(special),
    })
}

fn prompt_password() -> Result<String> {
    Ok(Password::new("Password:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?)
}
