// src/cli/handlers.rs
use std::io::{self, BufRead};
use anyhow::{anyhow, Context, Result};
use console::{style, StyledObject};
use crate::analysis;
use crate::api::handlers::generator::{build_generate_response, MISSING_PASSWORD};
use crate::api::types::GeneratePasswordRequest;
use crate::core::config::Config;
use crate::models::{DeepAnalysis, StrengthLevel, StrengthReport};
use crate::utils::mask_password;

// Handlers for CLI commands (plain text output)
pub fn handle_generate(
    config: &Config,
    request: &GeneratePasswordRequest,
    count: usize,
) -> Result<()> {
    for _ in 0..count.max(1) {
        let response = build_generate_response(config, request)
            .context("Failed to generate password")?;
        println!("{}  {}", response.password, format_report(&response.strength));
    }
    Ok(())
}

pub fn handle_check(password: &str) -> Result<()> {
    let report = analysis::evaluate(password);
    println!("Password: {}", mask_password(password));
    println!("Strength: {}", format_report(&report));
    Ok(())
}

pub fn handle_analyze(password: &str) -> Result<()> {
    let analysis = analysis::analyze(password);
    println!("Password:            {}", mask_password(password));
    print_analysis(&analysis);
    Ok(())
}

pub fn print_analysis(analysis: &DeepAnalysis) {
    println!("Strength:            {}", format_report(&analysis.report()));
    println!("Length:              {}", analysis.length);
    println!("Uppercase:           {}", yes_no(analysis.has_upper));
    println!("Lowercase:           {}", yes_no(analysis.has_lower));
    println!("Numbers:             {}", yes_no(analysis.has_digit));
    println!("Special:             {}", yes_no(analysis.has_special));
    println!("Sequential run:      {}", yes_no(analysis.has_sequential_run));
    println!("Repeated run:        {}", yes_no(analysis.has_repeated_run));
    println!("Common word:         {}", yes_no(analysis.has_common_word_substring));
    println!("Time to crack:       {}", analysis.estimated_crack_time);

    let suggestions = analysis.suggestions();
    if !suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in suggestions {
            println!("  • {}", suggestion);
        }
    }
}

pub fn format_report(report: &StrengthReport) -> String {
    format!("{}/100 ({})", report.score, styled_level(report.level))
}

pub fn styled_level(level: StrengthLevel) -> StyledObject<&'static str> {
    let text = style(level.as_str());
    match level {
        StrengthLevel::VeryWeak => text.red().bold(),
        StrengthLevel::Weak => text.red(),
        StrengthLevel::Medium => text.yellow(),
        StrengthLevel::Strong => text.green(),
        StrengthLevel::VeryStrong => text.green().bold(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Use the argument if given, otherwise read a single line from stdin.
pub fn resolve_password(arg: Option<String>) -> Result<String> {
    let password = match arg {
        Some(password) => password,
        None => read_password_line(io::stdin().lock())?,
    };

    if password.is_empty() {
        return Err(anyhow!(MISSING_PASSWORD));
    }
    Ok(password)
}

fn read_password_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
