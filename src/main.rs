use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod analysis;
mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn load_env_files() {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }
    if let Some(path) = utils::get_config_env_file() {
        dotenvy::from_path(&path).ok();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env_files();

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }

    logging::init(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);
    if !config.rng_source.is_secure() {
        log::warn!(
            "Using deterministic random source '{}'; do not use these passwords",
            config.rng_source
        );
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received, shutting down");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        })?;
    }

    // API-only mode (blocks until the server stops)
    if args.api_only || matches!(args.command, Some(CliCommand::Serve)) {
        api::start_server(config).await?;
        return Ok(());
    }

    match &args.command {
        Some(command) if args.json => api::handlers::handle_json_api(command, &config)?,
        Some(command) => run_command(command, &config)?,
        None => cli::menu::run_cli_menu(&config, should_exit)?,
    }

    Ok(())
}

fn run_command(command: &CliCommand, config: &Config) -> anyhow::Result<()> {
    match command {
        CliCommand::Generate { count, .. } => {
            let request = command.generation_request().unwrap_or_default();
            cli::handlers::handle_generate(config, &request, *count)
        }
        CliCommand::Check { password } => {
            let password = cli::handlers::resolve_password(password.clone())?;
            cli::handlers::handle_check(&password)
        }
        CliCommand::Analyze { password } => {
            let password = cli::handlers::resolve_password(password.clone())?;
            cli::handlers::handle_analyze(&password)
        }
        CliCommand::Serve => Ok(()),
    }
}
