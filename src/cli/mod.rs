// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Random password generator and strength checker",
    long_about = None
)]
pub struct Args {
    /// Print results as JSON documents (same shape as the HTTP API)
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port (overrides WEB_PORT)
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Run the API server instead of the interactive menu
    #[arg(long)]
    pub api_only: bool,
}
