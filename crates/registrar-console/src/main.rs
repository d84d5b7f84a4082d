//! Registrar CLI
//!
//! Command-line console for the academic records API.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use registrar_console::ConsoleConfig;
use registrar_console::cli::Cli;
use registrar_console::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref());

    let level = config
        .as_ref()
        .map(|c| c.log.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli.command, cli.config.as_deref(), config).await?;
    Ok(())
}
