//! Strictly Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use strictly_tictactoe_tui::{
    TuiConfig, app,
    cli::{Cli, Command},
    replay,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { file, json } => run_replay(&config, &file, json),
    }
}

/// Play in the terminal; logs go to a file so they never hit the screen.
fn run_play(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let theme = config.theme().resolve()?;
    app::run(theme)
}

/// Replay an action script and print the outcome.
fn run_replay(config: &TuiConfig, file: &Path, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(file = %file.display(), "Replaying actions");
    let state = replay::replay_file(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", replay::summary(&state));
    }
    Ok(())
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
