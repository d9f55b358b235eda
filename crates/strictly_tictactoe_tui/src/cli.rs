//! Command-line interface for strictly_tictactoe_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play,

    /// Replay a file of JSON actions and print the resulting game
    Replay {
        /// File with one JSON action per line
        file: PathBuf,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
