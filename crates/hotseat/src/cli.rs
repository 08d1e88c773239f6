//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Pre-filled name for player X
        #[arg(long, default_value = "")]
        x_name: String,

        /// Pre-filled name for player O
        #[arg(long, default_value = "")]
        o_name: String,
    },

    /// Play a list of cell numbers (1-9) without a terminal UI
    Replay {
        /// Name for player X (blank uses the configured default)
        #[arg(long, default_value = "")]
        x_name: String,

        /// Name for player O (blank uses the configured default)
        #[arg(long, default_value = "")]
        o_name: String,

        /// Print one JSON object per round instead of text
        #[arg(long)]
        json: bool,

        /// Cell numbers, 1 (top-left) to 9 (bottom-right), as on the printed board
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
