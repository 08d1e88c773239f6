//! Hotseat - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hotseat::{DisplayController, Settings, logging, replay};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { x_name, o_name } => hotseat::tui::run_tui(&settings, x_name, o_name),
        Command::Replay {
            x_name,
            o_name,
            json,
            moves,
        } => run_replay(&settings, &x_name, &o_name, json, &moves),
    }
}

/// Plays the moves through the display controller and prints each round.
#[instrument(skip(settings))]
fn run_replay(
    settings: &Settings,
    x_name: &str,
    o_name: &str,
    json: bool,
    moves: &[String],
) -> Result<()> {
    logging::init_stderr_logging(settings);

    let moves = replay::parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");

    let mut controller =
        DisplayController::new(settings.default_x_name(), settings.default_o_name());
    controller.start_game(x_name, o_name);

    let reports = replay::replay(&mut controller, &moves);
    if json {
        for report in &reports {
            println!("{}", serde_json::to_string(report)?);
        }
    } else {
        for report in &reports {
            println!("{}", report.summary());
        }
        println!();
        println!("{}", replay::final_board(&controller));
    }

    Ok(())
}
