//! Headless play: feed a list of cell numbers through the display controller.

use crate::DisplayController;
use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_core::{CELL_COUNT, Cell, Marker, Position, RoundOutcome};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A move token that could not be read as a cell number.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// Token is not a whole number.
    #[display("'{token}' is not a cell number (expected 1-9)")]
    NotANumber {
        /// The offending token.
        token: String,
    },
    /// Number is outside the board.
    #[display("cell {number} is off the board (expected 1-9)")]
    OutOfRange {
        /// The offending number.
        number: usize,
    },
}

/// What happened on one replayed move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct RoundReport {
    /// Cell number (1-9) that was selected.
    cell: usize,
    /// Outcome returned by the engine.
    outcome: RoundOutcome,
    /// Status line after the move.
    status: String,
    /// Cells after the move, as `"X"`, `"O"` or `""`.
    board: [&'static str; CELL_COUNT],
}

impl RoundReport {
    /// One-line text form, e.g. `1 -> continue | Current player: Bob (O)`.
    pub fn summary(&self) -> String {
        format!("{} -> {} | {}", self.cell, self.outcome, self.status)
    }
}

fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "",
        Cell::Marked(Marker::X) => "X",
        Cell::Marked(Marker::O) => "O",
    }
}

/// Parses move tokens as keypad-style cell numbers, 1 (top-left) to 9 (bottom-right).
///
/// Fails on the first token that is not a number in that range, before any
/// move is played.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>, ReplayError> {
    tokens
        .iter()
        .map(|token| {
            let number = token
                .trim()
                .parse::<usize>()
                .map_err(|_| ReplayError::NotANumber {
                    token: token.clone(),
                })?;
            Position::from_number(number).ok_or(ReplayError::OutOfRange { number })
        })
        .collect()
}

/// Selects each cell in turn and reports every round.
///
/// Stops early once a move ends the game; remaining moves are dropped.
#[instrument(skip(controller))]
pub fn replay(controller: &mut DisplayController, moves: &[Position]) -> Vec<RoundReport> {
    let mut reports = Vec::with_capacity(moves.len());
    for (played, &position) in moves.iter().enumerate() {
        let outcome = controller.select_cell(position.to_index());
        reports.push(RoundReport {
            cell: position.to_index() + 1,
            outcome,
            status: controller.status().to_string(),
            board: controller.board().map(cell_symbol),
        });
        if outcome.is_terminal() {
            let dropped = moves.len() - played - 1;
            if dropped > 0 {
                warn!(dropped, "Game over, ignoring remaining moves");
            }
            break;
        }
    }
    info!(rounds = reports.len(), "Replay finished");
    reports
}

/// Renders the final board of a replay for text output.
pub fn final_board(controller: &DisplayController) -> String {
    controller.game().board().render()
}
