//! Win detection logic for tic-tac-toe.

use crate::types::{Cell, Marker};
use tracing::instrument;

/// The eight lines, in the order they are scanned.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Returns the first line, in [`LINES`] order, whose three cells hold the same marker.
#[instrument]
pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker fills a complete line,
/// `None` otherwise.
#[instrument]
pub fn check_winner(cells: &[Cell; 9]) -> Option<Marker> {
    winning_line(cells).and_then(|[a, _, _]| cells[a].marker())
}
