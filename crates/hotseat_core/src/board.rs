//! The 3x3 grid and its occupancy rules.

use super::rules;
use super::types::{Cell, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Why a marker could not be written.
///
/// Callers of [`Game::play_round`](crate::Game::play_round) never see the
/// distinction; both cases collapse into
/// [`RoundOutcome::Invalid`](crate::RoundOutcome::Invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// Index is not in `0..9`.
    #[display("Cell {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// Rejected index.
        index: usize,
    },
    /// Cell already holds a marker.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// Rejected index.
        index: usize,
    },
}

/// Tic-tac-toe board: nine cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all nine cells.
    ///
    /// The array is `Copy`, so mutating the result never touches the board.
    pub fn get_board(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is free.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Writes `marker` at `index`, reporting why it could not.
    #[instrument(skip(self))]
    pub fn try_mark(&mut self, index: usize, marker: Marker) -> Result<(), MarkError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MarkError::OutOfBounds { index })?;
        if !cell.is_empty() {
            return Err(MarkError::Occupied { index });
        }
        *cell = Cell::Marked(marker);
        debug!(index, %marker, "Cell marked");
        Ok(())
    }

    /// Writes `marker` at `index` if the index is in range and the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched otherwise.
    pub fn mark(&mut self, index: usize, marker: Marker) -> bool {
        self.try_mark(index, marker).is_ok()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks whether every cell holds a marker.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Indices of free cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the board as plain text; empty cells show their 1-based number.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
