//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Marker a player writes into board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Marker {
    /// Marker of the first player.
    #[display("X")]
    X,
    /// Marker of the second player.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Checks whether the cell is still free.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A participant: display name plus assigned marker.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct Player {
    /// Name shown in status messages.
    name: String,
    /// Marker fixed for the whole game.
    marker: Marker,
}

/// Which of the two seats is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Seat {
    /// First player, always plays X and moves first.
    #[default]
    First,
    /// Second player, always plays O.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Marker assigned to this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::First => Marker::X,
            Seat::Second => Marker::O,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Classification of a single move attempt.
///
/// Produced fresh by every call to [`Game::play_round`](crate::Game::play_round);
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// Move rejected; nothing changed.
    #[display("invalid")]
    Invalid,
    /// Move completed a line. The current player is the winner.
    #[display("win")]
    Win,
    /// Move filled the board without completing a line.
    #[display("tie")]
    Tie,
    /// Move accepted; the turn passed to the other player.
    #[display("continue")]
    Continue,
}

impl RoundOutcome {
    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Tie)
    }
}

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A line was completed by the given marker.
    Won(Marker),
    /// The board filled up with no line.
    Tied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::X.to_string(), "X");
        assert_eq!(Marker::O.to_string(), "O");
    }

    #[test]
    fn test_seat_markers_are_disjoint() {
        assert_eq!(Seat::First.marker(), Marker::X);
        assert_eq!(Seat::Second.marker(), Marker::O);
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().marker().opponent(), Marker::O);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(RoundOutcome::Invalid.to_string(), "invalid");
        assert_eq!(RoundOutcome::Continue.to_string(), "continue");
        assert!(RoundOutcome::Win.is_terminal());
        assert!(RoundOutcome::Tie.is_terminal());
        assert!(!RoundOutcome::Continue.is_terminal());
    }
}
