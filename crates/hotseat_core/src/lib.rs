//! Hotseat core - tic-tac-toe board and rule engine.
//!
//! Two players share one device and take turns. The crate owns the board,
//! the players and the turn order; rendering and input are left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use hotseat_core::{Game, RoundOutcome};
//!
//! let mut game = Game::new();
//! game.configure_players("Alice", "Bob");
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.play_round(index), RoundOutcome::Continue);
//! }
//! assert_eq!(game.play_round(2), RoundOutcome::Win);
//! assert_eq!(game.get_current_player().name(), "Alice");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
pub mod rules;
mod types;

pub use board::{Board, CELL_COUNT, MarkError};
pub use game::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, Game};
pub use position::Position;
pub use types::{Cell, GameStatus, Marker, Player, RoundOutcome, Seat};
