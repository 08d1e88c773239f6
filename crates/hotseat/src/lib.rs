//! Hotseat - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Core** ([`hotseat_core`]): board, players, turn order, win/tie rules
//! - **Display**: [`DisplayController`] turns round outcomes into what the
//!   user sees, independent of any terminal
//! - **TUI**: ratatui front end driving the controller from key presses
//! - **Replay**: headless driver for scripted move lists
//!
//! # Example
//!
//! ```
//! use hotseat::{DisplayController, replay};
//!
//! # fn main() -> Result<(), hotseat::ReplayError> {
//! let mut controller = DisplayController::new("Player 1", "Player 2");
//! controller.start_game("Alice", "Bob");
//! let tokens: Vec<String> = ["1", "4", "2", "5", "3"].map(String::from).to_vec();
//! let moves = replay::parse_moves(&tokens)?;
//! let reports = replay::replay(&mut controller, &moves);
//! assert_eq!(reports.last().map(|r| r.status().as_str()), Some("🎉 Alice wins!"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod display;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use display::{DisplayController, TIE_MESSAGE, WELCOME_MESSAGE, turn_message, win_message};
pub use replay::{ReplayError, RoundReport};
