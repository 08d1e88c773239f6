//! Game rules for tic-tac-toe.
//!
//! Pure functions over a cell snapshot, kept apart from board storage so
//! the engine and the UI evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};
