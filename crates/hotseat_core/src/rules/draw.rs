//! Tie detection logic for tic-tac-toe.

use crate::types::Cell;
use tracing::instrument;

/// Checks if every cell holds a marker.
#[instrument]
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_winner;
    use crate::types::Marker;

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[E; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&[X, O, X, E, E, E, E, E, E]));
    }

    #[test]
    fn test_draw_detection() {
        let cells = [X, O, X, X, O, O, O, X, X];
        assert!(is_full(&cells));
        assert_eq!(check_winner(&cells), None);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let cells = [X, X, X, O, O, X, O, X, O];
        assert!(is_full(&cells));
        assert!(check_winner(&cells).is_some());
    }
}
