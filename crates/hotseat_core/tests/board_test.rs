//! Tests for board occupancy rules.

use hotseat_core::{Board, Cell, Marker};

#[test]
fn test_out_of_range_mark_fails() {
    let mut board = Board::new();
    for index in [9, 10, 100, usize::MAX] {
        assert!(!board.mark(index, Marker::X));
        assert_eq!(board, Board::new());
    }
}

#[test]
fn test_mark_empty_cell_then_reject_second_mark() {
    for index in 0..9 {
        let mut board = Board::new();
        assert!(board.mark(index, Marker::X));
        assert_eq!(board.get_board()[index], Cell::Marked(Marker::X));

        let before = board.get_board();
        assert!(!board.mark(index, Marker::O));
        assert_eq!(board.get_board(), before);
    }
}

#[test]
fn test_reset_clears_any_board() {
    let mut board = Board::new();
    for index in 0..9 {
        let marker = if index % 2 == 0 { Marker::X } else { Marker::O };
        board.mark(index, marker);
    }
    assert!(board.is_full());

    board.reset();
    assert_eq!(board.get_board(), [Cell::Empty; 9]);
    assert!(!board.is_full());
}

#[test]
fn test_empty_indices_shrink_as_cells_fill() {
    let mut board = Board::new();
    board.mark(0, Marker::X);
    board.mark(8, Marker::O);
    assert_eq!(board.empty_indices(), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_board_serializes_cells() {
    let mut board = Board::new();
    board.mark(0, Marker::X);
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["cells"][0], serde_json::json!({ "Marked": "X" }));
    assert_eq!(json["cells"][1], serde_json::json!("Empty"));
}
