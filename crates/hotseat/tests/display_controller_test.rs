//! Tests for the presentation binding.

use hotseat::{DisplayController, TIE_MESSAGE, WELCOME_MESSAGE};
use hotseat_core::{Cell, RoundOutcome};

fn started(name_x: &str, name_o: &str) -> DisplayController {
    let mut controller = DisplayController::new("Player 1", "Player 2");
    controller.start_game(name_x, name_o);
    controller
}

#[test]
fn test_welcome_before_start() {
    let controller = DisplayController::new("Player 1", "Player 2");
    assert_eq!(controller.status(), WELCOME_MESSAGE);
    assert!(!controller.started());
    assert!(!controller.restart_visible());
}

#[test]
fn test_clicks_before_start_are_ignored() {
    let mut controller = DisplayController::new("Player 1", "Player 2");
    assert_eq!(controller.select_cell(4), RoundOutcome::Invalid);
    assert_eq!(controller.board(), [Cell::Empty; 9]);
    assert_eq!(controller.status(), WELCOME_MESSAGE);
}

#[test]
fn test_blank_names_use_defaults() {
    let controller = started("   ", "");
    let players = controller.game().players();
    assert_eq!(players[0].name(), "Player 1");
    assert_eq!(players[1].name(), "Player 2");
    assert_eq!(controller.status(), "Current player: Player 1 (X)");
}

#[test]
fn test_names_are_trimmed() {
    let controller = started("  Alice ", "Bob\t");
    assert_eq!(controller.game().players()[0].name(), "Alice");
    assert_eq!(controller.game().players()[1].name(), "Bob");
}

#[test]
fn test_configured_defaults() {
    let mut controller = DisplayController::new("Crosses", "Noughts");
    controller.start_game("", "");
    assert_eq!(controller.status(), "Current player: Crosses (X)");
}

#[test]
fn test_status_follows_turns() {
    let mut controller = started("Alice", "Bob");
    assert_eq!(controller.select_cell(0), RoundOutcome::Continue);
    assert_eq!(controller.status(), "Current player: Bob (O)");
    assert_eq!(controller.select_cell(4), RoundOutcome::Continue);
    assert_eq!(controller.status(), "Current player: Alice (X)");
}

#[test]
fn test_invalid_click_changes_nothing_visible() {
    let mut controller = started("Alice", "Bob");
    controller.select_cell(0);
    let status = controller.status().to_string();
    let board = controller.board();

    assert_eq!(controller.select_cell(0), RoundOutcome::Invalid);
    assert_eq!(controller.select_cell(42), RoundOutcome::Invalid);
    assert_eq!(controller.status(), status);
    assert_eq!(controller.board(), board);
    assert!(!controller.restart_visible());
}

#[test]
fn test_win_shows_winner_and_restart() {
    let mut controller = started("Alice", "Bob");
    for index in [0, 3, 1, 4] {
        controller.select_cell(index);
    }
    assert_eq!(controller.select_cell(2), RoundOutcome::Win);
    assert_eq!(controller.status(), "🎉 Alice wins!");
    assert!(controller.restart_visible());
}

#[test]
fn test_tie_shows_message_and_restart() {
    let mut controller = started("Alice", "Bob");
    let mut last = RoundOutcome::Invalid;
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        last = controller.select_cell(index);
    }
    assert_eq!(last, RoundOutcome::Tie);
    assert_eq!(controller.status(), TIE_MESSAGE);
    assert!(controller.restart_visible());
}

#[test]
fn test_restart_keeps_names() {
    let mut controller = started("Alice", "Bob");
    for index in [0, 3, 1, 4, 2] {
        controller.select_cell(index);
    }
    controller.restart();
    assert_eq!(controller.board(), [Cell::Empty; 9]);
    assert!(!controller.restart_visible());
    assert_eq!(controller.status(), "Current player: Alice (X)");
}

#[test]
fn test_start_game_replaces_players_and_clears_board() {
    let mut controller = started("Alice", "Bob");
    controller.select_cell(0);
    controller.select_cell(1);

    controller.start_game("Cy", "Di");
    assert_eq!(controller.board(), [Cell::Empty; 9]);
    assert_eq!(controller.status(), "Current player: Cy (X)");
}
