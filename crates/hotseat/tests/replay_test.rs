//! Tests for headless replay.

use hotseat::{DisplayController, ReplayError, replay};
use hotseat_core::{Position, RoundOutcome};

fn tokens(moves: &[&str]) -> Vec<String> {
    moves.iter().map(|s| s.to_string()).collect()
}

fn moves(numbers: &[&str]) -> Vec<Position> {
    replay::parse_moves(&tokens(numbers)).unwrap()
}

fn new_game() -> DisplayController {
    let mut controller = DisplayController::new("Player 1", "Player 2");
    controller.start_game("Alice", "Bob");
    controller
}

#[test]
fn test_parse_moves_is_one_based() {
    assert_eq!(
        moves(&["1", " 5 ", "9"]),
        vec![Position::TopLeft, Position::Center, Position::BottomRight]
    );
}

#[test]
fn test_parse_moves_rejects_non_numbers() {
    let err = replay::parse_moves(&tokens(&["1", "centre"])).unwrap_err();
    assert_eq!(
        err,
        ReplayError::NotANumber {
            token: "centre".to_string()
        }
    );
    assert_eq!(err.to_string(), "'centre' is not a cell number (expected 1-9)");
    assert!(replay::parse_moves(&tokens(&["-1"])).is_err());
}

#[test]
fn test_parse_moves_rejects_numbers_off_the_board() {
    assert_eq!(
        replay::parse_moves(&tokens(&["1", "0"])),
        Err(ReplayError::OutOfRange { number: 0 })
    );
    let err = replay::parse_moves(&tokens(&["12", "1"])).unwrap_err();
    assert_eq!(err, ReplayError::OutOfRange { number: 12 });
    assert_eq!(err.to_string(), "cell 12 is off the board (expected 1-9)");
}

#[test]
fn test_bad_token_plays_nothing() {
    let mut controller = new_game();
    if let Ok(parsed) = replay::parse_moves(&tokens(&["1", "10"])) {
        replay::replay(&mut controller, &parsed);
    }
    assert_eq!(controller.game().moves_played(), 0);
}

#[test]
fn test_replay_reports_every_round() {
    let mut controller = new_game();
    let reports = replay::replay(&mut controller, &moves(&["1", "1", "4"]));

    let outcomes: Vec<_> = reports.iter().map(|r| *r.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![RoundOutcome::Continue, RoundOutcome::Invalid, RoundOutcome::Continue]
    );
    assert_eq!(reports[1].status(), "Current player: Bob (O)");
    assert_eq!(reports[2].board()[3], "O");
    assert_eq!(reports[2].summary(), "4 -> continue | Current player: Alice (X)");
}

#[test]
fn test_replay_stops_at_terminal_outcome() {
    let mut controller = new_game();
    let reports = replay::replay(&mut controller, &moves(&["1", "4", "2", "5", "3", "6", "7"]));
    assert_eq!(reports.len(), 5);
    assert_eq!(*reports[4].outcome(), RoundOutcome::Win);
    assert_eq!(reports[4].status(), "🎉 Alice wins!");
}

#[test]
fn test_report_json_shape() {
    let mut controller = new_game();
    let reports = replay::replay(&mut controller, &moves(&["5"]));
    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["cell"], 5);
    assert_eq!(json["outcome"], "continue");
    assert_eq!(json["board"][4], "X");
    assert_eq!(json["board"][0], "");
}

#[test]
fn test_final_board_numbers_match_input() {
    let mut controller = new_game();
    replay::replay(&mut controller, &moves(&["1", "5"]));
    assert_eq!(
        replay::final_board(&controller),
        "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"
    );
}
