//! End-to-end tests for the hot-seat session.

use sano::{GameConfig, Session, SessionSummary};
use sano_board::GamePiece;

fn play(config: GameConfig, script: &str) -> (SessionSummary, String) {
    let mut output = Vec::new();
    let session = Session::new(config, script.as_bytes(), &mut output).expect("Valid config");
    let summary = session.run().expect("Session should finish cleanly");
    (summary, String::from_utf8(output).expect("Output is UTF-8"))
}

#[test]
fn test_win_is_announced() {
    let (summary, output) = play(GameConfig::default(), "0 0\n1 0\n0 1\n1 1\n0 2\nquit\n");
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.draws, 0);
    assert!(output.contains("● ● ●\n○ ○ ·\n· · ·"));
    assert!(output.contains("● solid wins!"));
}

#[test]
fn test_draw_is_announced() {
    let script = "0,0\n0,1\n1,0\n2,0\n0,2\n1,1\n2,1\n1,2\n2,2\n";
    let (summary, output) = play(GameConfig::default(), script);
    assert_eq!(summary.draws, 1);
    assert_eq!(summary.wins, 0);
    assert!(output.contains("Draw!"));
}

#[test]
fn test_rejected_moves_are_reported_and_counted() {
    let (summary, output) = play(GameConfig::default(), "0 0\n0 0\n3 3\n-1 0\n");
    assert_eq!(summary.rejected, 3);
    assert!(output.contains("Location (0, 0) is already occupied"));
    assert!(output.contains("Location (3, 3) is outside the 3x3 board"));
    assert!(output.contains("Location (-1, 0) is outside the 3x3 board"));
}

#[test]
fn test_completed_game_requires_new() {
    let script = "0 0\n1 0\n0 1\n1 1\n0 2\n2 2\nnew\n2 2\n";
    let (summary, output) = play(GameConfig::default(), script);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.rejected, 1);
    assert!(output.contains("Game is already completed"));
    assert!(output.contains("Type `new` to play again."));
    assert!(output.contains("New game."));
    // The fresh board accepts (2, 2) for the first piece again.
    assert!(output.contains("· · ·\n· · ·\n· · ●"));
}

#[test]
fn test_larger_board_and_donut_first() {
    let config = GameConfig::new(4, GamePiece::Donut);
    let (summary, output) = play(config, "0 0\n");
    assert_eq!(summary, SessionSummary::default());
    assert!(output.starts_with("· · · ·\n· · · ·\n· · · ·\n· · · ·\n○ donut > "));
    assert!(output.contains("○ · · ·"));
}

#[test]
fn test_unknown_input_keeps_playing() {
    let (summary, output) = play(GameConfig::default(), "center\nhelp\n1 1\n");
    assert_eq!(summary.rejected, 0);
    assert!(output.contains("Unrecognized input \"center\""));
    assert!(output.contains("Commands:"));
    assert!(output.contains("· ● ·"));
}

#[test]
fn test_zero_size_config_is_rejected() {
    let result = Session::new(GameConfig::new(0, GamePiece::Solid), "".as_bytes(), Vec::new());
    assert!(result.is_err());
}

#[test]
fn test_oversized_config_is_rejected() {
    let config = GameConfig::new(1 << 32, GamePiece::Solid);
    let err = Session::new(config, "0 0\n".as_bytes(), Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("exceeds the maximum of 4096"));
}
