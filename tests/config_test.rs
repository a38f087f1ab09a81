//! Tests for loading game configuration from disk.

use sano::GameConfig;
use sano_board::GamePiece;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 5\nfirst_piece = \"donut\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::new(5, GamePiece::Donut));

    let board = config.new_board().unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.next_placing_piece(), GamePiece::Donut);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_reports_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_piece = \"cross\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_overrides_apply_after_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 5").unwrap();

    let config = GameConfig::load_or_default(file.path())
        .unwrap()
        .with_overrides(Some(3), Some(GamePiece::Donut));
    assert_eq!(config, GameConfig::new(3, GamePiece::Donut));
}
