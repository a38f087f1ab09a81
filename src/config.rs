//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use sano_board::{GameBoard, GamePiece, InvalidSizeError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings used to build each new board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_size")]
    size: usize,

    /// Piece that moves first.
    #[serde(default = "default_first_piece")]
    first_piece: GamePiece,
}

fn default_size() -> usize {
    sano_board::STANDARD_SIZE
}

fn default_first_piece() -> GamePiece {
    GamePiece::Solid
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(size: usize, first_piece: GamePiece) -> Self {
        Self { size, first_piece }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, first_piece = %config.first_piece, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, size: Option<usize>, first_piece: Option<GamePiece>) -> Self {
        if let Some(size) = size {
            debug!(size, "Overriding board size");
            self.size = size;
        }
        if let Some(first_piece) = first_piece {
            debug!(%first_piece, "Overriding first piece");
            self.first_piece = first_piece;
        }
        self
    }

    /// Builds a fresh board from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] when the configured size is zero or
    /// too large.
    pub fn new_board(&self) -> Result<GameBoard, InvalidSizeError> {
        GameBoard::try_new(self.size, self.first_piece)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_size(), default_first_piece())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: GameConfig = toml::from_str("size = 4").unwrap();
        assert_eq!(*config.size(), 4);
        assert_eq!(*config.first_piece(), GamePiece::Solid);
    }

    #[test]
    fn test_first_piece_is_lowercase() {
        let config: GameConfig = toml::from_str("first_piece = \"donut\"").unwrap();
        assert_eq!(*config.first_piece(), GamePiece::Donut);
        assert_eq!(*config.size(), 3);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::new(5, GamePiece::Donut).with_overrides(None, Some(GamePiece::Solid));
        assert_eq!(config, GameConfig::new(5, GamePiece::Solid));
    }

    #[test]
    fn test_zero_size_board_rejected() {
        assert_eq!(
            GameConfig::new(0, GamePiece::Solid).new_board(),
            Err(InvalidSizeError::Zero)
        );
    }

    #[test]
    fn test_oversized_board_rejected() {
        let size = usize::MAX;
        assert!(matches!(
            GameConfig::new(size, GamePiece::Solid).new_board(),
            Err(InvalidSizeError::TooLarge { size: s, .. }) if s == size
        ));
    }
}
