//! Game status derived from the grid.

use super::GamePiece;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// `Won` and `Draw` are terminal: once reached, every further placement is
/// rejected with [`crate::PlacementError::Completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A piece filled a complete line.
    Won(GamePiece),
    /// Every cell is filled and no line is complete.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<GamePiece> {
        match self {
            GameStatus::Won(piece) => Some(*piece),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once no more placements are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(piece) => write!(f, "{} {} wins", piece.glyph(), piece),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
