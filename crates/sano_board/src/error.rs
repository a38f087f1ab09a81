//! Error types for board construction and placement.

use super::Location;
use derive_more::{Display, Error};

/// Error returned when a placement is rejected.
///
/// A rejected placement never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, strum::EnumDiscriminants)]
#[strum_discriminants(name(PlacementErrorKind), derive(Hash))]
pub enum PlacementError {
    /// Coordinates fall outside `[0, size)`.
    #[display("Location ({row}, {column}) is outside the {size}x{size} board")]
    OutOfBoard {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a piece.
    #[display("Location {_0} is already occupied")]
    NotEmptyLocation(Location),

    /// The game already has a winner or ended in a draw.
    #[display("Game is already completed")]
    Completed,

    /// A postcondition failed after applying the placement.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl PlacementError {
    /// Returns the error's tag without its payload.
    pub fn kind(&self) -> PlacementErrorKind {
        PlacementErrorKind::from(self)
    }
}

impl std::error::Error for PlacementError {}

/// Error returned when a board side length is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidSizeError {
    /// A board needs at least one cell.
    #[display("Board size must be a positive integer")]
    Zero,

    /// The side length is above the supported maximum.
    #[display("Board size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PlacementError::OutOfBoard {
            row: 3,
            column: -1,
            size: 3,
        };
        assert_eq!(err.to_string(), "Location (3, -1) is outside the 3x3 board");

        let err = PlacementError::NotEmptyLocation(Location::new(0, 0));
        assert_eq!(err.to_string(), "Location (0, 0) is already occupied");
    }

    #[test]
    fn test_kind_drops_payload() {
        let err = PlacementError::NotEmptyLocation(Location::new(2, 1));
        assert_eq!(err.kind(), PlacementErrorKind::NotEmptyLocation);
        assert_eq!(PlacementError::Completed.kind(), PlacementErrorKind::Completed);
    }

    #[test]
    fn test_size_messages() {
        assert_eq!(
            InvalidSizeError::Zero.to_string(),
            "Board size must be a positive integer"
        );
        let err = InvalidSizeError::TooLarge { size: 5000, max: 4096 };
        assert_eq!(err.to_string(), "Board size 5000 exceeds the maximum of 4096");
    }
}
