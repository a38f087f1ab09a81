//! First-class placement types.
//!
//! A [`PlacementRequest`] is the caller's intent in raw board coordinates;
//! a [`Placement`] is the record of one that the board accepted.

use super::{GamePiece, Location};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Raw coordinates a caller asks to place the next piece at.
///
/// Coordinates are signed so that out-of-range requests (including
/// negative ones) can be expressed and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct PlacementRequest {
    /// Requested row.
    pub row: isize,
    /// Requested column.
    pub column: isize,
}

impl PlacementRequest {
    /// Creates a new request.
    #[instrument]
    pub fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }
}

/// A piece that was placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{piece} -> {location}")]
pub struct Placement {
    /// The piece that was placed.
    pub piece: GamePiece,
    /// Where it was placed.
    pub location: Location,
}

impl Placement {
    /// Creates a new placement record.
    #[instrument]
    pub fn new(piece: GamePiece, location: Location) -> Self {
        Self { piece, location }
    }

    /// Returns the piece that was placed.
    pub fn piece(&self) -> GamePiece {
        self.piece
    }

    /// Returns where the piece was placed.
    pub fn location(&self) -> Location {
        self.location
    }
}
