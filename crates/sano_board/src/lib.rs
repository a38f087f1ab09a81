//! Pure game logic for an N×N two-piece placement game.
//!
//! Two pieces, [`GamePiece::Solid`] and [`GamePiece::Donut`], take turns
//! filling cells of a [`GameBoard`]. A piece wins by filling a whole row,
//! column or main diagonal; a full board with no such line is a draw.
//!
//! # Example
//!
//! ```
//! use sano_board::{GameBoard, GamePiece, GameStatus, PlacementError};
//!
//! let mut board = GameBoard::standard(GamePiece::Solid);
//! board.place_next_piece(1, 1)?;
//! assert_eq!(board.piece(1, 1), Some(GamePiece::Solid));
//! assert_eq!(board.next_placing_piece(), GamePiece::Donut);
//!
//! assert!(matches!(
//!     board.place_next_piece(1, 1),
//!     Err(PlacementError::NotEmptyLocation(_))
//! ));
//! assert_eq!(board.status(), GameStatus::InProgress);
//! # Ok::<(), PlacementError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod error;
mod invariants;
mod kani_support;
mod phases;
mod rules;
mod types;

pub use action::{Placement, PlacementRequest};
pub use board::{GameBoard, STANDARD_SIZE};
pub use contracts::{
    Contract, GameNotCompleted, LegalPlacement, LocationIsEmpty, PlacementContract, WithinBoard,
};
pub use error::{InvalidSizeError, PlacementError, PlacementErrorKind};
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, TerminalFinalInvariant,
};
pub use phases::GameStatus;
pub use rules::{Line, check_winner, is_draw, is_full, line_owner, winning_line};
pub use types::{BoardSize, Cell, GamePiece, Grid, Location};
