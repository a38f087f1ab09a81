//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(board, request)} place {Q(before, after)}.

use super::action::PlacementRequest;
use super::error::PlacementError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::{GameBoard, Location};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlacementError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PlacementError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameNotCompleted;

impl GameNotCompleted {
    /// Fails with [`PlacementError::Completed`] on a terminal board.
    #[instrument(skip(board))]
    pub fn check(board: &GameBoard) -> Result<(), PlacementError> {
        if board.is_completed() {
            Err(PlacementError::Completed)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates lie in `[0, size)`.
pub struct WithinBoard;

impl WithinBoard {
    /// Resolves the request to a location on this board.
    #[instrument(skip(board))]
    pub fn check(request: &PlacementRequest, board: &GameBoard) -> Result<Location, PlacementError> {
        board
            .grid()
            .locate(request.row, request.column)
            .ok_or(PlacementError::OutOfBoard {
                row: request.row,
                column: request.column,
                size: board.size(),
            })
    }
}

/// Precondition: the target cell is empty.
pub struct LocationIsEmpty;

impl LocationIsEmpty {
    /// Fails with [`PlacementError::NotEmptyLocation`] on an occupied cell.
    #[instrument(skip(board))]
    pub fn check(location: Location, board: &GameBoard) -> Result<(), PlacementError> {
        if board.grid().is_empty(location) {
            Ok(())
        } else {
            Err(PlacementError::NotEmptyLocation(location))
        }
    }
}

/// Composite precondition, checked in order: not completed, within the
/// board, on an empty cell.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates a request and returns the location it targets.
    #[instrument(skip(board))]
    pub fn check(request: &PlacementRequest, board: &GameBoard) -> Result<Location, PlacementError> {
        GameNotCompleted::check(board)?;
        let location = WithinBoard::check(request, board)?;
        LocationIsEmpty::check(location, board)?;
        Ok(location)
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Postconditions:
/// - exactly one more piece is on the board
/// - every previously occupied cell is unchanged
/// - all [`BoardInvariants`] hold
pub struct PlacementContract;

impl Contract<GameBoard, PlacementRequest> for PlacementContract {
    fn pre(board: &GameBoard, request: &PlacementRequest) -> Result<(), PlacementError> {
        LegalPlacement::check(request, board).map(|_| ())
    }

    fn post(before: &GameBoard, after: &GameBoard) -> Result<(), PlacementError> {
        if after.placed_count() != before.placed_count() + 1 {
            warn!(
                before = before.placed_count(),
                after = after.placed_count(),
                "Placement count did not advance by one"
            );
            return Err(PlacementError::InvariantViolation(
                "Postcondition failed: exactly one piece is added per placement".to_string(),
            ));
        }

        let kept = before
            .grid()
            .cells()
            .iter()
            .zip(after.grid().cells())
            .all(|(old, new)| old.is_empty() || old == new);
        if !kept {
            warn!("Occupied cell changed during placement");
            return Err(PlacementError::InvariantViolation(
                "Postcondition failed: occupied cells never change".to_string(),
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlacementError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
