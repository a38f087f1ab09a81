//! Terminal finality invariant: nothing is placed after a win or draw.

use super::super::{Cell, GameBoard, rules};
use super::Invariant;

/// Invariant: once a line is complete or the grid is full, the history ends.
///
/// Only the last placement in the history may complete the game. Lines and
/// fullness only ever grow as pieces are added, so it is enough to check
/// the position just before the last placement.
pub struct TerminalFinalInvariant;

impl Invariant<GameBoard> for TerminalFinalInvariant {
    fn holds(board: &GameBoard) -> bool {
        let Some(last) = board.history().last() else {
            return true;
        };

        let mut previous = board.grid().clone();
        previous.set(last.location, Cell::Empty);

        let completed = rules::check_winner(&previous).is_some() || rules::is_full(&previous);
        if completed {
            tracing::debug!(
                placed = board.placed_count(),
                "Placement recorded after game completed"
            );
        }
        !completed
    }

    fn description() -> &'static str {
        "No placement follows a win or draw"
    }
}
