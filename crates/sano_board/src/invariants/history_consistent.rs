//! History consistency invariant: history length matches occupied cells.

use super::super::GameBoard;
use super::Invariant;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameBoard> for HistoryConsistentInvariant {
    fn holds(board: &GameBoard) -> bool {
        board.history().len() == board.grid().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
