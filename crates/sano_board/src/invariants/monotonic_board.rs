//! Monotonic board invariant: cells never change once set.

use super::super::{Cell, GameBoard, Grid};
use super::Invariant;

/// Invariant: cells are monotonic (never overwritten or cleared).
///
/// Replaying the history onto an empty grid must only ever fill empty
/// cells, and must reproduce the current grid exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameBoard> for MonotonicBoardInvariant {
    fn holds(board: &GameBoard) -> bool {
        let mut reconstructed = Grid::new(board.grid().board_size());

        for placement in board.history() {
            if !reconstructed.is_empty(placement.location) {
                return false;
            }
            reconstructed.set(placement.location, Cell::Occupied(placement.piece));
        }

        reconstructed == *board.grid()
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePiece, Location, Placement};

    #[test]
    fn test_empty_board_holds() {
        let board = GameBoard::standard(GamePiece::Solid);
        assert!(MonotonicBoardInvariant::holds(&board));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut board = GameBoard::standard(GamePiece::Solid);
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            board.place_next_piece(row, column).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&board));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut board = GameBoard::standard(GamePiece::Solid);
        board.place_next_piece(1, 1).unwrap();

        board.grid.set(Location::new(1, 1), Cell::Occupied(GamePiece::Donut));
        assert!(!MonotonicBoardInvariant::holds(&board));
    }

    #[test]
    fn test_history_placing_twice_on_one_cell_violates() {
        let mut board = GameBoard::standard(GamePiece::Solid);
        board.place_next_piece(1, 1).unwrap();

        board
            .history
            .push(Placement::new(GamePiece::Donut, Location::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&board));
    }
}
