//! Alternating turn invariant: pieces alternate starting from the first piece.

use super::super::GameBoard;
use super::Invariant;

/// Invariant: pieces alternate turns.
///
/// The history must read `first, other, first, ...`, and the next piece to
/// place must be the opponent of the last placed one.
pub struct AlternatingTurnInvariant;

impl Invariant<GameBoard> for AlternatingTurnInvariant {
    fn holds(board: &GameBoard) -> bool {
        let history = board.history();

        let Some(first) = history.first() else {
            return board.next_placing_piece() == board.first_piece();
        };

        if first.piece != board.first_piece() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].piece == pair[1].piece) {
            return false;
        }

        board
            .last_placed_piece()
            .is_some_and(|last| board.next_placing_piece() == last.opponent())
    }

    fn description() -> &'static str {
        "Pieces alternate turns starting from the first piece"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePiece, Location, Placement};

    #[test]
    fn test_empty_board_holds() {
        let board = GameBoard::standard(GamePiece::Donut);
        assert!(AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut board = GameBoard::standard(GamePiece::Donut);
        for (row, column) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)] {
            board.place_next_piece(row, column).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.next_placing_piece(), GamePiece::Solid);
    }

    #[test]
    fn test_same_piece_twice_violates() {
        let mut board = GameBoard::standard(GamePiece::Solid);
        board.place_next_piece(0, 0).unwrap();

        board
            .history
            .push(Placement::new(GamePiece::Solid, Location::new(0, 1)));
        assert!(!AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_wrong_opening_piece_violates() {
        let mut board = GameBoard::standard(GamePiece::Solid);
        board
            .history
            .push(Placement::new(GamePiece::Donut, Location::new(0, 0)));
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
