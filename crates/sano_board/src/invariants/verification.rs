//! Kani proof harnesses for placement and the board invariants.
//!
//! Bounded to a 3×3 board and short move sequences.

#[cfg(kani)]
mod proofs {
    use crate::{BoardInvariants, GameBoard, GamePiece, InvariantSet, PlacementError};

    /// Any placement either succeeds keeping every invariant, or fails
    /// without touching the board.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_placement_is_atomic() {
        let first: GamePiece = kani::any();
        let mut board = GameBoard::standard(first);

        for _ in 0..3 {
            let row: i8 = kani::any();
            let column: i8 = kani::any();
            kani::assume((-1..=3).contains(&row) && (-1..=3).contains(&column));

            let before = board.clone();
            match board.place_next_piece(row as isize, column as isize) {
                Ok(()) => {
                    assert_eq!(board.placed_count(), before.placed_count() + 1);
                    assert!(BoardInvariants::check_all(&board).is_ok());
                }
                Err(err) => {
                    assert!(!matches!(err, PlacementError::InvariantViolation(_)));
                    assert_eq!(board, before);
                }
            }
        }
    }

    /// Out-of-range queries read as empty.
    #[kani::proof]
    fn verify_out_of_range_piece_is_none() {
        let board = GameBoard::standard(kani::any());
        let row: isize = kani::any();
        let column: isize = kani::any();
        kani::assume(!(0..3).contains(&row) || !(0..3).contains(&column));
        assert!(board.piece(row, column).is_none());
    }
}
