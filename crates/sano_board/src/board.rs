//! The game board aggregate.

use super::action::{Placement, PlacementRequest};
use super::contracts::LegalPlacement;
use super::error::{InvalidSizeError, PlacementError};
use super::phases::GameStatus;
use super::rules::{self, Line};
use super::{BoardSize, Cell, GamePiece, Grid, Location};
use serde::Serialize;
use tracing::{debug, instrument};

/// Side length of the classic board.
pub const STANDARD_SIZE: usize = 3;

/// An N×N board where two pieces take turns filling cells.
///
/// The board is mutated only through [`GameBoard::place_next_piece`].
/// Whose turn it is and whether the game is over are derived from the
/// placement history and the grid, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameBoard {
    pub(crate) grid: Grid,
    first_piece: GamePiece,
    pub(crate) history: Vec<Placement>,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl GameBoard {
    /// Creates an empty `size × size` board where `first_piece` moves first.
    #[instrument]
    pub fn new(size: BoardSize, first_piece: GamePiece) -> Self {
        Self {
            grid: Grid::new(size),
            first_piece,
            history: Vec::new(),
        }
    }

    /// Creates an empty board from an unchecked size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] when `size` is zero or above
    /// [`BoardSize::MAX`].
    #[instrument]
    pub fn try_new(size: usize, first_piece: GamePiece) -> Result<Self, InvalidSizeError> {
        BoardSize::new(size).map(|size| Self::new(size, first_piece))
    }

    /// Creates the classic 3×3 board.
    pub fn standard(first_piece: GamePiece) -> Self {
        Self::new(BoardSize::STANDARD, first_piece)
    }

    /// Builds a board by placing pieces at `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first placement error encountered.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(
        size: BoardSize,
        first_piece: GamePiece,
        moves: &[(isize, isize)],
    ) -> Result<Self, PlacementError> {
        let mut board = Self::new(size, first_piece);
        for &(row, column) in moves {
            board.place_next_piece(row, column)?;
        }
        Ok(board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Mutation
// ─────────────────────────────────────────────────────────────

impl GameBoard {
    /// Places the piece whose turn it is at (`row`, `column`).
    ///
    /// Checks run in order and the first failure wins: a completed game
    /// rejects everything, then bounds, then occupancy.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::Completed`] if the game already has a winner or
    ///   ended in a draw.
    /// - [`PlacementError::OutOfBoard`] if either coordinate is outside
    ///   `[0, size)`.
    /// - [`PlacementError::NotEmptyLocation`] if the cell is occupied.
    ///
    /// On error the board is left exactly as it was.
    #[instrument(skip(self), fields(size = self.size(), piece = %self.next_placing_piece()))]
    pub fn place_next_piece(&mut self, row: isize, column: isize) -> Result<(), PlacementError> {
        let request = PlacementRequest::new(row, column);
        let location = LegalPlacement::check(&request, self)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let piece = self.next_placing_piece();
        self.grid.set(location, Cell::Occupied(piece));
        self.history.push(Placement::new(piece, location));

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, PlacementContract};
            if let Err(violation) = PlacementContract::post(&before, self) {
                tracing::warn!(error = %violation, "Rolling back placement");
                *self = before;
                return Err(violation);
            }
        }

        debug!(%location, status = %self.status(), "Piece placed");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameBoard {
    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The piece that moves first.
    pub fn first_piece(&self) -> GamePiece {
        self.first_piece
    }

    /// The piece of the most recent successful placement.
    pub fn last_placed_piece(&self) -> Option<GamePiece> {
        self.history.last().map(Placement::piece)
    }

    /// The piece whose turn it is.
    ///
    /// `first_piece` after an even number of placements, its opponent after
    /// an odd number.
    pub fn next_placing_piece(&self) -> GamePiece {
        if self.placed_count() % 2 == 0 {
            self.first_piece
        } else {
            self.first_piece.opponent()
        }
    }

    /// Returns the piece at (`row`, `column`).
    ///
    /// Out-of-range coordinates are not an error here: they simply hold no
    /// piece.
    pub fn piece(&self, row: isize, column: isize) -> Option<GamePiece> {
        self.grid
            .locate(row, column)
            .and_then(|location| self.grid.get(location).piece())
    }

    /// True when some row, column or main diagonal is filled by one piece.
    pub fn has_winning_piece(&self) -> bool {
        self.winning_piece().is_some()
    }

    /// The piece owning a complete line, if any.
    pub fn winning_piece(&self) -> Option<GamePiece> {
        rules::check_winner(&self.grid)
    }

    /// The first complete line found and its owner.
    pub fn winning_line(&self) -> Option<(Line, GamePiece)> {
        rules::winning_line(&self.grid)
    }

    /// True when every cell is filled and no line is complete.
    pub fn is_draw_ending(&self) -> bool {
        rules::is_draw(&self.grid)
    }

    /// True when every cell is filled.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.grid)
    }

    /// True once the game is won or drawn.
    pub fn is_completed(&self) -> bool {
        self.has_winning_piece() || self.is_draw_ending()
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        match self.winning_piece() {
            Some(piece) => GameStatus::Won(piece),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Number of pieces on the board.
    pub fn placed_count(&self) -> usize {
        self.history.len()
    }

    /// Successful placements, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Locations that still accept a piece, row-major.
    ///
    /// Empty once the game is completed, even if cells remain free.
    pub fn empty_locations(&self) -> Vec<Location> {
        if self.is_completed() {
            return Vec::new();
        }
        self.grid.empty_locations()
    }
}

impl std::fmt::Display for GameBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.grid.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|cell| cell.piece().map_or('·', GamePiece::glyph).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GameBoard {
        GameBoard::standard(GamePiece::Solid)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert_eq!(board.size(), 3);
        assert_eq!(board.first_piece(), GamePiece::Solid);
        assert_eq!(board.last_placed_piece(), None);
        assert_eq!(board.next_placing_piece(), GamePiece::Solid);
        assert_eq!(board.status(), GameStatus::InProgress);
        assert_eq!(board.empty_locations().len(), 9);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(GameBoard::try_new(0, GamePiece::Donut), Err(InvalidSizeError::Zero));
        let board = GameBoard::try_new(5, GamePiece::Donut).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.next_placing_piece(), GamePiece::Donut);
    }

    #[test]
    fn test_try_new_rejects_side_whose_square_overflows() {
        let result = GameBoard::try_new(1usize << 32, GamePiece::Solid);
        assert!(matches!(result, Err(InvalidSizeError::TooLarge { .. })));
    }

    #[test]
    fn test_largest_board_starts_empty() {
        let board = GameBoard::try_new(BoardSize::MAX, GamePiece::Solid).unwrap();
        assert_eq!(board.grid().cells().len(), BoardSize::MAX * BoardSize::MAX);
        assert!(!board.is_completed());
        assert_eq!(board.piece(0, 0), None);
    }

    #[test]
    fn test_placement_records_history() {
        let mut board = board();
        board.place_next_piece(0, 0).unwrap();
        board.place_next_piece(2, 1).unwrap();
        assert_eq!(
            board.history(),
            &[
                Placement::new(GamePiece::Solid, Location::new(0, 0)),
                Placement::new(GamePiece::Donut, Location::new(2, 1)),
            ]
        );
        assert_eq!(board.placed_count(), 2);
    }

    #[test]
    fn test_rejected_placement_leaves_board_unchanged() {
        let mut board = board();
        board.place_next_piece(1, 1).unwrap();
        let snapshot = board.clone();

        assert!(board.place_next_piece(1, 1).is_err());
        assert!(board.place_next_piece(-1, 0).is_err());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_status_reports_winner() {
        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
        let board = GameBoard::replay(BoardSize::STANDARD, GamePiece::Donut, &moves).unwrap();
        assert_eq!(board.status(), GameStatus::Won(GamePiece::Donut));
        assert_eq!(board.winning_line(), Some((Line::Row(0), GamePiece::Donut)));
        assert!(board.empty_locations().is_empty());
    }

    #[test]
    fn test_display_uses_glyphs() {
        let mut board = board();
        board.place_next_piece(0, 0).unwrap();
        board.place_next_piece(1, 1).unwrap();
        assert_eq!(board.to_string(), "● · ·\n· ○ ·\n· · ·");
    }

    #[test]
    fn test_serializes_grid_and_history() {
        let mut board = board();
        board.place_next_piece(0, 2).unwrap();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["first_piece"], "solid");
        assert_eq!(json["grid"]["size"], 3);
        assert_eq!(json["history"][0]["location"]["column"], 2);
    }
}
