//! Win detection for N×N boards.

use super::super::{Cell, GamePiece, Grid, Location};
use tracing::instrument;

/// A full line of `size` cells that wins when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Line {
    /// Row `i`, left to right.
    #[display("row {_0}")]
    Row(usize),
    /// Column `i`, top to bottom.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Every line of a `size × size` grid: rows, then columns, then the
    /// two diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Locations covered by this line on a `size × size` grid.
    pub fn locations(self, size: usize) -> impl Iterator<Item = Location> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Location::new(row, i),
            Line::Column(column) => Location::new(i, column),
            Line::Diagonal => Location::new(i, i),
            Line::AntiDiagonal => Location::new(i, size - 1 - i),
        })
    }
}

/// Returns the piece filling every cell of `line`, if one does.
pub fn line_owner(grid: &Grid, line: Line) -> Option<GamePiece> {
    let mut cells = line.locations(grid.size()).map(|location| grid.get(location));
    let owner = cells.next()?.piece()?;
    cells.all(|cell| cell == Cell::Occupied(owner)).then_some(owner)
}

/// Finds the first complete line and its owner.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn winning_line(grid: &Grid) -> Option<(Line, GamePiece)> {
    Line::all(grid.size()).find_map(|line| line_owner(grid, line).map(|piece| (line, piece)))
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(piece)` when a piece occupies a whole row, column or main
/// diagonal, `None` otherwise.
pub fn check_winner(grid: &Grid) -> Option<GamePiece> {
    winning_line(grid).map(|(_, piece)| piece)
}
