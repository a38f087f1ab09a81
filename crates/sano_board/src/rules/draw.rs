//! Draw detection.

use super::super::Grid;
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell is occupied.
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| !cell.is_empty())
}

/// A full grid with no complete line.
///
/// A full grid that also has a winning line is a win, never a draw.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
