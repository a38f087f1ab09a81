//! Core domain types for the placement game.

use super::{InvalidSizeError, STANDARD_SIZE};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GamePiece {
    /// The filled mark (●).
    Solid,
    /// The hollow mark (○).
    Donut,
}

impl GamePiece {
    /// Returns the other piece.
    pub fn opponent(self) -> Self {
        match self {
            GamePiece::Solid => GamePiece::Donut,
            GamePiece::Donut => GamePiece::Solid,
        }
    }

    /// Glyph used when printing a board.
    pub fn glyph(self) -> char {
        match self {
            GamePiece::Solid => '●',
            GamePiece::Donut => '○',
        }
    }
}

/// A single board position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a piece for the rest of the game.
    Occupied(GamePiece),
}

impl Cell {
    /// Returns the occupying piece, if any.
    pub fn piece(self) -> Option<GamePiece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Checks if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An in-bounds (row, column) pair.
///
/// Values of this type are only produced by [`Grid::locate`] or by line
/// iteration over a known size, so they are always inside the grid that
/// produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Location {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Side length of a board, in `1..=BoardSize::MAX`.
///
/// The bound keeps `size × size` representable, so a [`Grid`] always holds
/// exactly that many cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct BoardSize(NonZeroUsize);

impl BoardSize {
    /// Largest accepted side length.
    pub const MAX: usize = 4096;

    /// The classic 3×3 board.
    pub const STANDARD: Self = Self(NonZeroUsize::new(STANDARD_SIZE).unwrap());

    /// Validates a side length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError::Zero`] for 0 and
    /// [`InvalidSizeError::TooLarge`] above [`BoardSize::MAX`].
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        let size = NonZeroUsize::new(size).ok_or(InvalidSizeError::Zero)?;
        if size.get() > Self::MAX {
            return Err(InvalidSizeError::TooLarge {
                size: size.get(),
                max: Self::MAX,
            });
        }
        Ok(Self(size))
    }

    /// Side length as a plain integer.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of cells on a board of this size.
    pub const fn cell_count(self) -> usize {
        self.get() * self.get()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Square storage for an N×N board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid of `size × size` cells.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Side length as a validated [`BoardSize`].
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Resolves signed coordinates to a location, or `None` when either
    /// coordinate falls outside `[0, size)`.
    pub fn locate(&self, row: isize, column: isize) -> Option<Location> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.size())?;
        let column = usize::try_from(column).ok().filter(|c| *c < self.size())?;
        Some(Location::new(row, column))
    }

    fn index(&self, location: Location) -> Option<usize> {
        (location.row < self.size() && location.column < self.size())
            .then(|| location.row * self.size() + location.column)
    }

    /// Gets the cell at a location. Locations outside the grid read as empty.
    pub fn get(&self, location: Location) -> Cell {
        self.index(location)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Writes a cell. Locations outside the grid are ignored.
    pub(crate) fn set(&mut self, location: Location, cell: Cell) {
        if let Some(slot) = self.index(location).and_then(|i| self.cells.get_mut(i)) {
            *slot = cell;
        }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, location: Location) -> bool {
        self.get(location).is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Every empty location, row-major.
    pub fn empty_locations(&self) -> Vec<Location> {
        (0..self.size())
            .flat_map(|row| (0..self.size()).map(move |column| Location::new(row, column)))
            .filter(|location| self.is_empty(*location))
            .collect()
    }
}
