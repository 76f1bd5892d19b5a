//! Cells and directions on the 4x4 grid.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_CELLS};
use std::fmt::{self, Display, Formatter, Write};

/// A single cell on the board, stored as a row-major index in `0..16`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cell(u8);

/// One of the eight king-move directions on the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Cell {
    /// Convert from a row-major cell index.
    /// Panics if `index` is not a valid cell.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_CELLS);
        Self(index)
    }

    /// Convert into a row-major cell index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// The one-hot bitboard selecting this cell.
    #[inline]
    pub fn bit(self) -> Bitboard {
        Bitboard::new(1 << self.0)
    }

    /// Convert from row and column coordinates.
    /// Returns None if the coordinates fall outside the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self((row * EDGE_LENGTH + col) as u8))
        } else {
            None
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.0 as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// The adjacent cell one step along `dir`, or None past the board edge.
    pub fn neighbor(self, dir: Direction) -> Option<Self> {
        let (row, col) = self.to_coords();
        let (d_row, d_col) = dir.offset();
        let row = row as isize + d_row as isize;
        let col = col as isize + d_col as isize;

        if (0..EDGE_LENGTH as isize).contains(&row) && (0..EDGE_LENGTH as isize).contains(&col) {
            Some(Self((row * EDGE_LENGTH as isize + col) as u8))
        } else {
            None
        }
    }

    /// All cells in ascending index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_CELLS as u8).map(Cell)
    }
}

impl Direction {
    /// Every direction, in the order used for capture scans.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, col) step this direction takes.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Convert this [`Cell`] into string notation ("A1").
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "1234".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCD".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCellError;

impl Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell string")
    }
}

impl std::error::Error for ParseCellError {}

/// Build a [`Cell`] from 1-indexed string notation ("A1" through "D4").
impl std::str::FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseCellError)?.to_ascii_uppercase();
        let col = "ABCD".find(col_str).ok_or(ParseCellError)?;
        let row = chars
            .next()
            .ok_or(ParseCellError)?
            .to_digit(10)
            .ok_or(ParseCellError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseCellError);
        }

        Cell::from_coords(row - 1, col).ok_or(ParseCellError)
    }
}
