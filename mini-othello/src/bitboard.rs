//! Low-level bitmask operations over the 4x4 board.
//!
//! A [`Bitboard`] holds one bit per cell in row-major order: bit 0 is the
//! upper-left corner, bit 15 the lower-right. Wrapping a `u16` keeps the
//! bit-twiddling cheap while avoiding accidental mixing with numerics, and
//! makes equality and hashing trivial for use as a map key.

use crate::cell::Cell;
use crate::utils;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per cell on the 4x4 board.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u16);

impl Bitboard {
    /// The bitboard with no cells set.
    pub const EMPTY: Self = Self(0);

    /// Construct from raw bits; bit `i` is cell `i` in row-major order.
    #[inline]
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Count the number of occupied cells in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty cells in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if `cell` is set.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        !(self & cell.bit()).is_empty()
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let board = *self;
        utils::format_grid(
            Cell::all().map(|cell| if board.contains(cell) { '#' } else { '.' }),
            f,
        )
    }
}
