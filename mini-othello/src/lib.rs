//! `mini-othello` is a complete Othello library for the 4x4 board.
//!
//! The board is small enough that every position can be analyzed exactly,
//! so the library favors simple value types over clever encodings:
//!
//!  - [`Bitboard`] packs one player's discs into a `u16`, one bit per cell.
//!  - [`Board`] implements the capture rules over a pair of color bitboards.
//!  - [`GameState`] is the safe, turn-aware interface meant for UIs and
//!    solvers: it tracks the side to move and rejects illegal placements.
//!
//! All of these are immutable values: making a move returns a new state and
//! leaves the original untouched, so positions can be used directly as map
//! keys.

pub mod test_utils;

mod bitboard;
mod board;
mod cell;
mod game;
mod utils;

pub use bitboard::*;
pub use board::*;
pub use cell::*;
pub use game::*;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 4;

/// The number of cells on the board.
pub const NUM_CELLS: usize = 16;

/// The largest achievable score difference: owning every cell.
pub const MAX_SCORE: i8 = NUM_CELLS as i8;
