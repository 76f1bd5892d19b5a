//! Game-level logic: players, turns, passes, and end detection.
//!
//! [`GameState`] is the interface UIs and solvers should build on. It
//! carries the side to move along with the discs, and offers both a
//! checked [`GameState::try_move`] and an unchecked [`GameState::make_move`].

use crate::board::{Board, MoveList};
use crate::cell::Cell;
use std::fmt::{self, Display, Formatter};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A full game position: the discs plus the side to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    pub board: Board,
    pub to_move: Player,
}

impl Default for GameState {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::START, Player::default())
    }
}

impl GameState {
    pub fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Legal placements for the side to move.
    #[inline]
    pub fn legal_moves(self) -> MoveList {
        self.board.legal_moves(self.to_move)
    }

    /// True once neither side has a legal placement.
    pub fn is_finished(self) -> bool {
        !self.board.has_moves(Player::Black) && !self.board.has_moves(Player::White)
    }

    /// True when the side to move is stuck but the opponent is not.
    pub fn must_pass(self) -> bool {
        !self.board.has_moves(self.to_move) && self.board.has_moves(!self.to_move)
    }

    /// Pass the turn without touching the discs.
    #[inline]
    pub fn pass(self) -> Self {
        Self::new(self.board, !self.to_move)
    }

    /// Place a disc for the side to move.
    /// Panics if the placement is illegal; see [`GameState::try_move`].
    #[inline]
    pub fn make_move(self, cell: Cell) -> Self {
        Self::new(self.board.apply_move(self.to_move, cell), !self.to_move)
    }

    /// Place a disc for the side to move, rejecting placements that
    /// capture nothing.
    pub fn try_move(self, cell: Cell) -> Result<Self, IllegalMoveError> {
        if self.board.captures(self.to_move, cell).is_empty() {
            return Err(IllegalMoveError { cell });
        }
        Ok(self.make_move(cell))
    }

    /// The player holding more discs, or None on equality.
    /// Only meaningful as a result once the game is finished.
    pub fn winner(self) -> Option<Player> {
        let black = self.board.pieces(Player::Black).count_occupied();
        let white = self.board.pieces(Player::White).count_occupied();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.to_move)
    }
}

/// A placement that violates the capture rule: the target cell is occupied
/// or the move would flip nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub cell: Cell,
}

impl Display for IllegalMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move at {}: captures nothing", self.cell)
    }
}

impl std::error::Error for IllegalMoveError {}
