//! Core board dynamics: capture geometry, legal moves, and scoring.
//!
//! [`Board`] is a pure value: applying a move builds a new board and never
//! mutates the receiver, so boards can key caches directly. The capture
//! scan walks rays cell-by-cell rather than using vectorized shifts; on a
//! 16-cell grid the ray walk is already instantaneous and much easier to
//! audit against the rules.

use crate::bitboard::Bitboard;
use crate::cell::{Cell, Direction};
use crate::game::Player;
use crate::utils;
use derive_more::{From, Into};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Both players' discs, one disjoint bitmask per color.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// The set of legal placements for one player.
/// Iterating yields cells in ascending index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Bitboard);

impl Board {
    /// The standard starting position: the four center cells, with Black
    /// on the B3/C2 diagonal.
    pub const START: Self = Self {
        black: Bitboard::new((1 << 6) | (1 << 9)),
        white: Bitboard::new((1 << 5) | (1 << 10)),
    };

    /// Build a board from two color masks.
    /// Panics if the masks overlap: no cell can hold two discs.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Self {
        assert!(
            (black & white).is_empty(),
            "color bitboards overlap: {:?} / {:?}",
            black,
            white
        );
        Self { black, white }
    }

    /// The discs belonging to `player`.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// A mask of every occupied cell.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.black | self.white
    }

    /// Whether `cell` holds a disc of `player`'s color.
    #[inline]
    pub fn is_color(self, player: Player, cell: Cell) -> bool {
        self.pieces(player).contains(cell)
    }

    /// The exact set of discs that flip if `player` places at `cell`.
    ///
    /// Empty when the placement is illegal: the cell is occupied, or no
    /// direction holds a run of opposing discs bracketed by one of the
    /// mover's own. Runs that end at the board edge or an empty cell
    /// contribute nothing; captures are all-or-nothing per direction.
    pub fn captures(self, player: Player, cell: Cell) -> Bitboard {
        if self.occupied().contains(cell) {
            return Bitboard::EMPTY;
        }

        let mut flipped = Bitboard::EMPTY;
        for dir in Direction::ALL {
            let mut run = Bitboard::EMPTY;
            let mut probe = cell.neighbor(dir);

            while let Some(next) = probe {
                if !self.is_color(!player, next) {
                    break;
                }
                run |= next.bit();
                probe = next.neighbor(dir);
            }

            // The run only counts if it ends on one of the mover's discs.
            if let Some(bracket) = probe {
                if self.is_color(player, bracket) {
                    flipped |= run;
                }
            }
        }
        flipped
    }

    /// Legal placements for `player`: every cell whose placement flips at
    /// least one opposing disc.
    pub fn legal_moves(self, player: Player) -> MoveList {
        let mut moves = Bitboard::EMPTY;
        for cell in Cell::all() {
            if !self.captures(player, cell).is_empty() {
                moves |= cell.bit();
            }
        }
        MoveList(moves)
    }

    /// Whether `player` has at least one legal placement.
    #[inline]
    pub fn has_moves(self, player: Player) -> bool {
        !self.legal_moves(player).is_empty()
    }

    /// Apply a placement for `player`, returning the new board.
    /// The receiver is unchanged. Panics if the placement captures nothing.
    pub fn apply_move(self, player: Player, cell: Cell) -> Self {
        let flipped = self.captures(player, cell);
        assert!(!flipped.is_empty(), "illegal placement at {}", cell);

        // Flipped discs change owner; the placed disc joins the mover.
        let black = self.black ^ flipped;
        let white = self.white ^ flipped;
        match player {
            Player::Black => Self {
                black: black | cell.bit(),
                white,
            },
            Player::White => Self {
                black,
                white: white | cell.bit(),
            },
        }
    }

    /// Final score from `player`'s perspective, for boards where neither
    /// side can move: disc difference, with every empty cell awarded to
    /// whichever color holds strictly more discs. A tie scores zero.
    pub fn terminal_score(self, player: Player) -> i8 {
        let mine = self.pieces(player).count_occupied() as i8;
        let theirs = self.pieces(!player).count_occupied() as i8;
        let empties = self.occupied().count_empty() as i8;

        match mine.cmp(&theirs) {
            Ordering::Greater => (mine + empties) - theirs,
            Ordering::Less => mine - (theirs + empties),
            Ordering::Equal => 0,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = *self;
        utils::format_grid(
            Cell::all().map(|cell| {
                if board.black.contains(cell) {
                    '#'
                } else if board.white.contains(cell) {
                    'O'
                } else {
                    '.'
                }
            }),
            f,
        )
    }
}

impl MoveList {
    /// Returns whether the move list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The number of moves in the list.
    #[inline]
    pub fn num_moves(self) -> usize {
        self.0.count_occupied() as usize
    }

    /// Returns whether `cell` is a listed move.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        self.0.contains(cell)
    }
}

impl Iterator for MoveList {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }

        let bits: u16 = self.0.into();
        let cell = Cell::from_index(bits.trailing_zeros() as u8);
        self.0 ^= cell.bit();
        Some(cell)
    }
}

impl ExactSizeIterator for MoveList {
    fn len(&self) -> usize {
        self.num_moves()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: u8) -> Cell {
        Cell::from_index(index)
    }

    #[test]
    fn start_position_layout() {
        assert!(Board::START.black.contains(cell(6)));
        assert!(Board::START.black.contains(cell(9)));
        assert!(Board::START.white.contains(cell(5)));
        assert!(Board::START.white.contains(cell(10)));
        assert_eq!(Board::START.occupied().count_occupied(), 4);
    }

    #[test]
    #[should_panic]
    fn overlapping_bitboards_rejected() {
        Board::from_bitboards(Bitboard::new(0b0011), Bitboard::new(0b0110));
    }

    #[test]
    fn single_bracketed_disc_flips() {
        // Black A1, White B1; Black placing at C1 captures exactly B1.
        let board = Board::from_bitboards(Bitboard::new(1 << 0), Bitboard::new(1 << 1));
        assert_eq!(board.captures(Player::Black, cell(2)), cell(1).bit());
    }

    #[test]
    fn unbracketed_run_flips_nothing() {
        // White B1..C1 with no Black disc beyond in either direction:
        // the run ends at the edge (from D1) or an empty cell (from A1).
        let board = Board::from_bitboards(
            Bitboard::new(1 << 9),
            Bitboard::new((1 << 1) | (1 << 2)),
        );
        assert_eq!(board.captures(Player::Black, cell(3)), Bitboard::EMPTY);
        assert_eq!(board.captures(Player::Black, cell(0)), Bitboard::EMPTY);
    }

    #[test]
    fn occupied_cell_is_illegal() {
        assert_eq!(
            Board::START.captures(Player::Black, cell(5)),
            Bitboard::EMPTY
        );
        assert_eq!(
            Board::START.captures(Player::Black, cell(6)),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn start_position_legal_moves() {
        let moves: Vec<Cell> = Board::START.legal_moves(Player::Black).collect();
        assert_eq!(moves, vec![cell(1), cell(4), cell(11), cell(14)]);

        // Each opening move flips exactly one White disc.
        for mv in Board::START.legal_moves(Player::Black) {
            let flipped = Board::START.captures(Player::Black, mv);
            assert_eq!(flipped.count_occupied(), 1);
            assert!(!(flipped & Board::START.white).is_empty());
        }
    }

    #[test]
    fn move_list_iterates_ascending() {
        let moves = Board::START.legal_moves(Player::Black);
        assert_eq!(moves.num_moves(), 4);
        assert!(moves.contains(cell(4)));
        assert!(!moves.contains(cell(0)));

        let indices: Vec<u8> = moves.map(Cell::to_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn move_list_display() {
        assert_eq!(
            Board::START.legal_moves(Player::Black).to_string(),
            "[B1, A2, D3, C4]"
        );
    }

    #[test]
    fn apply_move_flips_and_places() {
        let next = Board::START.apply_move(Player::Black, cell(4));

        // B2 changed owner, A2 was placed; White keeps C3 only.
        assert_eq!(
            next.pieces(Player::Black),
            Bitboard::new((1 << 4) | (1 << 5) | (1 << 6) | (1 << 9))
        );
        assert_eq!(next.pieces(Player::White), Bitboard::new(1 << 10));

        // The original board is untouched.
        assert_eq!(Board::START.pieces(Player::White).count_occupied(), 2);
    }

    #[test]
    fn apply_move_preserves_disjointness_and_grows_by_one() {
        for mv in Board::START.legal_moves(Player::Black) {
            let next = Board::START.apply_move(Player::Black, mv);
            let black = next.pieces(Player::Black);
            let white = next.pieces(Player::White);

            assert!((black & white).is_empty());
            assert_eq!(
                next.occupied().count_occupied(),
                Board::START.occupied().count_occupied() + 1
            );
        }
    }

    #[test]
    #[should_panic]
    fn apply_illegal_move_panics() {
        Board::START.apply_move(Player::Black, cell(0));
    }

    #[test]
    fn terminal_score_majority_takes_empties() {
        // 10 Black discs, 4 White, 2 empty corners; no legal moves remain.
        let board = Board::from_bitboards(Bitboard::new(0x799E), Bitboard::new(0x0660));
        assert!(!board.has_moves(Player::Black));
        assert!(!board.has_moves(Player::White));

        assert_eq!(board.terminal_score(Player::Black), 8);
        assert_eq!(board.terminal_score(Player::White), -8);
    }

    #[test]
    fn terminal_score_tie_ignores_empties() {
        // One disc each, far apart: 1 - 1 with 14 empties scores zero.
        let board = Board::from_bitboards(Bitboard::new(1 << 0), Bitboard::new(1 << 15));
        assert_eq!(board.terminal_score(Player::Black), 0);
        assert_eq!(board.terminal_score(Player::White), 0);
    }

    #[test]
    fn board_display() {
        let rendered = Board::START.to_string();
        assert!(rendered.contains("A B C D"));
        assert!(rendered.contains('#'));
        assert!(rendered.contains('O'));
    }
}
