//! Exhaustive negamax search with alpha-beta pruning.

use crate::table::ScoreTable;
use mini_othello::{GameState, MAX_SCORE};

/// Negamax over the full game tree, scored from the mover's perspective.
///
/// Each explored move's score is recorded in `table` before the cutoff
/// check, so every move visited under the current window has an entry;
/// siblings skipped by a beta cutoff are left unrecorded. The table is
/// write-only here: revisiting a position recomputes it from scratch, and
/// the entries exist purely for callers to rank and annotate moves.
pub fn negamax(mut alpha: i8, beta: i8, state: GameState, table: &mut ScoreTable) -> i8 {
    let moves = state.legal_moves();

    if moves.is_empty() {
        // Neither side can place: the game is over.
        if !state.board.has_moves(!state.to_move) {
            return state.board.terminal_score(state.to_move);
        }

        // Forced pass: the discs stay put, the perspective flips.
        return -negamax(-beta, -alpha, state.pass(), table);
    }

    let mut best = -MAX_SCORE;
    for cell in moves {
        let score = -negamax(-beta, -alpha, state.make_move(cell), table);
        table.insert(state, cell, score);

        if score > best {
            best = score;
        }

        // Fail high: the opponent has a better line elsewhere.
        if best >= beta {
            return best;
        }
        if best > alpha {
            alpha = best;
        }
    }

    best
}
