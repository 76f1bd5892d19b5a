//! An exact solver for 4x4 Othello.
//!
//! The 4x4 game tree is small enough to search exhaustively, so there is no
//! heuristic evaluation anywhere: [`solve`] runs a full-window negamax with
//! alpha-beta pruning down to the final disc count, and records the exact
//! score of every move it fully explores in a [`ScoreTable`]. UIs read the
//! table to annotate or rank moves; [`best_move`] picks the strongest
//! recorded move for an automated player.
//!
//! Moves skipped by a beta cutoff are never recorded, so callers that need
//! complete move rankings should [`solve`] the position they are ranking
//! rather than rely on entries left over from an ancestor search.

pub mod search;

mod table;

pub use table::ScoreTable;

use mini_othello::{Cell, GameState, MAX_SCORE};

/// Solve `state` exactly, recording per-move scores in `table`.
/// Returns the final score differential from the mover's perspective
/// under optimal play by both sides.
pub fn solve(state: GameState, table: &mut ScoreTable) -> i8 {
    let score = search::negamax(-MAX_SCORE, MAX_SCORE, state, table);
    log::debug!(
        "solved {} to move: score {:+}, {} positions tabulated",
        state.to_move,
        score,
        table.num_positions()
    );
    score
}

/// The strongest recorded move for the side to move, or None if no legal
/// move has a recorded score. Ties break toward the lowest cell index.
///
/// Callers should [`solve`] the same state first: moves pruned away during
/// search have no recorded score and are never selected.
pub fn best_move(state: GameState, table: &ScoreTable) -> Option<Cell> {
    table.best_move(state, state.legal_moves())
}
