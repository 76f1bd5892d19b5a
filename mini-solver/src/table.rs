//! Per-move score bookkeeping for searched positions.

use mini_othello::{Cell, GameState, MoveList, NUM_CELLS};
use std::collections::HashMap;

/// Recorded move scores, keyed by the exact position they were computed
/// for (discs plus side to move).
///
/// Entries are written lazily as the search explores moves and are never
/// evicted; because positions are immutable values and key themselves, an
/// entry can never go stale. The table does not accelerate the search —
/// it only exists so callers can rank and display per-move scores after
/// solving a position.
#[derive(Debug, Default)]
pub struct ScoreTable {
    entries: HashMap<GameState, CellScores>,
}

/// Scores for each placement cell of a single position.
#[derive(Clone, Copy, Debug, Default)]
struct CellScores([Option<i8>; NUM_CELLS]);

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of positions with at least one recorded move.
    pub fn num_positions(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded score for the mover placing at `cell`, if the search
    /// explored that move.
    pub fn get(&self, state: GameState, cell: Cell) -> Option<i8> {
        self.entries
            .get(&state)
            .and_then(|scores| scores.0[cell.to_index() as usize])
    }

    pub(crate) fn insert(&mut self, state: GameState, cell: Cell, score: i8) {
        self.entries.entry(state).or_default().0[cell.to_index() as usize] = Some(score);
    }

    /// The highest-scoring recorded move among `moves`, scanning in
    /// ascending cell order with a strict comparison so the first maximal
    /// cell wins ties. Moves without a recorded score are skipped.
    pub fn best_move(&self, state: GameState, moves: MoveList) -> Option<Cell> {
        let mut best: Option<(Cell, i8)> = None;

        for cell in moves {
            if let Some(score) = self.get(state, cell) {
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((cell, score)),
                }
            }
        }

        best.map(|(cell, _)| cell)
    }
}
