//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move generation against hand-checked positions.

use crate::game::GameState;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(GameState::default(), depth, false)
}

fn leaves_below(state: GameState, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = state.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(state.pass(), depth - 1, true);
    }

    all_moves
        .map(|mv| leaves_below(state.make_move(mv), depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 44);
}
