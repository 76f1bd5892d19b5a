//! Full-game consistency: optimal self-play must land on the solved score.

use mini_othello::{GameState, Player};
use mini_solver::{best_move, solve, ScoreTable};

#[test]
fn self_play_reaches_the_solved_score() {
    let mut table = ScoreTable::new();
    let mut state = GameState::default();
    let predicted = solve(state, &mut table);

    // Re-solve at every decision point: beta cutoffs can leave gaps in
    // the table, but a fresh full-window search always records the
    // mover's best line before it is needed.
    while !state.is_finished() {
        if state.must_pass() {
            state = state.pass();
            continue;
        }

        solve(state, &mut table);
        let choice = best_move(state, &table).expect("solved position has a recorded move");
        state = state.make_move(choice);
    }

    // Black moved first, so the root value is from Black's perspective.
    assert_eq!(state.board.terminal_score(Player::Black), predicted);
}

#[test]
fn self_play_visits_each_turn_alternation_or_pass() {
    // Smoke test that the game loop terminates and fills the board area
    // at most once per placement.
    let mut table = ScoreTable::new();
    let mut state = GameState::default();
    let mut placements = 0;

    while !state.is_finished() {
        if state.must_pass() {
            state = state.pass();
            continue;
        }

        solve(state, &mut table);
        state = state.make_move(best_move(state, &table).unwrap());
        placements += 1;
        assert!(placements <= 12, "more placements than empty cells");
    }

    assert_eq!(
        state.board.occupied().count_occupied() as u32,
        4 + placements
    );
}
