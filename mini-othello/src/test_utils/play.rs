use crate::{Cell, GameState};

/// Play an interactive two-player game over stdin.
pub fn play_interactive() {
    use std::io::Write;
    let mut state = GameState::default();

    while !state.is_finished() {
        println!("\n{}\n", state);

        if state.must_pass() {
            println!("{} has no moves and passes.", state.to_move);
            state = state.pass();
            continue;
        }

        print!("Enter a move {}: ", state.legal_moves());
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();

        match input_line.trim().parse::<Cell>() {
            Ok(cell) => match state.try_move(cell) {
                Ok(next_state) => state = next_state,
                Err(err) => println!("{}.", err),
            },
            Err(_) => println!("Cannot parse move."),
        }
    }

    println!("\n{}\n", state.board);
    if let Some(winner) = state.winner() {
        println!("Winner: {}.", winner);
    } else {
        println!("Draw.")
    }
}
