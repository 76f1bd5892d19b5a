use criterion::*;

use mini_othello::GameState;
use mini_solver::{solve, ScoreTable};

fn criterion_solve(c: &mut Criterion) {
    c.bench_function("solve_start", |b| {
        b.iter(|| {
            let mut table = ScoreTable::new();
            solve(black_box(GameState::default()), &mut table)
        })
    });
}

criterion_group!(solve_bench, criterion_solve);
criterion_main!(solve_bench);
