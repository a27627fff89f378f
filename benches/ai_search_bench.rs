use chess_core::agent::ai::{best_move, Evaluator};
use chess_core::game_repr::GameState;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_opening_search(c: &mut Criterion) {
    let evaluator = Evaluator::positional();
    let mut group = c.benchmark_group("search from start");
    group.sample_size(10);

    for depth in [1u8, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = GameState::new();
                let mut rng = StdRng::seed_from_u64(0);
                black_box(best_move(&mut state, depth, &evaluator, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let state = GameState::new();
    let evaluator = Evaluator::positional();
    c.bench_function("evaluate start", |b| {
        b.iter(|| black_box(evaluator.evaluate_board(&state, state.side_to_move())))
    });
}

criterion_group!(benches, bench_opening_search, bench_evaluate);
criterion_main!(benches);
