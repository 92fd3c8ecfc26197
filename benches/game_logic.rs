use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use two_power::core::{apply_move, handle_move_and_spawn, has_valid_move, Board, GameState};
use two_power::types::Direction;

fn busy_board() -> Board {
    Board::from_values([
        [2, 2, 4, 4, 8],
        [0, 2, 0, 2, 0],
        [16, 16, 16, 0, 4],
        [8, 0, 8, 0, 8],
        [2, 4, 8, 16, 32],
    ])
}

fn bench_apply_move(c: &mut Criterion) {
    let state = GameState::from_board(busy_board());

    c.bench_function("apply_move_left", |b| {
        b.iter(|| apply_move(black_box(Direction::Left), black_box(&state)))
    });
    c.bench_function("apply_move_down", |b| {
        b.iter(|| apply_move(black_box(Direction::Down), black_box(&state)))
    });
}

fn bench_turn(c: &mut Criterion) {
    let state = GameState::from_board(busy_board());
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("handle_move_and_spawn", |b| {
        b.iter(|| handle_move_and_spawn(black_box(Direction::Right), &state, &mut rng))
    });
}

fn bench_detector(c: &mut Criterion) {
    let dead = Board::from_values([
        [2, 4, 2, 4, 2],
        [4, 2, 4, 2, 4],
        [2, 4, 2, 4, 2],
        [4, 2, 4, 2, 4],
        [2, 4, 2, 4, 2],
    ]);

    c.bench_function("has_valid_move_dead_board", |b| {
        b.iter(|| has_valid_move(black_box(&dead)))
    });
}

fn bench_new_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("new_game", |b| b.iter(|| GameState::new(&mut rng)));
}

criterion_group!(benches, bench_apply_move, bench_turn, bench_detector, bench_new_game);
criterion_main!(benches);
