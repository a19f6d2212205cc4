use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_sim::core::{ActivePiece, Board, Game, Searcher};
use tetris_sim::types::{Command, PieceKind, Rgb};

fn bench_get_score(c: &mut Criterion) {
    let mut board = Board::new();
    // An uneven stack so the per-column walks do real work.
    for x in 0..10 {
        for y in 0..((x * 3) % 7) {
            board.paint_block(x, y, Rgb(1, 1, 1));
        }
    }
    let mut probe = ActivePiece::new(PieceKind::T, &board);
    probe.show(&mut board);

    c.bench_function("get_score", |b| {
        b.iter(|| board.get_score(black_box(&probe)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..10 {
        for y in 0..((x * 3) % 7) {
            board.paint_block(x, y, Rgb(1, 1, 1));
        }
    }
    let mut piece = ActivePiece::new(PieceKind::S, &board);
    piece.show(&mut board);
    let mut searcher = Searcher::new();

    c.bench_function("searcher_new_move", |b| {
        b.iter(|| {
            searcher.new_move(&mut board, &mut piece, black_box(PieceKind::I));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..4 {
                for x in 0..10 {
                    board.paint_block(x, y, Rgb(1, 1, 1));
                }
            }
            board.clear_row(black_box(0))
        })
    });
}

fn bench_gravity_step(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("step_gravity", |b| {
        b.iter(|| {
            game.step_gravity();
        })
    });
}

fn bench_auto_play_step(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.apply(Command::ToggleAutoPlay);

    c.bench_function("step_ai", |b| {
        b.iter(|| {
            game.step_ai();
        })
    });
}

criterion_group!(
    benches,
    bench_get_score,
    bench_search,
    bench_line_clear,
    bench_gravity_step,
    bench_auto_play_step
);
criterion_main!(benches);
