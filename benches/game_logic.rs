use blockfall::core::{Board, Session, SessionConfig};
use blockfall::engine::{best_placement, Weights};
use blockfall::types::PieceKind;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default().with_seed(12345));

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            black_box(session.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 18..22 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I)).unwrap();
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default().with_seed(12345));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            black_box(session.hard_drop());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default().with_seed(12345));

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.move_left();
            black_box(session.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default().with_seed(12345));
    session.tick();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(session.rotate());
        })
    });
}

fn bench_best_placement(c: &mut Criterion) {
    let session = Session::new(SessionConfig::default().with_seed(12345));
    let weights = Weights::default();

    c.bench_function("best_placement", |b| {
        b.iter(|| black_box(best_placement(&session, &weights)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_best_placement
);
criterion_main!(benches);
