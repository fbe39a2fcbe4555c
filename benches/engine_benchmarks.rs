//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pocket_chess::board::{Engine, SearchConfig, START_FEN};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -";

fn engine_at(fen: &str) -> Engine {
    let mut engine = Engine::new();
    assert!(engine.load_board_from_fen(fen));
    engine
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Engine::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete = engine_at(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("startpos", START_FEN), ("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let mut engine = engine_at(fen);
        group.bench_function(name, |b| b.iter(|| black_box(engine.legal_steps(0))));
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for level in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", level), &level, |b, &level| {
            let mut engine = Engine::new();
            let config = SearchConfig::time(0).with_max_level(level);
            b.iter(|| engine.solve(&config))
        });
    }

    // quiescence-heavy: many captures on the board
    for level in [2, 3] {
        group.bench_with_input(BenchmarkId::new("kiwipete", level), &level, |b, &level| {
            let mut engine = engine_at(KIWIPETE);
            let config = SearchConfig::time(0).with_max_level(level);
            b.iter(|| engine.solve(&config))
        });
    }

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");
    let mut engine = Engine::new();
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            engine.load_board_from_fen(black_box(KIWIPETE));
            black_box(engine.export_pos_to_fen(0))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_fen);
criterion_main!(benches);
