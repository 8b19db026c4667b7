use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::config::DEPTH_ENV;
use chess_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_core::search::alpha_beta::search_with_scorer;
use chess_core::search::board_scoring::{MaterialScorer, PieceSquareScorer};
use chess_core::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
    },
    SearchCase {
        name: "classical_mid",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    },
    SearchCase {
        name: "tactical",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    SearchCase {
        name: "end_kpk",
        fen: "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1",
    },
];

fn bench_alpha_beta(c: &mut Criterion) {
    let depth = std::env::var(DEPTH_ENV)
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1);

    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = parse_fen(case.fen).expect("benchmark FEN should parse");
        let side = game.side_to_move;

        group.bench_with_input(BenchmarkId::new(case.name, format!("pst_d{depth}")), &game, |b, game| {
            b.iter(|| {
                let result = search_with_scorer(black_box(game), depth, side, &PieceSquareScorer)
                    .expect("search should run");
                black_box(result.nodes)
            });
        });
        group.bench_with_input(BenchmarkId::new(case.name, format!("material_d{depth}")), &game, |b, game| {
            b.iter(|| {
                let result =
                    search_with_scorer(black_box(game), depth, side, &MaterialScorer).expect("search should run");
                black_box(result.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_alpha_beta);
criterion_main!(search_benches);
