use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shrimp_chess::game_state::chess_types::{CastleRights, Color};
use shrimp_chess::game_state::game_state::GameState;
use shrimp_chess::move_generation::perft::perft;
use shrimp_chess::utils::board_diagram::game_from_diagram;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: [&'static str; 8],
    side_to_move: Color,
    castle_rights: CastleRights,
    expected_nodes: &'static [u64],
}

const STANDARD_DIAGRAM: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        diagram: STANDARD_DIAGRAM,
        side_to_move: Color::Light,
        castle_rights: CastleRights::ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        diagram: [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        side_to_move: Color::Light,
        castle_rights: CastleRights::ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        diagram: [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        side_to_move: Color::Light,
        castle_rights: CastleRights::NONE,
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_game(case: &BenchCase) -> GameState {
    game_from_diagram(&case.diagram, case.side_to_move, case.castle_rights)
        .expect("benchmark diagram should parse")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_quick");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES_QUICK {
        let game = bench_game(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&mut warmup_game, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
