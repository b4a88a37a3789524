use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::perft::perft;

const STARTPOS_NODES_QUICK: &[u64] = &[20, 400, 8_902];
const STARTPOS_NODES_STANDARD: &[u64] = &[20, 400, 8_902, 197_281];

fn selected_depths() -> &'static [u64] {
    match std::env::var("QUINCE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => STARTPOS_NODES_STANDARD,
        _ => STARTPOS_NODES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth_idx, expected_nodes) in selected_depths().iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let mut game = GameState::new_game();
        let warmup = perft(&mut game, depth);
        assert_eq!(
            warmup.nodes as u64, *expected_nodes,
            "node mismatch in warmup at depth {depth}"
        );

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let mut bench_game = GameState::new_game();
                    let counts = perft(black_box(&mut bench_game), black_box(depth));
                    assert_eq!(counts.nodes as u64, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
