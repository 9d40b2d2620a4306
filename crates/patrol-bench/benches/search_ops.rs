//! Criterion benchmarks for tracing, loop detection and obstruction search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use patrol_bench::{reference_grid, search_config};
use patrol_engine::{candidates, trace_path, CandidateScope, LoopDetector, ObstructionSearch};

/// Benchmark: trace the unobstructed guard across the 130x130 reference map.
fn bench_trace_reference(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();

    c.bench_function("trace_reference_130", |b| {
        b.iter(|| {
            let trace = trace_path(&grid, grid.start_state()).ok();
            black_box(trace.map(|t| t.distinct_cells()));
        });
    });
}

/// Benchmark: loop detection for the first 256 traced candidates, reusing
/// one detector.
fn bench_detect_reused(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();
    let cells: Vec<_> = candidates(&grid, CandidateScope::TracedPath)
        .into_iter()
        .take(256)
        .collect();

    c.bench_function("detect_256_candidates", |b| {
        let mut detector = LoopDetector::new();
        b.iter(|| {
            for &position in &cells {
                let view = grid.obstructed(position).unwrap();
                black_box(detector.detect(&view, grid.start_state()));
            }
        });
    });
}

/// Benchmark: full obstruction search at 1, 2, 4 and 8 workers.
fn bench_search_workers(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();
    let mut group = c.benchmark_group("search_reference_130");
    group.sample_size(10);

    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            let search = ObstructionSearch::new(&grid, search_config(w)).unwrap();
            b.iter(|| black_box(search.run().unwrap().loop_count()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_trace_reference,
    bench_detect_reused,
    bench_search_workers
);
criterion_main!(benches);
