//! Criterion benchmarks for the outline pipeline.
//! Focus sizes: n rectangles in {1, 8, 32, 128}.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p borderline

use borderline::geom::rand::{draw_disjoint_rect_set, draw_rect_set, RectSetCfg, ReplayToken};
use borderline::geom::OutlineCfg;
use borderline::outline::{compute_outline, union_loops};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn set_cfg(count: usize) -> RectSetCfg {
    RectSetCfg {
        count,
        ..RectSetCfg::default()
    }
}

fn bench_outline(c: &mut Criterion) {
    let cfg = OutlineCfg::default();
    let mut group = c.benchmark_group("outline");
    for &n in &[1usize, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("union_loops_overlapping", n), &n, |b, &n| {
            b.iter_batched(
                || draw_rect_set(set_cfg(n), ReplayToken { seed: 43, index: 0 }),
                |rects| {
                    let _loops = union_loops(&rects, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("compute_outline_overlapping", n), &n, |b, &n| {
            b.iter_batched(
                || draw_rect_set(set_cfg(n), ReplayToken { seed: 44, index: 0 }),
                |rects| {
                    let _paths = compute_outline(&rects, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("compute_outline_disjoint", n), &n, |b, &n| {
            b.iter_batched(
                || draw_disjoint_rect_set(set_cfg(n), ReplayToken { seed: 45, index: 0 }),
                |rects| {
                    let _paths = compute_outline(&rects, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_outline);
criterion_main!(benches);
