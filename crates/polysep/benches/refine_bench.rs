//! Criterion benchmarks for hull construction and greedy refinement.
//! Focus sizes: n included + n excluded for n in {5, 10, 20}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polysep::gen::{scatter_points, ScatterCfg};
use polysep::hull::convex_hull;
use polysep::refine::{refine_until_stable, Objective};

fn bench_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine");
    for &n in &[5usize, 10, 20] {
        let cfg = ScatterCfg {
            included: n,
            excluded: n,
            ..ScatterCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("hull", n), &n, |b, _| {
            b.iter_batched(
                || scatter_points(cfg, 43),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("hull_and_refine", n), &n, |b, _| {
            b.iter_batched(
                || scatter_points(cfg, 43),
                |pts| {
                    let mut polygon = convex_hull(&pts);
                    let _ = refine_until_stable(&mut polygon, &pts, Objective::Perimeter);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_refine);
criterion_main!(benches);
