//! Criterion benchmarks for the exact validators on small point sets.
//! Exhaustive cost explodes as Σ C(n,k)·k!, so sizes stay at n in {5, 6, 7}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polysep::exact::{exhaustive_search, tree_search, ExhaustiveCfg, TreeCfg};
use polysep::gen::{scatter_points, ScatterCfg};
use polysep::refine::Objective;

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);
    for &n in &[5usize, 6, 7] {
        let cfg = ScatterCfg {
            included: n.div_ceil(2),
            excluded: n / 2,
            ..ScatterCfg::default()
        };
        let pts = scatter_points(cfg, 7);
        group.bench_with_input(BenchmarkId::new("exhaustive", n), &pts, |b, pts| {
            b.iter(|| exhaustive_search(pts, Objective::Perimeter, ExhaustiveCfg::default(), |_| {}))
        });
        group.bench_with_input(BenchmarkId::new("tree", n), &pts, |b, pts| {
            b.iter(|| tree_search(pts, Objective::Perimeter, TreeCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact);
criterion_main!(benches);
