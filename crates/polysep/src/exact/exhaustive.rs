//! Full combinatorial enumeration of candidate separator polygons.
//!
//! For each vertex count k in 3..=N, every k-subset of the points and every
//! cycle ordering of that subset is a candidate; total work is
//! Σ C(N,k)·k! polygons. The subset list of each k-round is split into
//! contiguous blocks evaluated in parallel with rayon; block results merge by
//! scalar minimum, a commutative reduction with no shared mutable state. A
//! worker panic propagates on join; a lost partition would silently understate
//! coverage, so it is fatal for the run.

use rayon::prelude::*;

use super::combi::{Combinations, HeapPermutations};
use super::is_valid_separator;
use crate::geom::{PointId, PointSet, Polygon};
use crate::refine::Objective;

/// Exhaustive-search configuration.
#[derive(Clone, Copy, Debug)]
pub struct ExhaustiveCfg {
    /// Number of contiguous blocks the per-k subset list is split into.
    pub blocks: usize,
}

impl Default for ExhaustiveCfg {
    fn default() -> Self {
        Self { blocks: 8 }
    }
}

/// Progress event emitted after each merged k-round.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    pub evaluated: u128,
    pub total: u128,
    pub best: Option<f64>,
}

/// Number of candidate polygons for an N-point set: Σ_{k=3}^{N} C(N,k)·k!.
/// Saturates at `u128::MAX` once the factorial terms overflow (n ≥ 35);
/// enumeration at that scale is unreachable anyway, so the counter stays total.
pub fn total_candidates(n: usize) -> u128 {
    (3..=n).fold(0u128, |acc, k| {
        acc.saturating_add(binomial(n, k).saturating_mul(factorial(k)))
    })
}

fn binomial(n: usize, k: usize) -> u128 {
    let mut out: u128 = 1;
    for i in 0..k.min(n - k) {
        out = out.saturating_mul((n - i) as u128) / (i + 1) as u128;
    }
    out
}

fn factorial(k: usize) -> u128 {
    (1..=k as u128).fold(1u128, |acc, i| acc.saturating_mul(i))
}

struct BlockResult {
    best: Option<(f64, Polygon)>,
    evaluated: u128,
}

/// Enumerate every candidate polygon and return the cheapest valid separator,
/// or `None` when the enumerated space holds no separator at all (e.g. fewer
/// than 3 points). `on_progress` fires once per merged k-round.
pub fn exhaustive_search<F>(
    pts: &PointSet,
    objective: Objective,
    cfg: ExhaustiveCfg,
    mut on_progress: F,
) -> Option<(f64, Polygon)>
where
    F: FnMut(Progress),
{
    let n = pts.len();
    let total = total_candidates(n);
    let mut best: Option<(f64, Polygon)> = None;
    let mut evaluated: u128 = 0;

    for k in 3..=n {
        let combos: Vec<Vec<PointId>> = Combinations::new(pts.ids().collect(), k).collect();
        let blocks = partition_blocks(&combos, cfg.blocks.max(1));
        let results: Vec<BlockResult> = blocks
            .into_par_iter()
            .map(|block| evaluate_block(block, pts, objective))
            .collect();
        for r in results {
            evaluated += r.evaluated;
            if let Some((cost, polygon)) = r.best {
                if best.as_ref().is_none_or(|(b, _)| cost < *b) {
                    best = Some((cost, polygon));
                }
            }
        }
        tracing::debug!(k, evaluated, best = ?best.as_ref().map(|(c, _)| c), "k-round merged");
        on_progress(Progress {
            evaluated,
            total,
            best: best.as_ref().map(|(c, _)| *c),
        });
    }

    best
}

/// Split into `n` contiguous blocks; the last one takes the remainder.
fn partition_blocks(combos: &[Vec<PointId>], n: usize) -> Vec<&[Vec<PointId>]> {
    let step = combos.len() / n;
    let mut blocks = Vec::with_capacity(n);
    for i in 0..n {
        let start = i * step;
        if i < n - 1 {
            blocks.push(&combos[start..start + step]);
        } else {
            blocks.push(&combos[start..]);
        }
    }
    blocks
}

fn evaluate_block(
    block: &[Vec<PointId>],
    pts: &PointSet,
    objective: Objective,
) -> BlockResult {
    let mut best: Option<(f64, Polygon)> = None;
    let mut evaluated: u128 = 0;
    for combo in block {
        for perm in HeapPermutations::new(combo.clone()) {
            evaluated += 1;
            let polygon = Polygon::from_vertices(perm);
            let cost = match objective {
                Objective::Perimeter => polygon.perimeter(pts),
                Objective::Area => polygon.area(pts),
            };
            // Cheapness first: only candidates beating the local best pay for
            // the validity check.
            if best.as_ref().is_none_or(|(b, _)| cost < *b)
                && is_valid_separator(&polygon, pts)
            {
                best = Some((cost, polygon));
            }
        }
    }
    BlockResult { best, evaluated }
}
