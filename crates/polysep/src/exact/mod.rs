//! Exact reference searches used to certify or refute the greedy heuristic.
//!
//! Two independent algorithms produce the true optimum for small inputs:
//! - `exhaustive`: enumerate every vertex subset and cycle ordering of the
//!   point set, in parallel blocks (factorial cost, auditing only).
//! - `tree`: breadth-first branch-and-bound over all constrained insertions
//!   starting at the convex hull, with an exact perimeter prune.
//!
//! Both rank candidates with the same predicates the heuristic uses, so their
//! costs are directly comparable.

mod combi;
mod exhaustive;
mod tree;

pub use combi::{Combinations, HeapPermutations};
pub use exhaustive::{exhaustive_search, total_candidates, ExhaustiveCfg, Progress};
pub use tree::{tree_search, SearchOutcome, TreeCfg};

use crate::geom::{Label, PointSet, Polygon};

/// A simple polygon that classifies every non-vertex point correctly.
/// Boundary contact satisfies either label, matching the refinement step's
/// clamped classification.
pub fn is_valid_separator(polygon: &Polygon, pts: &PointSet) -> bool {
    if !polygon.is_simple(pts) {
        return false;
    }
    for (id, p) in pts.iter() {
        if polygon.has_vertex(id) || polygon.on_boundary(pts, p.pos) {
            continue;
        }
        let inside = polygon.contains(pts, p.pos);
        match p.label {
            Label::Included if !inside => return false,
            Label::Excluded if inside => return false,
            _ => {}
        }
    }
    true
}
