//! Greedy worst-first constrained refinement of a separator polygon.
//!
//! One step classifies the problematic points, picks the point whose cheapest
//! edge insertion is costliest (the strongest forcing constraint), and commits
//! the first insertion that keeps the polygon simple. Repeated steps reach a
//! stable polygon that separates every point, but not necessarily the global
//! optimum for the chosen objective; the `exact` searches exist to audit that.

use std::collections::HashSet;

use thiserror::Error;

use crate::geom::predicates::{distance, triangle_area};
use crate::geom::{Label, PointId, PointSet, Polygon};

/// Cost function used by the refinement tie-break and the validators' ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Perimeter,
    Area,
}

/// Refinement failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefineError {
    /// Every (point, edge) insertion candidate was rejected for
    /// self-intersection; the step cannot make progress. Indicates a
    /// degenerate input, surfaced instead of looping.
    #[error("no committable insertion left for any problematic point")]
    InsertionDeadlock,
}

/// Points currently violating their label's containment requirement:
/// Excluded points inside the polygon first, then Included non-vertex points
/// outside it. Points that are vertices (by id) or sit exactly on the
/// boundary are clamped to "already satisfied".
pub fn problematic_points(polygon: &Polygon, pts: &PointSet) -> Vec<PointId> {
    let mut out = Vec::new();
    for (id, p) in pts.iter() {
        if p.label == Label::Excluded
            && !polygon.has_vertex(id)
            && !polygon.on_boundary(pts, p.pos)
            && polygon.contains(pts, p.pos)
        {
            out.push(id);
        }
    }
    for (id, p) in pts.iter() {
        if p.label == Label::Included
            && !polygon.has_vertex(id)
            && !polygon.on_boundary(pts, p.pos)
            && !polygon.contains(pts, p.pos)
        {
            out.push(id);
        }
    }
    out
}

/// Cost of inserting `pt` into `edge = (p1, p2)`.
///
/// Perimeter mode is the perimeter delta of the split. Area mode is the
/// negated unsigned triangle area: more negative = larger area absorbed =
/// preferred edge, because the per-point search below takes the minimum.
pub fn insertion_cost(
    pts: &PointSet,
    edge: (PointId, PointId),
    pt: PointId,
    objective: Objective,
) -> f64 {
    let a = pts.pos(edge.0);
    let b = pts.pos(edge.1);
    let q = pts.pos(pt);
    match objective {
        Objective::Perimeter => distance(a, q) + distance(q, b) - distance(a, b),
        Objective::Area => -triangle_area(a, b, q),
    }
}

/// One refinement step.
///
/// Returns `Ok(false)` when no problematic point remains (the polygon is
/// stable; calling again is a no-op), `Ok(true)` after committing exactly one
/// vertex insertion, and `InsertionDeadlock` when every candidate insertion
/// would self-intersect. Ties in both the per-point minimum and the
/// cross-point maximum break first-found, keeping steps deterministic.
pub fn refine_step(
    polygon: &mut Polygon,
    pts: &PointSet,
    objective: Objective,
) -> Result<bool, RefineError> {
    let problematic = problematic_points(polygon, pts);
    if problematic.is_empty() {
        return Ok(false);
    }

    let mut rejected: HashSet<(PointId, usize)> = HashSet::new();
    loop {
        // Cheapest edge per problematic point, then the costliest of those:
        // the least cheaply satisfiable point is inserted first so it cannot
        // get painted into a corner by earlier cheap insertions.
        let mut chosen: Option<(PointId, usize, f64)> = None;
        for &pid in &problematic {
            let mut best: Option<(usize, f64)> = None;
            for e in 0..polygon.edge_count() {
                if rejected.contains(&(pid, e)) {
                    continue;
                }
                let cost = insertion_cost(pts, polygon.edge(e), pid, objective);
                if best.is_none_or(|(_, c)| cost < c) {
                    best = Some((e, cost));
                }
            }
            if let Some((e, cost)) = best {
                if chosen.is_none_or(|(_, _, c)| cost > c) {
                    chosen = Some((pid, e, cost));
                }
            }
        }

        let Some((pid, e, cost)) = chosen else {
            return Err(RefineError::InsertionDeadlock);
        };

        if polygon.insertion_keeps_simple(pts, e, pid) {
            polygon.insert_into_edge(e, pid);
            tracing::debug!(point = pid.0, edge = e, cost, "committed insertion");
            return Ok(true);
        }
        tracing::trace!(point = pid.0, edge = e, "insertion rejected, would self-intersect");
        rejected.insert((pid, e));
    }
}

/// Run `refine_step` until the polygon is stable; returns the number of
/// committed insertions. Each commit adds one vertex, so the loop is bounded
/// by the point count and needs no iteration cap.
pub fn refine_until_stable(
    polygon: &mut Polygon,
    pts: &PointSet,
    objective: Objective,
) -> Result<usize, RefineError> {
    let mut steps = 0;
    while refine_step(polygon, pts, objective)? {
        steps += 1;
    }
    Ok(steps)
}
