//! Pruned breadth-first tree search over constrained insertions.
//!
//! The root candidate is the convex hull; each round expands every surviving
//! candidate by every (problematic point, edge) insertion, the full branching
//! factor rather than just the greedy pick. Children that would self-intersect are
//! rejected, and under the perimeter objective children whose perimeter
//! already exceeds a supplied upper bound are pruned: perimeter only grows
//! under insertion, so the prune is exact and keeps the true optimum whenever
//! the bound is valid. Area is not monotone under insertion (notches shrink
//! it), so area mode never prunes on the bound.

use crate::geom::{PointSet, Polygon};
use crate::hull::convex_hull;
use crate::refine::{insertion_cost, problematic_points, Objective};

/// Tree-search configuration.
#[derive(Clone, Copy, Debug)]
pub struct TreeCfg {
    /// Hard cap on breadth-first rounds; guards runaway branching.
    pub max_rounds: usize,
    /// Known upper bound on the optimal perimeter, e.g. the heuristic's
    /// result. Candidates exactly at the bound survive.
    pub upper_bound: Option<f64>,
}

impl Default for TreeCfg {
    fn default() -> Self {
        Self {
            max_rounds: 100_000,
            upper_bound: None,
        }
    }
}

/// Three-way search outcome. `Infeasible` is proven (no separator exists in
/// the insertion space); `Exhausted` means the round budget ran out first,
/// so the answer is unknown and a retry needs a larger budget.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    Optimal { cost: f64, polygon: Polygon },
    Infeasible,
    Exhausted { best: Option<(f64, Polygon)> },
}

/// Branch-and-bound over all constrained insertions, breadth-first by round.
pub fn tree_search(pts: &PointSet, objective: Objective, cfg: TreeCfg) -> SearchOutcome {
    let hull = convex_hull(pts);
    if hull.len() < 3 {
        return SearchOutcome::Infeasible;
    }

    let mut best: Option<(f64, Polygon)> = None;
    let mut frontier = vec![hull];
    let mut round = 0usize;

    while !frontier.is_empty() {
        if round >= cfg.max_rounds {
            tracing::debug!(round, "round budget exhausted");
            return SearchOutcome::Exhausted { best };
        }

        let mut next = Vec::new();
        for cand in &frontier {
            let problematic = problematic_points(cand, pts);
            if problematic.is_empty() {
                // Leaf: a valid separator.
                let cost = match objective {
                    Objective::Perimeter => cand.perimeter(pts),
                    Objective::Area => cand.area(pts),
                };
                if best.as_ref().is_none_or(|(b, _)| cost < *b) {
                    best = Some((cost, cand.clone()));
                }
                continue;
            }

            let base_perimeter = cand.perimeter(pts);
            for &pid in &problematic {
                for e in 0..cand.edge_count() {
                    if objective == Objective::Perimeter {
                        if let Some(ub) = cfg.upper_bound {
                            let delta = insertion_cost(pts, cand.edge(e), pid, Objective::Perimeter);
                            if base_perimeter + delta > ub {
                                continue;
                            }
                        }
                    }
                    if cand.insertion_keeps_simple(pts, e, pid) {
                        let mut child = cand.clone();
                        child.insert_into_edge(e, pid);
                        next.push(child);
                    }
                }
            }
        }

        tracing::debug!(
            round,
            frontier = frontier.len(),
            children = next.len(),
            best = ?best.as_ref().map(|(c, _)| c),
            "search round"
        );
        frontier = next;
        round += 1;
    }

    match best {
        Some((cost, polygon)) => SearchOutcome::Optimal { cost, polygon },
        None => SearchOutcome::Infeasible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{exhaustive_search, ExhaustiveCfg};
    use crate::geom::Label;
    use crate::hull::convex_hull as hull_of;
    use crate::refine::refine_until_stable;
    use nalgebra::Vector2;

    fn set(points: &[(f64, f64, Label)]) -> PointSet {
        let mut pts = PointSet::new();
        for &(x, y, label) in points {
            pts.push(Vector2::new(x, y), label);
        }
        pts
    }

    fn square_with_center_red() -> PointSet {
        set(&[
            (0.0, 0.0, Label::Included),
            (4.0, 0.0, Label::Included),
            (4.0, 4.0, Label::Included),
            (0.0, 4.0, Label::Included),
            (2.0, 2.0, Label::Excluded),
        ])
    }

    #[test]
    fn finds_the_notched_square() {
        let pts = square_with_center_red();
        let SearchOutcome::Optimal { cost, polygon } =
            tree_search(&pts, Objective::Perimeter, TreeCfg::default())
        else {
            panic!("expected an optimal outcome");
        };
        let expected = 12.0 + 4.0 * std::f64::consts::SQRT_2;
        assert!((cost - expected).abs() < 1e-9);
        assert_eq!(polygon.len(), 5);
    }

    #[test]
    fn heuristic_bound_does_not_discard_the_optimum() {
        let pts = square_with_center_red();
        let mut heuristic = hull_of(&pts);
        refine_until_stable(&mut heuristic, &pts, Objective::Perimeter).unwrap();
        let ub = heuristic.perimeter(&pts);
        let cfg = TreeCfg {
            upper_bound: Some(ub),
            ..TreeCfg::default()
        };
        let SearchOutcome::Optimal { cost, .. } = tree_search(&pts, Objective::Perimeter, cfg)
        else {
            panic!("expected an optimal outcome");
        };
        assert!((cost - ub).abs() < 1e-9);
    }

    #[test]
    fn fewer_than_three_hull_vertices_is_infeasible() {
        let pts = set(&[
            (0.0, 0.0, Label::Included),
            (1.0, 1.0, Label::Excluded),
        ]);
        assert!(matches!(
            tree_search(&pts, Objective::Perimeter, TreeCfg::default()),
            SearchOutcome::Infeasible
        ));
    }

    #[test]
    fn zero_round_budget_reports_exhausted() {
        let pts = square_with_center_red();
        let cfg = TreeCfg {
            max_rounds: 0,
            ..TreeCfg::default()
        };
        assert!(matches!(
            tree_search(&pts, Objective::Perimeter, cfg),
            SearchOutcome::Exhausted { best: None }
        ));
    }

    #[test]
    fn agrees_with_exhaustive_on_triangle_with_inner_reds() {
        let pts = set(&[
            (0.0, 0.0, Label::Included),
            (8.0, 0.0, Label::Included),
            (4.0, 8.0, Label::Included),
            (3.0, 2.0, Label::Excluded),
            (5.0, 2.0, Label::Excluded),
            (4.0, 5.0, Label::Excluded),
        ]);
        let (exhaustive_cost, _) =
            exhaustive_search(&pts, Objective::Perimeter, ExhaustiveCfg::default(), |_| {})
                .expect("a separator exists");
        let SearchOutcome::Optimal { cost, .. } =
            tree_search(&pts, Objective::Perimeter, TreeCfg::default())
        else {
            panic!("expected an optimal outcome");
        };
        // The two independent searches must agree to 9 decimal digits.
        assert!(
            (cost - exhaustive_cost).abs() < 1e-9,
            "tree {cost} vs exhaustive {exhaustive_cost}"
        );
    }

    #[test]
    fn area_objective_skips_the_perimeter_prune() {
        let pts = square_with_center_red();
        // An absurdly tight bound must not affect area mode.
        let cfg = TreeCfg {
            upper_bound: Some(0.1),
            ..TreeCfg::default()
        };
        let SearchOutcome::Optimal { cost, .. } = tree_search(&pts, Objective::Area, cfg) else {
            panic!("expected an optimal outcome");
        };
        assert!((cost - 12.0).abs() < 1e-9);
    }
}
