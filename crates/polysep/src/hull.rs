//! Gift-wrapping (Jarvis march) convex hull of the Included points.

use crate::geom::predicates::{cross, distance};
use crate::geom::{PointId, PointSet, Polygon};

/// Convex hull of the Included points, emitted in counterclockwise order.
///
/// Wrapping starts at the bottom-most of the leftmost Included points. The
/// lexicographic (x, then y) minimum is always an extreme hull vertex, never
/// the interior of a collinear run, so the march is guaranteed to return to
/// it. From there it repeatedly swings to the candidate most clockwise of the
/// current tentative edge (`cross < 0`). An exactly collinear tie (`cross == 0`) picks the
/// farther point, so collinear runs collapse to their extreme endpoints; the
/// interior points of such a run end up exactly on a hull edge, which the
/// refinement step classifies as already satisfied. Terminates on id equality
/// with the start.
///
/// Zero Included points give an empty polygon, one gives a single-vertex
/// polygon, two a degenerate 2-gon. Excluded points never influence the hull.
pub fn convex_hull(pts: &PointSet) -> Polygon {
    let included: Vec<PointId> = pts.included_ids().collect();
    let Some(&start) = included.iter().min_by(|a, b| {
        let pa = pts.pos(**a);
        let pb = pts.pos(**b);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    }) else {
        return Polygon::new();
    };

    let mut verts = vec![start];
    let mut current = start;
    loop {
        let mut next = included[0];
        for &pt in &included[1..] {
            if pt == current {
                continue;
            }
            let cp = cross(pts.pos(current), pts.pos(next), pts.pos(pt));
            let farther = cp == 0.0
                && distance(pts.pos(current), pts.pos(pt))
                    > distance(pts.pos(current), pts.pos(next));
            if next == current || cp < 0.0 || farther {
                next = pt;
            }
        }
        if next == start {
            break;
        }
        verts.push(next);
        current = next;
    }

    Polygon::from_vertices(verts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Label;
    use nalgebra::Vector2;
    use proptest::prelude::*;

    fn set(points: &[(f64, f64, Label)]) -> PointSet {
        let mut pts = PointSet::new();
        for &(x, y, label) in points {
            pts.push(Vector2::new(x, y), label);
        }
        pts
    }

    #[test]
    fn square_hull_is_ccw() {
        let pts = set(&[
            (0.0, 0.0, Label::Included),
            (4.0, 0.0, Label::Included),
            (4.0, 4.0, Label::Included),
            (0.0, 4.0, Label::Included),
        ]);
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(hull.signed_area(&pts) > 0.0);
        assert!((hull.area(&pts) - 16.0).abs() < 1e-12);
        assert!((hull.perimeter(&pts) - 16.0).abs() < 1e-12);
    }

    #[test]
    fn interior_and_excluded_points_are_not_vertices() {
        let pts = set(&[
            (0.0, 0.0, Label::Included),
            (4.0, 0.0, Label::Included),
            (2.0, 3.0, Label::Included),
            (2.0, 1.0, Label::Included),   // interior
            (-10.0, 0.0, Label::Excluded), // far out, must be ignored
        ]);
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 3);
        assert!(!hull.has_vertex(PointId(3)));
        assert!(!hull.has_vertex(PointId(4)));
        assert!(hull.contains(&pts, Vector2::new(2.0, 1.0)));
    }

    #[test]
    fn collinear_run_collapses_to_extremes() {
        let pts = set(&[
            (0.0, 0.0, Label::Included),
            (1.0, 0.0, Label::Included),
            (2.0, 0.0, Label::Included),
            (4.0, 0.0, Label::Included),
            (2.0, 2.0, Label::Included),
        ]);
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 3);
        assert!(hull.has_vertex(PointId(0)));
        assert!(hull.has_vertex(PointId(3)));
        assert!(hull.has_vertex(PointId(4)));
        // Interior collinear points sit exactly on the hull's bottom edge.
        assert!(hull.on_boundary(&pts, Vector2::new(1.0, 0.0)));
        assert!(hull.on_boundary(&pts, Vector2::new(2.0, 0.0)));
    }

    #[test]
    fn collinear_left_edge_run_terminates_at_its_extremes() {
        // The x-minimal points form a vertical collinear run and the first
        // one pushed is its interior; the y tie-break must still start the
        // march at the run's bottom extreme.
        let pts = set(&[
            (0.0, 2.0, Label::Included),
            (0.0, 0.0, Label::Included),
            (0.0, 4.0, Label::Included),
            (2.0, 0.0, Label::Included),
        ]);
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 3);
        assert!(hull.has_vertex(PointId(1)));
        assert!(hull.has_vertex(PointId(2)));
        assert!(hull.has_vertex(PointId(3)));
        assert!(!hull.has_vertex(PointId(0)));
        assert!(hull.on_boundary(&pts, Vector2::new(0.0, 2.0)));
        assert!(hull.signed_area(&pts) > 0.0);
    }

    #[test]
    fn degenerate_inputs() {
        let empty = set(&[(1.0, 1.0, Label::Excluded)]);
        assert!(convex_hull(&empty).is_empty());

        let single = set(&[(3.0, -2.0, Label::Included)]);
        let hull = convex_hull(&single);
        assert_eq!(hull.len(), 1);
        assert_eq!(hull.edge_count(), 0);
        assert_eq!(hull.perimeter(&single), 0.0);

        let pair = set(&[(0.0, 0.0, Label::Included), (2.0, 1.0, Label::Included)]);
        let hull = convex_hull(&pair);
        assert_eq!(hull.len(), 2);
        assert_eq!(hull.area(&pair), 0.0);
    }

    proptest! {
        /// Every Included point is a hull vertex, on the hull boundary, or inside.
        #[test]
        fn hull_covers_all_included(coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..12)) {
            let mut pts = PointSet::new();
            for (x, y) in &coords {
                pts.push(Vector2::new(*x, *y), Label::Included);
            }
            let hull = convex_hull(&pts);
            for (id, p) in pts.iter() {
                let covered = hull.has_vertex(id)
                    || hull.on_boundary(&pts, p.pos)
                    || hull.contains(&pts, p.pos);
                prop_assert!(covered, "point {:?} not covered by hull", p.pos);
            }
        }
    }
}
