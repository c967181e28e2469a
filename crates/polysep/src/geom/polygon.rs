//! Cyclic vertex-id polygon with derived edges and exact containment.

use nalgebra::Vector2;

use super::predicates::{distance, on_segment, segments_intersect};
use super::types::{PointId, PointSet};

/// A polygon as an ordered, cyclic sequence of vertex ids.
///
/// Edges are a view of consecutive vertices: `edge(i) = (verts[i],
/// verts[(i+1) % n])`, n edges for n ≥ 2 vertices, none below that. The
/// polygon stores no coordinates; every metric query takes the `PointSet`
/// arena the ids point into.
///
/// Mutation is vertex insertion only (`insert_into_edge`); simplicity is
/// enforced by the callers at insertion time via `insertion_keeps_simple`,
/// never re-checked globally afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    verts: Vec<PointId>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { verts: Vec::new() }
    }

    pub fn from_vertices(verts: Vec<PointId>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertex membership by id (never by coordinates).
    #[inline]
    pub fn has_vertex(&self, id: PointId) -> bool {
        self.verts.contains(&id)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.verts.len() < 2 {
            0
        } else {
            self.verts.len()
        }
    }

    /// The directed edge starting at vertex `i`.
    #[inline]
    pub fn edge(&self, i: usize) -> (PointId, PointId) {
        let n = self.verts.len();
        (self.verts[i], self.verts[(i + 1) % n])
    }

    /// Directed edges in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        let n = self.verts.len();
        (0..self.edge_count()).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Sum of edge lengths; zero below 2 vertices.
    pub fn perimeter(&self, pts: &PointSet) -> f64 {
        self.edges()
            .map(|(a, b)| distance(pts.pos(a), pts.pos(b)))
            .sum()
    }

    /// Shoelace sum over the edge cycle, halved; zero below 3 vertices.
    /// Positive for counterclockwise vertex order.
    pub fn signed_area(&self, pts: &PointSet) -> f64 {
        if self.verts.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (a, b) in self.edges() {
            let a = pts.pos(a);
            let b = pts.pos(b);
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Unsigned area; what the validators rank by (the searches visit both
    /// orientations of every vertex cycle).
    #[inline]
    pub fn area(&self, pts: &PointSet) -> f64 {
        self.signed_area(pts).abs()
    }

    /// Ray-casting containment (crossing number).
    ///
    /// Casts a horizontal ray toward +x and counts edges whose y-span brackets
    /// `p.y` half-open (`y1 ≤ py < y2` or `y2 ≤ py < y1`) with x-intercept
    /// ≥ `p.x`; odd count means inside. The half-open bracket is what keeps
    /// shared vertices from double-counting, and it skips horizontal edges
    /// outright, so the intercept division is only reached with `y1 ≠ y2`.
    pub fn contains(&self, pts: &PointSet, p: Vector2<f64>) -> bool {
        let mut crossings = 0u32;
        for (a, b) in self.edges() {
            let a = pts.pos(a);
            let b = pts.pos(b);
            let brackets = (a.y <= p.y && p.y < b.y) || (b.y <= p.y && p.y < a.y);
            if !brackets {
                continue;
            }
            let t = (p.y - a.y) / (b.y - a.y);
            let x = a.x + t * (b.x - a.x);
            if x >= p.x {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Exact boundary test: `p` coincides with a vertex or lies on an edge.
    pub fn on_boundary(&self, pts: &PointSet, p: Vector2<f64>) -> bool {
        if self.verts.iter().any(|&v| pts.pos(v) == p) {
            return true;
        }
        self.edges()
            .any(|(a, b)| on_segment(pts.pos(a), pts.pos(b), p))
    }

    /// Axis-aligned bounding box `(min, max)`; `None` for an empty polygon.
    pub fn bounds(&self, pts: &PointSet) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let mut it = self.verts.iter().map(|&v| pts.pos(v));
        let first = it.next()?;
        let (mut lo, mut hi) = (first, first);
        for p in it {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        }
        Some((lo, hi))
    }

    /// Split edge `edge_idx = (p1, p2)` by inserting `id` immediately before
    /// `p2` in the vertex sequence.
    pub fn insert_into_edge(&mut self, edge_idx: usize, id: PointId) {
        self.verts.insert(edge_idx + 1, id);
    }

    /// Would inserting `id` into edge `edge_idx` keep the polygon simple?
    ///
    /// Tests the two replacement edges against every retained edge, plus
    /// against each other for the collinear fold-back spike. Shared endpoints
    /// with the neighbor edges are fine (see `segments_intersect`).
    pub fn insertion_keeps_simple(&self, pts: &PointSet, edge_idx: usize, id: PointId) -> bool {
        let (p1, p2) = self.edge(edge_idx);
        let a = pts.pos(p1);
        let b = pts.pos(p2);
        let q = pts.pos(id);
        for (i, (u, v)) in self.edges().enumerate() {
            if i == edge_idx {
                continue;
            }
            let u = pts.pos(u);
            let v = pts.pos(v);
            if segments_intersect(a, q, u, v) || segments_intersect(q, b, u, v) {
                return false;
            }
        }
        !segments_intersect(a, q, q, b)
    }

    /// Pairwise edge-intersection check over the whole polygon. Used by the
    /// exhaustive validator on arbitrary permutation cycles; the incremental
    /// paths rely on `insertion_keeps_simple` instead.
    pub fn is_simple(&self, pts: &PointSet) -> bool {
        let m = self.edge_count();
        for i in 0..m {
            let (a1, a2) = self.edge(i);
            for j in (i + 1)..m {
                let (b1, b2) = self.edge(j);
                if segments_intersect(pts.pos(a1), pts.pos(a2), pts.pos(b1), pts.pos(b2)) {
                    return false;
                }
            }
        }
        true
    }
}
