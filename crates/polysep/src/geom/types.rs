//! Labeled points and the arena that owns them.

use nalgebra::Vector2;

/// Containment requirement carried by an input point.
///
/// The final polygon must contain every `Included` point and exclude every
/// `Excluded` one; boundary contact satisfies either label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Included,
    Excluded,
}

/// Index-based handle into a `PointSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

/// A labeled input point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledPoint {
    pub pos: Vector2<f64>,
    pub label: Label,
}

/// Arena owning all labeled points of one problem instance.
///
/// Points are append-only and read-only once pushed; ids are stable. Every
/// other structure (polygons, search candidates) references points by id, so
/// vertex-membership checks never compare floating-point coordinates.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<LabeledPoint>,
}

impl PointSet {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point and return its stable id.
    pub fn push(&mut self, pos: Vector2<f64>, label: Label) -> PointId {
        let id = PointId(self.points.len());
        self.points.push(LabeledPoint { pos, label });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PointId) -> &LabeledPoint {
        &self.points[id.0]
    }

    #[inline]
    pub fn pos(&self, id: PointId) -> Vector2<f64> {
        self.points[id.0].pos
    }

    #[inline]
    pub fn label(&self, id: PointId) -> Label {
        self.points[id.0].label
    }

    /// Iterate points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &LabeledPoint)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointId(i), p))
    }

    /// All ids in insertion order (does not borrow the arena).
    pub fn ids(&self) -> impl Iterator<Item = PointId> {
        (0..self.points.len()).map(PointId)
    }

    /// Ids of the Included points, in insertion order.
    pub fn included_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.iter()
            .filter(|(_, p)| p.label == Label::Included)
            .map(|(id, _)| id)
    }
}
