//! Arena-backed 2D geometry for separator polygons.
//!
//! Purpose
//! - `PointSet` owns the labeled input points; polygons and searches refer to
//!   them by index-based `PointId`, so membership checks are id equality and
//!   numerically coincident points stay distinguishable.
//! - `Polygon` is a cyclic vertex-id sequence with derived edges; all metric
//!   and containment queries take the arena as a parameter.
//! - `predicates` holds the exact (sign/equality based, tolerance-free)
//!   primitives the rest of the crate builds on.
//!
//! Code cross-refs: `hull::convex_hull`, `refine`, `exact`.

mod polygon;
pub mod predicates;
mod types;

pub use polygon::Polygon;
pub use types::{Label, LabeledPoint, PointId, PointSet};
