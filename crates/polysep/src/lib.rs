//! Separator polygons for labeled 2D point sets.
//!
//! Given points tagged Included or Excluded, build a simple closed polygon
//! that contains every Included point and excludes every Excluded one, while
//! approximately minimizing perimeter or area.
//!
//! Pipeline
//! - `hull`: gift-wrapping convex hull of the Included points (the start polygon).
//! - `refine`: greedy worst-first vertex insertion until the polygon separates
//!   all points (a constraint-satisfying heuristic, not a global optimizer).
//! - `exact`: two independent reference searches (full enumeration and pruned
//!   breadth-first insertion) used to certify or refute the heuristic's result.
//!
//! Supporting modules: `geom` (arena, polygon, exact predicates), `dataset`
//! (line-based text codec), `gen` (seeded point generators).

pub mod dataset;
pub mod exact;
pub mod gen;
pub mod geom;
pub mod hull;
pub mod refine;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dataset::{
        format_points, load_points, parse_points, save_points, DatasetError,
    };
    pub use crate::exact::{
        exhaustive_search, total_candidates, tree_search, ExhaustiveCfg, Progress, SearchOutcome,
        TreeCfg,
    };
    pub use crate::gen::{ring_points, scatter_points, RingCfg, ScatterCfg};
    pub use crate::geom::{Label, LabeledPoint, PointId, PointSet, Polygon};
    pub use crate::hull::convex_hull;
    pub use crate::refine::{
        problematic_points, refine_step, refine_until_stable, Objective, RefineError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
