//! Run summaries and console progress rendering.

use polysep::prelude::*;
use serde_json::{json, Value};

/// JSON summary of a heuristic run.
pub fn solve_summary(
    source: &str,
    objective: &str,
    steps: usize,
    polygon: &Polygon,
    pts: &PointSet,
) -> Value {
    json!({
        "source": source,
        "objective": objective,
        "points": pts.len(),
        "insertions": steps,
        "vertices": polygon.len(),
        "perimeter": polygon.perimeter(pts),
        "area": polygon.area(pts),
    })
}

/// JSON summary of a validation run.
pub fn validate_summary(
    source: &str,
    objective: &str,
    heuristic_cost: f64,
    reference_cost: Option<f64>,
    reference: &str,
    optimal: Option<bool>,
) -> Value {
    json!({
        "source": source,
        "objective": objective,
        "heuristic": heuristic_cost,
        "reference": reference_cost,
        "reference_kind": reference,
        "optimal": optimal,
    })
}

/// One console progress line for the exhaustive enumeration,
/// `<current> [###---] <total> (Current best: <cost>)`, meant to be redrawn
/// in place with a carriage return.
pub fn progress_line(p: Progress) -> String {
    let percentage = if p.total == 0 {
        100.0
    } else {
        p.evaluated as f64 / p.total as f64 * 100.0
    };
    let filled = (percentage / 2.0) as usize;
    let bar: String = "#".repeat(filled.min(50)) + &"-".repeat(50 - filled.min(50));
    match p.best {
        Some(best) => format!("{} [{}] {} (Current best: {:.4} u)", p.evaluated, bar, p.total, best),
        None => format!("{} [{}] {} (no separator yet)", p.evaluated, bar, p.total),
    }
}

/// Agreement check used to call the heuristic optimal: both costs rounded to
/// 9 decimal digits must match.
pub fn agree_to_9_decimals(a: f64, b: f64) -> bool {
    (a * 1e9).round() == (b * 1e9).round()
}
