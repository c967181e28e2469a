//! Exact geometric predicates.
//!
//! All tests here are sign/equality based with no tolerances. The refinement
//! engine and the exact validators rank candidates by comparing these values,
//! so the predicates must stay mutually consistent; keep any change to one of
//! them in sync with `Polygon::contains` and `Polygon::on_boundary`.

use nalgebra::Vector2;

/// Cross product of (a−o) and (b−o). Positive when o→a→b turns counterclockwise.
#[inline]
pub fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let u = a - o;
    let v = b - o;
    u.x * v.y - u.y * v.x
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Unsigned area of the triangle `a`, `b`, `p`.
#[inline]
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    cross(a, b, p).abs() / 2.0
}

/// Collinear `p` lies strictly inside segment `ab` (endpoints excluded).
///
/// Degenerate axes (horizontal/vertical segments) fall back to exact equality
/// on that axis, so axis-aligned segments are handled without a range check.
fn strictly_on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    let on_x = if a.x != b.x {
        a.x.min(b.x) < p.x && p.x < a.x.max(b.x)
    } else {
        p.x == a.x
    };
    let on_y = if a.y != b.y {
        a.y.min(b.y) < p.y && p.y < a.y.max(b.y)
    } else {
        p.y == a.y
    };
    on_x && on_y
}

/// Collinear `p` lies on the closed segment `ab` (endpoints included).
#[inline]
pub fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    cross(a, b, p) == 0.0
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}

/// Orientation-based segment intersection for `a1a2` vs `b1b2`.
///
/// Proper crossings are detected by opposite cross-product signs on both
/// segments. A zero cross product falls through to a strict-interior
/// collinearity check, so two segments that merely share an endpoint are not
/// reported; adjacent polygon edges legitimately share vertices.
pub fn segments_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && strictly_on_segment(b1, b2, a1))
        || (d2 == 0.0 && strictly_on_segment(b1, b2, a2))
        || (d3 == 0.0 && strictly_on_segment(a1, a2, b1))
        || (d4 == 0.0 && strictly_on_segment(a1, a2, b2))
}
