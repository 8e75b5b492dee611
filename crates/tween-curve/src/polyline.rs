//! Constant-speed traversal of a point sequence.

use tween_math::{inverse_lerp, Point3};

use crate::spline;

/// Total chord length of `points`.
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Walk the polyline at constant speed.
///
/// `t` is a fraction of the total length and is clamped to `[0, 1]`; the
/// position is found by inverse-lerp inside the segment whose cumulative
/// length window contains `t * total` (first match wins on shared
/// boundaries). Zero-length segments resolve to their start point, a
/// single-point run returns that point, and an empty run returns the
/// origin.
pub fn walk(points: &[Point3], t: f64) -> Point3 {
    if points.is_empty() {
        return Point3::ZERO;
    }

    let target = polyline_length(points) * t.clamp(0.0, 1.0);

    let mut travelled = 0.0;
    for i in 1..points.len() {
        let segment = points[i - 1].distance(points[i]);
        if travelled + segment >= target {
            let local = inverse_lerp(travelled, travelled + segment, target);
            return spline::lerp(points[i - 1], points[i], local);
        }
        travelled += segment;
    }

    // Rounding can leave `target` marginally past the final cumulative
    // length; stay at the last point.
    points[points.len() - 1]
}
