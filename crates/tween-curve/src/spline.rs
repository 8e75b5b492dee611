//! Cubic spline segment formulas.
//!
//! Closed-form per-component evaluation; the cubic basis matrices reduce
//! to these polynomials, so no matrix type is involved.

use tween_math::Point3;

/// Linear interpolation between two points.
///
/// `t` outside `[0, 1]` extrapolates along the segment.
pub fn lerp(p1: Point3, p2: Point3, t: f64) -> Point3 {
    (1.0 - t) * p1 + t * p2
}

/// Cubic Bezier segment from `p1` to `p2`.
///
/// `t1` and `t2` are absolute tangent control points: the curve leaves
/// `p1` toward `t1` and arrives at `p2` from `t2`.
pub fn bezier(t1: Point3, p1: Point3, p2: Point3, t2: Point3, u: f64) -> Point3 {
    let v = 1.0 - u;
    v * v * v * p1 + 3.0 * v * v * u * t1 + 3.0 * v * u * u * t2 + u * u * u * p2
}

/// Catmull-Rom segment from `p1` to `p2`.
///
/// `p0` and `p3` are the neighbouring control points; they shape the
/// tangents at the two endpoints but are not interpolated themselves.
pub fn catmull_rom(p0: Point3, p1: Point3, p2: Point3, p3: Point3, u: f64) -> Point3 {
    0.5 * (2.0 * p1
        + (p2 - p0) * u
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u * u
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u * u * u)
}
