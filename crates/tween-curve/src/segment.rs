//! Curve-object wrapper over the free evaluation functions.

use serde::{Deserialize, Serialize};
use tween_math::{Point3, Vector3};

use crate::arclen::evaluate_constant_speed;
use crate::kind::{evaluate, ControlQuad, CurveKind};
use crate::polyline::polyline_length;

/// A curve kind paired with its control points.
///
/// Convenience for hosts that keep a segment around between simulation
/// steps; every method defers to the free functions and no derived state
/// is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub kind: CurveKind,
    pub quad: ControlQuad,
}

impl CurveSegment {
    pub fn new(kind: CurveKind, quad: ControlQuad) -> Self {
        Self { kind, quad }
    }

    /// Two-point segment; the tangent slots duplicate the endpoints.
    pub fn between(kind: CurveKind, p1: Point3, p2: Point3) -> Self {
        Self {
            kind,
            quad: ControlQuad::endpoints(p1, p2),
        }
    }

    /// Position at raw curve parameter `t`.
    pub fn point_at(&self, t: f64) -> Point3 {
        evaluate(self.kind, &self.quad, t)
    }

    /// Position at a fraction `t` of total arc length.
    pub fn point_at_distance(&self, t: f64) -> Point3 {
        evaluate_constant_speed(self.kind, &self.quad, t)
    }

    /// Unit tangent at `t` by central difference.
    ///
    /// Returns the zero vector for a degenerate (stationary) curve. The
    /// difference samples `t ± 1e-3`, so near the domain ends the circular
    /// kinds inherit their out-of-range NaN.
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        const H: f64 = 1e-3;
        let delta = self.point_at(t + H) - self.point_at(t - H);
        if delta.length_squared() == 0.0 {
            Vector3::ZERO
        } else {
            delta.normalize()
        }
    }

    /// Approximate arc length as the chord-length sum of `samples`
    /// uniform segments.
    pub fn arc_length(&self, samples: usize) -> f64 {
        polyline_length(&self.to_polyline(samples))
    }

    /// Sample the curve into `segments + 1` uniformly parameterized
    /// points.
    pub fn to_polyline(&self, segments: usize) -> Vec<Point3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}
