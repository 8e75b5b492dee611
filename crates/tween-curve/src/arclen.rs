//! Arc-length reparameterization.
//!
//! [`evaluate`](crate::evaluate) advances along a curve at constant
//! *parameter* speed, which bunches points wherever the formula
//! accelerates. The reparameterized entry point re-samples the curve by
//! cumulative chord length so that equal steps of `t` travel equal
//! distances along the curve instead.

use tween_math::{inverse_lerp, Point3};

use crate::kind::{evaluate, ControlQuad, CurveKind};

/// Number of uniform parameter samples in the per-call table.
const SAMPLE_COUNT: usize = 11;

/// Uniform samples of a curve with cumulative chord lengths.
///
/// Built fresh on every call and discarded. A cache would go stale if the
/// caller mutates control points between calls, which nothing guards
/// against.
struct SampleTable {
    points: [Point3; SAMPLE_COUNT],
    cumulative: [f64; SAMPLE_COUNT],
}

impl SampleTable {
    fn build(kind: CurveKind, quad: &ControlQuad) -> Self {
        let step = 1.0 / (SAMPLE_COUNT - 1) as f64;
        let mut points = [Point3::ZERO; SAMPLE_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            *point = evaluate(kind, quad, step * i as f64);
        }

        let mut cumulative = [0.0; SAMPLE_COUNT];
        for i in 1..SAMPLE_COUNT {
            cumulative[i] = cumulative[i - 1] + points[i - 1].distance(points[i]);
        }

        Self { points, cumulative }
    }

    fn total_length(&self) -> f64 {
        self.cumulative[SAMPLE_COUNT - 1]
    }

    /// Index of the first sample whose cumulative length reaches `target`,
    /// always within `[1, SAMPLE_COUNT - 1]`.
    fn segment_end(&self, target: f64) -> usize {
        for i in 1..SAMPLE_COUNT {
            if self.cumulative[i] >= target {
                return i;
            }
        }
        // Rounding in the prefix sums can leave `target` marginally past
        // the final cumulative length; land on the last segment.
        SAMPLE_COUNT - 1
    }
}

/// Evaluate `kind` over `quad` at a fraction `t` of its total arc length.
///
/// Where [`evaluate`] treats `t` as the raw curve parameter, this treats
/// it as distance travelled: `t = 0.25` is a quarter of the way along the
/// curve however unevenly the formula paces itself. The approximation
/// samples the curve eleven times, locates the chord segment containing
/// the requested distance, and re-evaluates the same kind locally within
/// that segment.
///
/// The local control quad takes its tangent slots from the neighbouring
/// samples, wrapping to the far end of the table at the boundaries so the
/// cubic kinds always receive four points. The wrap reuses a distant
/// sample, so the tangent at the curve boundary is discontinuous; that
/// trade-off is part of the contract.
pub fn evaluate_constant_speed(kind: CurveKind, quad: &ControlQuad, t: f64) -> Point3 {
    let table = SampleTable::build(kind, quad);
    let target = t * table.total_length();

    let end = table.segment_end(target);
    debug_assert!((1..SAMPLE_COUNT).contains(&end));
    let start = end - 1;
    let local = inverse_lerp(table.cumulative[start], table.cumulative[end], target);

    let p1 = table.points[start];
    let p2 = table.points[end];
    let p0 = if start == 0 {
        table.points[SAMPLE_COUNT - 1]
    } else {
        table.points[start - 1]
    };
    let p3 = if end + 1 < SAMPLE_COUNT {
        table.points[end + 1]
    } else {
        table.points[0]
    };

    evaluate(kind, &ControlQuad::new(p0, p1, p2, p3), local)
}
