//! Curve kind selection and evaluation dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tween_core::TweenError;
use tween_math::Point3;

use crate::ease;
use crate::spline;

/// The interpolation formulas a host can select between.
///
/// Variants without a dedicated dispatch arm evaluate as plain linear
/// interpolation, so a host-facing selector can never pick a kind that
/// fails to evaluate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    #[default]
    Linear,
    Bezier,
    CatmullRom,
    EaseIn1,
    EaseIn2,
    EaseIn3,
    EaseOut1,
    EaseOut2,
    EaseOut3,
    EaseInOut1,
    EaseInOut2,
    EaseInOut3,
    EaseInCircular,
    EaseOutCircular,
    EaseInOutCircular,
    EaseInBounce1,
    EaseInBounce2,
    EaseInBounce3,
    EaseOutBounce1,
    EaseOutBounce2,
    EaseOutBounce3,
    EaseInOutBounce1,
    EaseInOutBounce2,
    EaseInOutBounce3,
}

impl CurveKind {
    /// Every selectable kind, in declaration order. Intended for host-side
    /// selectors (dropdowns, config validation).
    pub const ALL: [CurveKind; 24] = [
        CurveKind::Linear,
        CurveKind::Bezier,
        CurveKind::CatmullRom,
        CurveKind::EaseIn1,
        CurveKind::EaseIn2,
        CurveKind::EaseIn3,
        CurveKind::EaseOut1,
        CurveKind::EaseOut2,
        CurveKind::EaseOut3,
        CurveKind::EaseInOut1,
        CurveKind::EaseInOut2,
        CurveKind::EaseInOut3,
        CurveKind::EaseInCircular,
        CurveKind::EaseOutCircular,
        CurveKind::EaseInOutCircular,
        CurveKind::EaseInBounce1,
        CurveKind::EaseInBounce2,
        CurveKind::EaseInBounce3,
        CurveKind::EaseOutBounce1,
        CurveKind::EaseOutBounce2,
        CurveKind::EaseOutBounce3,
        CurveKind::EaseInOutBounce1,
        CurveKind::EaseInOutBounce2,
        CurveKind::EaseInOutBounce3,
    ];

    /// The snake_case name used by `Display`, `FromStr`, and serde.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Bezier => "bezier",
            CurveKind::CatmullRom => "catmull_rom",
            CurveKind::EaseIn1 => "ease_in1",
            CurveKind::EaseIn2 => "ease_in2",
            CurveKind::EaseIn3 => "ease_in3",
            CurveKind::EaseOut1 => "ease_out1",
            CurveKind::EaseOut2 => "ease_out2",
            CurveKind::EaseOut3 => "ease_out3",
            CurveKind::EaseInOut1 => "ease_in_out1",
            CurveKind::EaseInOut2 => "ease_in_out2",
            CurveKind::EaseInOut3 => "ease_in_out3",
            CurveKind::EaseInCircular => "ease_in_circular",
            CurveKind::EaseOutCircular => "ease_out_circular",
            CurveKind::EaseInOutCircular => "ease_in_out_circular",
            CurveKind::EaseInBounce1 => "ease_in_bounce1",
            CurveKind::EaseInBounce2 => "ease_in_bounce2",
            CurveKind::EaseInBounce3 => "ease_in_bounce3",
            CurveKind::EaseOutBounce1 => "ease_out_bounce1",
            CurveKind::EaseOutBounce2 => "ease_out_bounce2",
            CurveKind::EaseOutBounce3 => "ease_out_bounce3",
            CurveKind::EaseInOutBounce1 => "ease_in_out_bounce1",
            CurveKind::EaseInOutBounce2 => "ease_in_out_bounce2",
            CurveKind::EaseInOutBounce3 => "ease_in_out_bounce3",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TweenError::UnknownKind(s.to_string()))
    }
}

/// Four control points passed uniformly to every evaluator.
///
/// `Bezier` reads `(p0, p1, p2, p3)` as (start tangent, start, end, end
/// tangent) and `CatmullRom` as (previous, start, end, next); every other
/// kind interpolates between `p1` and `p2` only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlQuad {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl ControlQuad {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Two-point form: duplicates the endpoints into the tangent slots, so
    /// the quad works with every kind.
    pub fn endpoints(p1: Point3, p2: Point3) -> Self {
        Self {
            p0: p1,
            p1,
            p2,
            p3: p2,
        }
    }
}

/// Evaluate `kind` over `quad` at parameter `t`.
///
/// `t` is expected in `[0, 1]` but is not clamped: polynomial kinds
/// extrapolate outside that range, and the circular kinds return NaN
/// components where their square-root argument goes negative.
pub fn evaluate(kind: CurveKind, quad: &ControlQuad, t: f64) -> Point3 {
    let ControlQuad { p0, p1, p2, p3 } = *quad;
    match kind {
        CurveKind::Bezier => spline::bezier(p0, p1, p2, p3, t),
        CurveKind::CatmullRom => spline::catmull_rom(p0, p1, p2, p3, t),
        CurveKind::EaseIn1 => spline::lerp(p1, p2, ease::ease_in1(t)),
        CurveKind::EaseIn2 => spline::lerp(p1, p2, ease::ease_in2(t)),
        CurveKind::EaseIn3 => spline::lerp(p1, p2, ease::ease_in3(t)),
        CurveKind::EaseOut1 => spline::lerp(p1, p2, ease::ease_out1(t)),
        CurveKind::EaseOut2 => spline::lerp(p1, p2, ease::ease_out2(t)),
        CurveKind::EaseOut3 => spline::lerp(p1, p2, ease::ease_out3(t)),
        CurveKind::EaseInOut1 => spline::lerp(p1, p2, ease::ease_in_out1(t)),
        CurveKind::EaseInOut2 => spline::lerp(p1, p2, ease::ease_in_out2(t)),
        CurveKind::EaseInOut3 => spline::lerp(p1, p2, ease::ease_in_out3(t)),
        CurveKind::EaseInCircular => spline::lerp(p1, p2, ease::ease_in_circular(t)),
        CurveKind::EaseOutCircular => spline::lerp(p1, p2, ease::ease_out_circular(t)),
        CurveKind::EaseInOutCircular => spline::lerp(p1, p2, ease::ease_in_out_circular(t)),
        CurveKind::EaseInBounce1 => spline::lerp(p1, p2, ease::ease_in_bounce1(t)),
        CurveKind::EaseInBounce2 => spline::lerp(p1, p2, ease::ease_in_bounce2(t)),
        CurveKind::EaseInBounce3 => spline::lerp(p1, p2, ease::ease_in_bounce3(t)),
        CurveKind::EaseOutBounce1 => spline::lerp(p1, p2, ease::ease_out_bounce1(t)),
        CurveKind::EaseOutBounce2 => spline::lerp(p1, p2, ease::ease_out_bounce2(t)),
        CurveKind::EaseOutBounce3 => spline::lerp(p1, p2, ease::ease_out_bounce3(t)),
        CurveKind::EaseInOutBounce1 => spline::lerp(p1, p2, ease::ease_in_out_bounce1(t)),
        CurveKind::EaseInOutBounce2 => spline::lerp(p1, p2, ease::ease_in_out_bounce2(t)),
        CurveKind::EaseInOutBounce3 => spline::lerp(p1, p2, ease::ease_in_out_bounce3(t)),
        // Linear, and any kind added without a formula of its own.
        _ => spline::lerp(p1, p2, t),
    }
}
