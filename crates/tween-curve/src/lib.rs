//! TweenEngine curves: easing families, cubic splines, and arc-length sampling.

pub mod arclen;
pub mod ease;
pub mod kind;
pub mod polyline;
pub mod segment;
pub mod spline;

pub use arclen::evaluate_constant_speed;
pub use kind::{evaluate, ControlQuad, CurveKind};
pub use polyline::{polyline_length, walk};
pub use segment::CurveSegment;
