pub mod scalar;

pub use glam::DVec3;
pub use scalar::{inverse_lerp, lerp};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
