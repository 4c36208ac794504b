use crate::math::V3;

pub mod marcher;
pub mod math;
pub mod render;
pub mod sdf;
pub mod shade;
pub mod strokes;

/// A signed distance field over all of 3-space: negative inside, positive
/// outside, zero at the surface.
pub trait Sdf {
    fn distance(&self, p: &V3) -> f64;
}
