/// Perspective projection and screen mapping
use nalgebra::{Point2, Point3};

/// Minimum z used in the perspective divide. Any z at or below this value
/// is clamped up to it, keeping the projection finite for points at or
/// behind the camera. Such points distort instead of disappearing; there is
/// no true near-plane clipping.
pub const NEAR_EPSILON: f64 = 0.01;

/// Perspective-project a camera-space point onto the z = 1 plane.
pub fn project(p: &Point3<f64>) -> Point2<f64> {
    let z = p.z.max(NEAR_EPSILON);
    Point2::new(p.x / z, p.y / z)
}

/// Pixel dimensions of a target surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a projected point from [-1, 1] device coordinates to pixel
    /// coordinates. Pixel y grows downward, so the y axis is flipped.
    /// Points outside [-1, 1] map off-canvas and are not clamped.
    pub fn to_screen(&self, p: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            (p.x + 1.0) / 2.0 * self.width as f64,
            (1.0 - (p.y + 1.0) / 2.0) * self.height as f64,
        )
    }
}
