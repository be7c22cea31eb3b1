/// Pure point transforms for the spin animation
use nalgebra::Point3;

/// Rotate a point around the vertical (Y) axis by `angle` radians.
///
/// The camera stays fixed; this is what makes the model appear to spin in
/// place.
pub fn rotate_xz(p: &Point3<f64>, angle: f64) -> Point3<f64> {
    let (s, c) = angle.sin_cos();
    Point3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}

/// Push a point along the view axis by adding `dz` to its z coordinate.
///
/// Applied after rotation, so the model spins in place at a constant
/// distance in front of the camera instead of orbiting it.
pub fn translate_z(p: &Point3<f64>, dz: f64) -> Point3<f64> {
    Point3::new(p.x, p.y, p.z + dz)
}
