//! Ray/triangle intersection (Möller–Trumbore).

use glam::Vec3;
use mollis_types::constants::RAY_EPSILON;

/// Intersects the ray `origin + t * direction` with triangle `(v0, v1, v2)`.
///
/// Returns the hit distance `t` (in units of `direction`) for hits strictly
/// in front of the origin. Rays nearly parallel to the triangle plane are
/// rejected. Barycentric bounds are inclusive, so a ray through a shared
/// edge can register on both adjacent triangles.
pub fn ray_triangle_intersection(
    origin: Vec3,
    direction: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = direction.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < RAY_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > RAY_EPSILON).then_some(t)
}
