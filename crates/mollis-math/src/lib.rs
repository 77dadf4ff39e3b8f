//! # mollis-math
//!
//! Geometric primitives for the mollis simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Axis-aligned bounding boxes with octant subdivision
//! - Möller–Trumbore ray/triangle intersection

pub mod aabb;
pub mod ray;

pub use aabb::Aabb;
pub use ray::ray_triangle_intersection;

// Re-export glam types as the canonical math types for mollis.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
