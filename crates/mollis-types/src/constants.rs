//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). 1/50th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 50.0;

/// Default multiplicative velocity damping applied once per step.
pub const DEFAULT_DAMPING: f32 = 0.98;

/// Default base spring stiffness `k`.
pub const DEFAULT_STIFFNESS: f32 = 500.0;

/// Default mass of every generated point.
pub const DEFAULT_POINT_MASS: f32 = 1.0;

/// Default spacing of the interior sampling grid (meters).
pub const DEFAULT_INTERIOR_SPACING: f32 = 0.1;

/// Default maximum octree depth for the interior index.
pub const DEFAULT_MAX_OCTREE_DEPTH: u32 = 5;

/// Maximum number of volumetric springs accepted per interior point.
pub const DEFAULT_NEIGHBOR_CAP: usize = 6;

/// Interior springs connect points up to `spacing * this` apart.
pub const INTERIOR_CONNECT_FACTOR: f32 = 1.5;

/// Springs whose endpoints are closer than this (squared) exert no force.
pub const MIN_SPRING_LENGTH_SQ: f32 = 1.0e-8;

/// Epsilon for the ray/triangle determinant and hit distance.
pub const RAY_EPSILON: f32 = 1.0e-7;

/// Octree nodes whose box diagonal is below this are never subdivided.
pub const MIN_OCTREE_DIAGONAL: f32 = 1.0e-3;
