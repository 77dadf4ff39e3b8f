//! Inside/outside classification by six-axis ray parity.
//!
//! A query point casts one ray along each of ±X, ±Y, ±Z. A ray votes
//! "inside" when it crosses the surface an odd number of times, and the
//! point is inside when more than half of the six rays agree. The vote
//! tolerates the odd ray that grazes an edge or vertex.

use mollis_math::{ray_triangle_intersection, Mat4, Vec3};
use mollis_types::{MollisError, MollisResult};

use crate::mesh::TriangleMesh;

/// The six world-space axis directions cast from every query point.
const AXIS_DIRECTIONS: [Vec3; 6] = [
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::NEG_X,
    Vec3::X,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Parity classifier over a mesh placed in the world by a transform.
///
/// Triangles stay in mesh-local space; query points and ray directions
/// are mapped into that space with the inverse transform.
#[derive(Debug, Clone)]
pub struct InsideTester {
    triangles: Vec<[Vec3; 3]>,
    world_to_local: Mat4,
}

impl InsideTester {
    /// Prepares a classifier for `mesh` placed by `transform`.
    ///
    /// Fails if the transform is not invertible.
    pub fn new(mesh: &TriangleMesh, transform: Mat4) -> MollisResult<Self> {
        let det = transform.determinant();
        let world_to_local = transform.inverse();
        if det == 0.0 || !det.is_finite() || !world_to_local.is_finite() {
            return Err(MollisError::InvalidConfig(format!(
                "World transform is not invertible (determinant {det})"
            )));
        }

        let triangles = mesh
            .triangles()
            .map(|[a, b, c]| {
                [
                    mesh.position_vec3(a as usize),
                    mesh.position_vec3(b as usize),
                    mesh.position_vec3(c as usize),
                ]
            })
            .collect();

        Ok(Self {
            triangles,
            world_to_local,
        })
    }

    /// Number of surface crossings along the ray `origin + t * direction`
    /// (mesh-local space, `t > 0`).
    pub fn crossing_count(&self, origin: Vec3, direction: Vec3) -> usize {
        self.triangles
            .iter()
            .filter(|[v0, v1, v2]| {
                ray_triangle_intersection(origin, direction, *v0, *v1, *v2).is_some()
            })
            .count()
    }

    /// Number of axis rays (0..=6) from world point `p` with odd parity.
    pub fn inside_votes(&self, p: Vec3) -> usize {
        let local = self.world_to_local.transform_point3(p);
        AXIS_DIRECTIONS
            .iter()
            .filter(|&&dir| {
                let local_dir = self.world_to_local.transform_vector3(dir);
                self.crossing_count(local, local_dir) % 2 == 1
            })
            .count()
    }

    /// Returns true if world point `p` is classified inside the mesh.
    pub fn is_inside(&self, p: Vec3) -> bool {
        self.inside_votes(p) > AXIS_DIRECTIONS.len() / 2
    }
}
