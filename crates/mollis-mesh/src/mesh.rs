//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! The mesh is consumed only while a soft body is being built; the
//! simulation never writes back into it.

use mollis_math::{Mat4, Vec3};
use mollis_types::{MollisError, MollisResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices (mesh-local space).
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// Triangle indices: each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the position of vertex `i` mapped through `transform`.
    #[inline]
    pub fn world_position(&self, i: usize, transform: &Mat4) -> Vec3 {
        transform.transform_point3(self.position_vec3(i))
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Iterates over all triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let idx = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        idx
    }

    /// Appends a triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - At least one vertex and one triangle
    /// - All SoA arrays have the same length
    /// - Index count divisible by 3, indices within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> MollisResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(MollisError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if n == 0 {
            return Err(MollisError::InvalidMesh("Mesh has no vertices".into()));
        }
        if self.indices.is_empty() {
            return Err(MollisError::InvalidMesh("Mesh has no triangles".into()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MollisError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(MollisError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for (t, [a, b, c]) in self.triangles().enumerate() {
            if a == b || b == c || a == c {
                return Err(MollisError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if let Some(i) = (0..n).find(|&i| !self.position_vec3(i).is_finite()) {
            return Err(MollisError::InvalidMesh(format!(
                "Vertex {} has a non-finite position",
                i
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position data `[x0, y0, z0, x1, ...]`.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> MollisResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MollisError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }

    /// Constructs a mesh from vertex positions and triangle triples.
    pub fn from_vertices(vertices: &[Vec3], triangles: &[[u32; 3]]) -> MollisResult<Self> {
        let mut mesh = Self::with_capacity(vertices.len(), triangles.len());
        for &v in vertices {
            mesh.push_vertex(v);
        }
        for &[a, b, c] in triangles {
            mesh.push_triangle(a, b, c);
        }
        mesh.validate()?;
        Ok(mesh)
    }
}
