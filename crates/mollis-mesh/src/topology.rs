//! Mesh topology queries.
//!
//! Builds adjacency data structures from the triangle index buffer.
//! Edges are keyed by their canonical `(min, max)` vertex pair in an
//! ordered map, so every derived list comes out in the same order for
//! the same mesh regardless of hashing.

use std::collections::BTreeMap;

use crate::mesh::TriangleMesh;

/// Precomputed topology information for a triangle mesh.
///
/// Built once per soft-body construction. Provides the edge adjacency
/// used by torsional (dihedral) spring generation.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `[v_min, v_max]` pairs, in ascending order.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the triangles that contain it.
    /// Boundary edges have exactly 1, manifold interior edges exactly 2.
    pub edge_triangles: Vec<Vec<u32>>,

    /// Edges shared by exactly two triangles.
    pub interior_edges: Vec<InteriorEdge>,
}

/// An interior (two-triangle) edge with its opposite vertices.
///
/// ```text
///        wa
///       / \
///      /   \
///    v0 ─── v1
///      \   /
///       \ /
///        wb
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorEdge {
    /// Smaller vertex index of the shared edge.
    pub v0: u32,
    /// Larger vertex index of the shared edge.
    pub v1: u32,
    /// The vertex of triangle A not on the edge.
    pub wing_a: u32,
    /// The vertex of triangle B not on the edge.
    pub wing_b: u32,
    /// Index of adjacent triangle A.
    pub tri_a: u32,
    /// Index of adjacent triangle B.
    pub tri_b: u32,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let mut edge_map: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();

        for (t, [a, b, c]) in mesh.triangles().enumerate() {
            let t = t as u32;
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t);
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_triangles = Vec::with_capacity(edge_map.len());
        let mut interior_edges = Vec::new();

        for ((v0, v1), tris) in edge_map {
            if let [tri_a, tri_b] = tris[..] {
                interior_edges.push(InteriorEdge {
                    v0,
                    v1,
                    wing_a: find_wing_vertex(mesh, tri_a, v0, v1),
                    wing_b: find_wing_vertex(mesh, tri_b, v0, v1),
                    tri_a,
                    tri_b,
                });
            }
            edges.push([v0, v1]);
            edge_triangles.push(tris);
        }

        Self {
            edges,
            edge_triangles,
            interior_edges,
        }
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns the number of edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() > 2)
            .count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}

/// Find the vertex in triangle `tri` that is not v0 or v1 (the "wing" vertex).
fn find_wing_vertex(mesh: &TriangleMesh, tri: u32, v0: u32, v1: u32) -> u32 {
    let [a, b, c] = mesh.triangle(tri as usize);
    if a != v0 && a != v1 {
        a
    } else if b != v0 && b != v1 {
        b
    } else {
        c
    }
}
