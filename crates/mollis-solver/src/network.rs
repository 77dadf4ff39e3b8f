//! Surface spring network generation.
//!
//! Three passes run over the sampled surface vertices, always in this order:
//!
//! 1. **Structural**: every triangle contributes its edges as springs.
//! 2. **Angular**: each point's structural neighbors are linked pairwise,
//!    resisting in-surface shear and fold.
//! 3. **Torsional**: for every edge shared by exactly two triangles, the
//!    two opposite ("wing") vertices are linked, resisting bending about
//!    the edge.
//!
//! All passes insert into one [`SpringSet`], so a pair produced by an
//! earlier pass is never duplicated by a later one. Rest lengths are
//! measured from the point positions at creation time.

use std::collections::BTreeSet;

use mollis_mesh::{Topology, TriangleMesh};

use crate::point::PointMass;
use crate::spring::{Spring, SpringKind, SpringSet};

/// Mapping from mesh vertices to point indices after stride sampling.
///
/// Vertex `v` is kept iff `v % stride == 0`; kept vertices are numbered
/// consecutively in vertex order.
#[derive(Debug, Clone)]
pub struct VertexSampling {
    remap: Vec<Option<u32>>,
    kept: Vec<u32>,
}

impl VertexSampling {
    /// Samples `vertex_count` vertices with the given stride (clamped to ≥ 1).
    pub fn new(vertex_count: usize, stride: usize) -> Self {
        let stride = stride.max(1);
        let mut remap = vec![None; vertex_count];
        let mut kept = Vec::with_capacity(vertex_count / stride + 1);
        for v in (0..vertex_count).step_by(stride) {
            remap[v] = Some(kept.len() as u32);
            kept.push(v as u32);
        }
        Self { remap, kept }
    }

    /// Point index of mesh vertex `v`, or `None` if it was dropped.
    #[inline]
    pub fn point_of(&self, v: u32) -> Option<u32> {
        self.remap.get(v as usize).copied().flatten()
    }

    /// Kept mesh vertices, in point order.
    #[inline]
    pub fn kept_vertices(&self) -> &[u32] {
        &self.kept
    }

    /// Number of kept vertices.
    #[inline]
    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }

    /// Number of dropped vertices.
    #[inline]
    pub fn dropped_count(&self) -> usize {
        self.remap.len() - self.kept.len()
    }
}

/// Spring between points `a` and `b` with rest length from current positions.
fn spring_between(points: &[PointMass], a: u32, b: u32, stiffness: f32) -> Option<Spring> {
    let rest = points[a as usize]
        .position
        .distance(points[b as usize].position);
    Spring::new(a, b, rest, stiffness)
}

/// Outcome of the structural pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralPass {
    /// Springs added.
    pub added: usize,
    /// Candidate pairs skipped because an endpoint was not sampled.
    pub skipped: usize,
}

/// Adds a structural spring for every triangle edge whose endpoints both
/// survived sampling.
pub fn add_structural_springs(
    mesh: &TriangleMesh,
    sampling: &VertexSampling,
    points: &[PointMass],
    springs: &mut SpringSet,
    k: f32,
) -> StructuralPass {
    let stiffness = SpringKind::Structural.stiffness(k);
    let mut pass = StructuralPass::default();

    for [a, b, c] in mesh.triangles() {
        // Five candidates per triangle; repeats are absorbed by dedup.
        for (u, v) in [(a, b), (b, c), (c, a), (a, c), (a, b)] {
            let (Some(pu), Some(pv)) = (sampling.point_of(u), sampling.point_of(v)) else {
                pass.skipped += 1;
                continue;
            };
            if let Some(spring) = spring_between(points, pu, pv, stiffness) {
                if springs.insert(spring) {
                    pass.added += 1;
                }
            }
        }
    }

    pass
}

/// Adds an angular spring between every pair of structural neighbors of
/// every point.
///
/// Neighborhoods are snapshotted from `springs` before any angular spring
/// is inserted, and visited in ascending index order.
pub fn add_angular_springs(points: &[PointMass], springs: &mut SpringSet, k: f32) -> usize {
    let stiffness = SpringKind::Angular.stiffness(k);

    let mut neighbors: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); points.len()];
    for s in springs.iter() {
        neighbors[s.a() as usize].insert(s.b());
        neighbors[s.b() as usize].insert(s.a());
    }

    let mut added = 0;
    for ring in &neighbors {
        let ring: Vec<u32> = ring.iter().copied().collect();
        for (i, &p) in ring.iter().enumerate() {
            for &q in &ring[i + 1..] {
                if let Some(spring) = spring_between(points, p, q, stiffness) {
                    if springs.insert(spring) {
                        added += 1;
                    }
                }
            }
        }
    }
    added
}

/// Adds a torsional spring between the wing vertices of every edge shared
/// by exactly two triangles.
pub fn add_torsional_springs(
    topology: &Topology,
    sampling: &VertexSampling,
    points: &[PointMass],
    springs: &mut SpringSet,
    k: f32,
) -> usize {
    let stiffness = SpringKind::Torsional.stiffness(k);
    let mut added = 0;

    for edge in &topology.interior_edges {
        let (Some(wa), Some(wb)) = (sampling.point_of(edge.wing_a), sampling.point_of(edge.wing_b))
        else {
            continue;
        };
        if let Some(spring) = spring_between(points, wa, wb, stiffness) {
            if springs.insert(spring) {
                added += 1;
            }
        }
    }
    added
}
