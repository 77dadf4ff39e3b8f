//! Interior volume sampling and volumetric connection.
//!
//! The sampler lays a regular grid over the world-space bounds of the
//! mesh, keeps the grid points that pass the six-ray inside test, and
//! indexes them in an [`Octree`]. The connector then links each interior
//! point to its nearest interior neighbors.

use mollis_math::{Aabb, Mat4, Vec3};
use mollis_mesh::{InsideTester, TriangleMesh};
use mollis_spatial::{InsertOutcome, Octree};
use mollis_types::{MollisError, MollisResult};

use crate::point::PointMass;
use crate::spring::{Spring, SpringSet};

/// Upper bound on grid points visited by one sampling pass.
pub const MAX_GRID_POINTS: u64 = 1 << 26;

/// Result of sampling the interior of a mesh.
#[derive(Debug, Clone)]
pub struct InteriorSampling {
    /// Accepted interior positions, in grid order (x outer, z inner).
    pub positions: Vec<Vec3>,
    /// Index over the accepted positions, keyed `first_index + i`.
    pub octree: Octree,
    /// Indices that could not be placed in the octree.
    pub unindexed: Vec<u32>,
}

/// Regular-grid interior sampler.
#[derive(Debug, Clone, Copy)]
pub struct InteriorSampler {
    /// Grid spacing (meters).
    pub spacing: f32,
    /// Maximum octree depth.
    pub max_depth: u32,
}

impl InteriorSampler {
    pub fn new(spacing: f32, max_depth: u32) -> Self {
        Self { spacing, max_depth }
    }

    /// Samples the volume enclosed by `mesh` placed by `transform`.
    ///
    /// Accepted points are numbered from `first_index` in the order they
    /// are produced, matching where the caller appends them.
    pub fn sample(
        &self,
        mesh: &TriangleMesh,
        transform: Mat4,
        first_index: u32,
    ) -> MollisResult<InteriorSampling> {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(MollisError::InvalidConfig(format!(
                "Interior spacing must be positive, got {}",
                self.spacing
            )));
        }

        let world = (0..mesh.vertex_count()).map(|i| mesh.world_position(i, &transform));
        let bounds = Aabb::from_points(world)
            .ok_or_else(|| MollisError::InvalidMesh("Mesh has no vertices".into()))?;

        let steps = (bounds.size() / self.spacing).ceil();
        // Counted in f64 so tiny spacings fail the cap instead of overflowing.
        let total = (f64::from(steps.x) + 1.0)
            * (f64::from(steps.y) + 1.0)
            * (f64::from(steps.z) + 1.0);
        if !steps.is_finite() || !(total <= MAX_GRID_POINTS as f64) {
            return Err(MollisError::InvalidConfig(format!(
                "Interior grid of {total} points exceeds the limit of {MAX_GRID_POINTS}; increase the spacing"
            )));
        }
        let [nx, ny, nz] = [steps.x as u64, steps.y as u64, steps.z as u64];

        let tester = InsideTester::new(mesh, transform)?;
        let mut octree = Octree::new(bounds, self.max_depth);
        let mut positions = Vec::new();
        let mut unindexed = Vec::new();

        for ix in 0..=nx {
            for iy in 0..=ny {
                for iz in 0..=nz {
                    let p = bounds.min
                        + Vec3::new(ix as f32, iy as f32, iz as f32) * self.spacing;
                    if !tester.is_inside(p) {
                        continue;
                    }
                    let index = first_index + positions.len() as u32;
                    match octree.insert(p, index) {
                        InsertOutcome::Stored => {}
                        InsertOutcome::OutOfBounds | InsertOutcome::EdgeDropped => {
                            unindexed.push(index);
                        }
                    }
                    positions.push(p);
                }
            }
        }

        tracing::debug!(
            grid_points = total,
            accepted = positions.len(),
            unindexed = unindexed.len(),
            octree_nodes = octree.node_count(),
            "interior sampled"
        );

        Ok(InteriorSampling {
            positions,
            octree,
            unindexed,
        })
    }
}

/// Links interior points to nearby interior points.
///
/// For each interior point `i` in ascending order, candidates `j > i`
/// within `max_distance` are visited nearest first (ties by index) and
/// accepted until `neighbor_cap` new springs were added for `i`. Pairs
/// already present in `springs` do not count toward the cap.
///
/// Returns the number of springs added.
pub fn connect_interior(
    points: &[PointMass],
    is_internal: &[bool],
    octree: &Octree,
    springs: &mut SpringSet,
    max_distance: f32,
    stiffness: f32,
    neighbor_cap: usize,
) -> usize {
    if neighbor_cap == 0 {
        return 0;
    }

    let mut added = 0;
    let mut found = Vec::new();
    let mut candidates: Vec<(f32, u32)> = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if !is_internal.get(i).copied().unwrap_or(false) {
            continue;
        }
        let i = i as u32;

        found.clear();
        octree.query_into(point.position, max_distance, &mut found);

        candidates.clear();
        candidates.extend(found.iter().filter_map(|&j| {
            let other = points.get(j as usize)?;
            if j <= i || !is_internal.get(j as usize).copied().unwrap_or(false) {
                return None;
            }
            let dist = point.position.distance(other.position);
            (dist <= max_distance).then_some((dist, j))
        }));
        candidates.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)));

        let mut accepted = 0;
        for &(dist, j) in &candidates {
            if accepted >= neighbor_cap {
                break;
            }
            if let Some(spring) = Spring::new(i, j, dist, stiffness) {
                if springs.insert(spring) {
                    accepted += 1;
                }
            }
        }
        added += accepted;
    }

    added
}
