//! Soft body assembly.
//!
//! [`SoftBodyBuilder`] turns a triangle mesh and a world transform into a
//! [`SoftBody`]: one point per sampled vertex, the surface spring network,
//! and optionally a volumetric core of interior points. Construction is
//! deterministic: the same mesh, transform and config always produce the
//! same points and springs in the same order.

use mollis_math::{Mat4, Vec3};
use mollis_mesh::{Topology, TriangleMesh};
use mollis_spatial::Octree;
use mollis_telemetry::{EventBus, EventKind, SimulationEvent};
use mollis_types::{MollisError, MollisResult, PointId};
use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::interior::{connect_interior, InteriorSampler};
use crate::network::{
    add_angular_springs, add_structural_springs, add_torsional_springs, VertexSampling,
};
use crate::point::PointMass;
use crate::spring::{Spring, SpringKind, SpringSet};

/// Counts collected while building a soft body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Surface points created from sampled vertices.
    pub surface_points: usize,
    /// Mesh vertices dropped by the sampling stride.
    pub dropped_vertices: usize,
    /// Structural candidates skipped because an endpoint was dropped.
    pub skipped_candidates: usize,
    pub structural_springs: usize,
    pub angular_springs: usize,
    pub torsional_springs: usize,
    /// Interior points accepted by the inside test.
    pub interior_points: usize,
    pub volumetric_springs: usize,
    /// Interior points that could not be placed in the octree.
    pub unindexed_points: usize,
}

impl BuildReport {
    /// Springs of all categories.
    pub fn total_springs(&self) -> usize {
        self.structural_springs
            + self.angular_springs
            + self.torsional_springs
            + self.volumetric_springs
    }

    /// Surface and interior points.
    pub fn total_points(&self) -> usize {
        self.surface_points + self.interior_points
    }
}

/// A mass-spring soft body.
///
/// Points `0..surface_count` come from mesh vertices; interior points, if
/// any, follow them. `is_internal` is parallel to `points`.
#[derive(Debug, Clone, Default)]
pub struct SoftBody {
    points: Vec<PointMass>,
    is_internal: Vec<bool>,
    springs: SpringSet,
    interior_index: Option<Octree>,
    unindexed: Vec<u32>,
}

impl SoftBody {
    /// Builds a soft body with `config`. See [`SoftBodyBuilder::build`].
    pub fn from_mesh(
        mesh: &TriangleMesh,
        transform: Mat4,
        config: &BuildConfig,
    ) -> MollisResult<Self> {
        SoftBodyBuilder::new(config.clone())
            .build(mesh, transform)
            .map(|(body, _)| body)
    }

    // ─── Queries ───

    /// All points.
    #[inline]
    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    /// Mutable access to all points (positions and velocities may be edited).
    #[inline]
    pub fn points_mut(&mut self) -> &mut [PointMass] {
        &mut self.points
    }

    /// Point by id.
    pub fn point(&self, id: PointId) -> Option<&PointMass> {
        self.points.get(id.index())
    }

    /// All springs in insertion order.
    #[inline]
    pub fn springs(&self) -> &[Spring] {
        self.springs.as_slice()
    }

    /// Returns true if a spring joins `a` and `b`.
    pub fn has_spring(&self, a: u32, b: u32) -> bool {
        self.springs.contains(a, b)
    }

    /// Per-point interior flags.
    #[inline]
    pub fn is_internal(&self) -> &[bool] {
        &self.is_internal
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Number of interior points.
    pub fn interior_count(&self) -> usize {
        self.is_internal.iter().filter(|&&b| b).count()
    }

    /// Octree over the interior points, present when the interior was filled.
    pub fn interior_index(&self) -> Option<&Octree> {
        self.interior_index.as_ref()
    }

    /// Current positions.
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Current positions as interleaved `[x0, y0, z0, x1, ...]`.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| p.position.to_array())
            .collect()
    }

    /// Indices of points within `radius` of `position`, ascending.
    ///
    /// Indexed interior points are looked up through the octree, which
    /// holds build-time positions. Every other point is scanned directly
    /// at its current position.
    pub fn find_nearby_points(&self, position: Vec3, radius: f32) -> Vec<u32> {
        let mut found = Vec::new();
        let indexed = |i: usize| {
            self.interior_index.is_some()
                && self.is_internal[i]
                && self.unindexed.binary_search(&(i as u32)).is_err()
        };
        if let Some(octree) = &self.interior_index {
            octree.query_into(position, radius, &mut found);
        }
        found.extend(
            self.points
                .iter()
                .enumerate()
                .filter(|&(i, p)| !indexed(i) && p.position.distance(position) <= radius)
                .map(|(i, _)| i as u32),
        );
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Kinetic energy of all points.
    pub fn kinetic_energy(&self) -> f64 {
        self.points.iter().map(PointMass::kinetic_energy).sum()
    }

    /// Energy stored in all springs.
    pub fn elastic_energy(&self) -> f64 {
        self.springs
            .iter()
            .map(|s| {
                s.potential_energy(
                    self.points[s.a() as usize].position,
                    self.points[s.b() as usize].position,
                )
            })
            .sum()
    }

    // ─── Editing ───

    /// Appends a surface point and returns its id.
    pub fn add_point(&mut self, position: Vec3, mass: f32) -> PointId {
        let id = PointId(self.points.len() as u32);
        self.points.push(PointMass::new(position, mass));
        self.is_internal.push(false);
        id
    }

    /// Adds a spring between `a` and `b` with rest length equal to their
    /// current distance.
    ///
    /// Returns `Ok(false)` if the pair is already connected.
    pub fn add_spring(&mut self, a: u32, b: u32, stiffness: f32) -> MollisResult<bool> {
        let invalid = |reason: String| MollisError::InvalidSpring { a, b, reason };
        let n = self.points.len() as u32;
        if a >= n || b >= n {
            return Err(invalid(format!("endpoint out of range ({n} points)")));
        }
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(invalid(format!("stiffness must be positive, got {stiffness}")));
        }
        let rest = self.points[a as usize]
            .position
            .distance(self.points[b as usize].position);
        let spring =
            Spring::new(a, b, rest, stiffness).ok_or_else(|| invalid("self-spring".into()))?;
        Ok(self.springs.insert(spring))
    }

    // ─── Step phases ───

    /// Adds `m * g` to every point's force buffer.
    pub fn apply_gravity(&mut self, gravity: Vec3) {
        for p in &mut self.points {
            if !p.is_fixed() {
                let m = p.mass();
                p.add_force(gravity * m);
            }
        }
    }

    /// Adds every spring's force to both endpoints.
    pub fn accumulate_spring_forces(&mut self) {
        for spring in self.springs.iter() {
            let (a, b) = (spring.a() as usize, spring.b() as usize);
            if let Some(f) = spring.force_on_a(self.points[a].position, self.points[b].position) {
                self.points[a].add_force(f);
                self.points[b].add_force(-f);
            }
        }
    }

    /// Integrates every point and clears the force buffers.
    pub fn integrate(&mut self, dt: f32) {
        for p in &mut self.points {
            p.integrate(dt);
        }
    }

    /// Multiplies every velocity by `factor`.
    pub fn damp_velocities(&mut self, factor: f32) {
        for p in &mut self.points {
            p.velocity *= factor;
        }
    }

    /// Resets every point whose position is non-finite and returns their ids.
    pub fn recover_non_finite(&mut self) -> Vec<PointId> {
        let mut recovered = Vec::new();
        for (i, p) in self.points.iter_mut().enumerate() {
            if !p.has_finite_position() {
                p.reset();
                recovered.push(PointId(i as u32));
            }
        }
        recovered
    }
}

/// Builds soft bodies from meshes.
#[derive(Debug, Clone, Default)]
pub struct SoftBodyBuilder {
    config: BuildConfig,
}

impl SoftBodyBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds a soft body from `mesh` placed in the world by `transform`.
    ///
    /// # Errors
    ///
    /// - [`MollisError::InvalidConfig`] if the config is invalid, the
    ///   transform is non-finite, or interior filling needs an inverse
    ///   the transform does not have.
    /// - [`MollisError::InvalidMesh`] if the mesh fails validation.
    pub fn build(
        &self,
        mesh: &TriangleMesh,
        transform: Mat4,
    ) -> MollisResult<(SoftBody, BuildReport)> {
        self.build_inner(mesh, transform, None)
    }

    /// Like [`SoftBodyBuilder::build`], reporting edge drops and completion
    /// on `bus` at timestep 0.
    pub fn build_observed(
        &self,
        mesh: &TriangleMesh,
        transform: Mat4,
        bus: &mut EventBus,
    ) -> MollisResult<(SoftBody, BuildReport)> {
        self.build_inner(mesh, transform, Some(bus))
    }

    fn build_inner(
        &self,
        mesh: &TriangleMesh,
        transform: Mat4,
        mut bus: Option<&mut EventBus>,
    ) -> MollisResult<(SoftBody, BuildReport)> {
        let config = &self.config;
        config.validate()?;
        mesh.validate()?;
        if !transform.is_finite() {
            return Err(MollisError::InvalidConfig(
                "World transform must be finite".into(),
            ));
        }

        let k = config.stiffness;
        let mut report = BuildReport::default();

        // ─── Surface points ───
        let sampling = VertexSampling::new(mesh.vertex_count(), config.sampling_stride);
        let mut points: Vec<PointMass> = sampling
            .kept_vertices()
            .iter()
            .map(|&v| {
                let p = mesh.world_position(v as usize, &transform);
                PointMass::new(p, config.point_mass)
            })
            .collect();
        let mut is_internal = vec![false; points.len()];
        report.surface_points = points.len();
        report.dropped_vertices = sampling.dropped_count();

        // ─── Surface springs ───
        let mut springs = SpringSet::new();
        let structural = add_structural_springs(mesh, &sampling, &points, &mut springs, k);
        report.structural_springs = structural.added;
        report.skipped_candidates = structural.skipped;
        report.angular_springs = add_angular_springs(&points, &mut springs, k);

        let topology = Topology::build(mesh);
        report.torsional_springs =
            add_torsional_springs(&topology, &sampling, &points, &mut springs, k);

        // ─── Interior ───
        let mut interior_index = None;
        let mut unindexed = Vec::new();
        if config.fill_interior {
            let sampler = InteriorSampler::new(config.interior_spacing, config.max_octree_depth);
            let interior = sampler.sample(mesh, transform, points.len() as u32)?;

            points.extend(
                interior
                    .positions
                    .iter()
                    .map(|&p| PointMass::new(p, config.point_mass)),
            );
            is_internal.resize(points.len(), true);
            report.interior_points = interior.positions.len();
            report.unindexed_points = interior.unindexed.len();

            if let Some(bus) = bus.as_deref_mut() {
                for &point in &interior.unindexed {
                    bus.emit(SimulationEvent::new(0, EventKind::IndexEdgeDrop { point }));
                }
            }

            report.volumetric_springs = connect_interior(
                &points,
                &is_internal,
                &interior.octree,
                &mut springs,
                config.max_interior_connect_distance,
                SpringKind::Volumetric.stiffness(k),
                config.neighbor_cap,
            );
            interior_index = Some(interior.octree);
            unindexed = interior.unindexed;
        }

        if report.skipped_candidates > 0 {
            tracing::warn!(
                stride = config.sampling_stride,
                skipped = report.skipped_candidates,
                "sampling dropped structural spring candidates"
            );
        }
        tracing::info!(
            points = points.len(),
            interior = report.interior_points,
            structural = report.structural_springs,
            angular = report.angular_springs,
            torsional = report.torsional_springs,
            volumetric = report.volumetric_springs,
            "soft body built"
        );

        if let Some(bus) = bus {
            bus.emit(SimulationEvent::new(
                0,
                EventKind::BuildComplete {
                    points: points.len() as u32,
                    interior_points: report.interior_points as u32,
                    springs: springs.len() as u32,
                },
            ));
            bus.flush();
        }

        let body = SoftBody {
            points,
            is_internal,
            springs,
            interior_index,
            unindexed,
        };
        Ok((body, report))
    }
}
