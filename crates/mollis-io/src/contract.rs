//! Simulation input/output contract types.
//!
//! These types are serializable for CLI configuration files and for
//! exporting frames to downstream consumers (renderers, analysis).

use std::path::{Path, PathBuf};

use mollis_math::{EulerRot, Mat4, Quat, Vec3};
use mollis_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use mollis_mesh::TriangleMesh;
use mollis_solver::{BuildConfig, BuildReport, Simulator, StepConfig};
use mollis_types::{MollisError, MollisResult};
use serde::{Deserialize, Serialize};

/// Where the simulated surface comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshSource {
    /// Axis-aligned box centered at the origin.
    Box { size: [f32; 3] },
    /// Closed UV sphere centered at the origin.
    Sphere {
        radius: f32,
        stacks: usize,
        slices: usize,
    },
    /// Flat grid in the XY plane (open surface, no interior).
    Grid {
        cols: usize,
        rows: usize,
        width: f32,
        height: f32,
    },
    /// JSON-encoded [`TriangleMesh`] on disk.
    File { path: PathBuf },
    /// Mesh embedded in the input itself.
    Inline { mesh: TriangleMesh },
}

impl Default for MeshSource {
    fn default() -> Self {
        MeshSource::Box { size: [1.0; 3] }
    }
}

impl MeshSource {
    /// Produces the mesh. Relative file paths resolve against `base_dir`.
    pub fn load(&self, base_dir: Option<&Path>) -> MollisResult<TriangleMesh> {
        let mesh = match self {
            MeshSource::Box { size } => box_mesh(Vec3::from_array(*size)),
            MeshSource::Sphere {
                radius,
                stacks,
                slices,
            } => uv_sphere(*radius, *stacks, *slices),
            MeshSource::Grid {
                cols,
                rows,
                width,
                height,
            } => quad_grid(*cols, *rows, *width, *height),
            MeshSource::File { path } => {
                let path = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                let text = std::fs::read_to_string(&path)?;
                serde_json::from_str(&text).map_err(|e| {
                    MollisError::Serialization(format!("{}: {}", path.display(), e))
                })?
            }
            MeshSource::Inline { mesh } => mesh.clone(),
        };
        Ok(mesh)
    }
}

/// World placement of the mesh: scale, then rotation, then translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSpec {
    pub translation: [f32; 3],
    /// Euler angles in degrees, applied X then Y then Z.
    pub rotation_deg: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_deg: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl TransformSpec {
    /// The world transform matrix.
    pub fn to_mat4(&self) -> Mat4 {
        let [rx, ry, rz] = self.rotation_deg.map(f32::to_radians);
        let rotation = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
        Mat4::from_scale_rotation_translation(
            Vec3::from_array(self.scale),
            rotation,
            Vec3::from_array(self.translation),
        )
    }
}

/// Complete input specification for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    /// The surface to turn into a soft body.
    pub mesh: MeshSource,
    /// World placement of the mesh.
    pub transform: TransformSpec,
    /// Soft body construction parameters.
    pub build: BuildConfig,
    /// Per-step integration parameters.
    pub step: StepConfig,
    /// Number of steps to run.
    pub steps: u32,
    /// Record a frame every `frame_interval` steps (0 = final frame only).
    pub frame_interval: u32,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            mesh: MeshSource::default(),
            transform: TransformSpec::default(),
            build: BuildConfig::default(),
            step: StepConfig::default(),
            steps: 250,
            frame_interval: 0,
        }
    }
}

impl SimulationInput {
    /// Loads the mesh and resolves the world transform.
    pub fn prepare(&self, base_dir: Option<&Path>) -> MollisResult<(TriangleMesh, Mat4)> {
        Ok((self.mesh.load(base_dir)?, self.transform.to_mat4()))
    }
}

/// Snapshot of the simulation at one timestep, for rendering or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    /// Completed steps when captured.
    pub timestep: u32,
    /// Simulated time (seconds).
    pub sim_time: f64,
    /// Point positions.
    pub positions: Vec<[f32; 3]>,
    /// Interior flag per point.
    pub is_internal: Vec<bool>,
    pub spring_count: usize,
}

impl FrameData {
    /// Captures the simulator's current state.
    pub fn capture(sim: &Simulator) -> Self {
        let body = sim.body();
        Self {
            timestep: sim.timestep(),
            sim_time: sim.sim_time(),
            positions: body.points().iter().map(|p| p.position.to_array()).collect(),
            is_internal: body.is_internal().to_vec(),
            spring_count: body.spring_count(),
        }
    }

    /// Number of points in the frame.
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }
}

/// Aggregate metrics from a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Total wall-clock time spent stepping (seconds).
    pub wall_time_seconds: f64,
    /// Number of timesteps executed.
    pub timestep_count: u32,
    /// Points reset by the instability guard over the whole run.
    pub recovered_points: u64,
    /// Kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Spring energy after the last step.
    pub final_elastic_energy: f64,
}

/// Output from a completed simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Construction counts.
    pub build: BuildReport,
    /// Recorded frames; the last one is always the final state.
    pub frames: Vec<FrameData>,
    pub metrics: SimulationMetrics,
}

impl SimulationOutput {
    /// The final recorded frame.
    pub fn final_frame(&self) -> Option<&FrameData> {
        self.frames.last()
    }
}
