//! Benchmark scenarios: procedural mesh + placement + config for each test case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Cube drop**: Hollow cube falling freely (surface springs only)
//! 2. **Filled sphere**: Sphere with a volumetric core (interior sampling,
//!    octree, and volumetric springs)
//! 3. **Hanging sheet**: Horizontal sheet fixed along one edge, sagging
//!    under gravity

use serde::{Deserialize, Serialize};

use mollis_math::{Mat4, Vec3};
use mollis_mesh::generators::{quad_grid, unit_cube, uv_sphere};
use mollis_mesh::TriangleMesh;
use mollis_solver::{BuildConfig, StepConfig};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Hollow cube in free fall.
    CubeDrop,
    /// Sphere filled with interior points.
    FilledSphere,
    /// Sheet fixed at one edge.
    HangingSheet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::CubeDrop,
            ScenarioKind::FilledSphere,
            ScenarioKind::HangingSheet,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::CubeDrop => "cube_drop",
            ScenarioKind::FilledSphere => "filled_sphere",
            ScenarioKind::HangingSheet => "hanging_sheet",
        }
    }

    /// Parses a name produced by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Surface mesh (mesh-local space).
    pub mesh: TriangleMesh,
    /// World placement of the mesh.
    pub transform: Mat4,
    /// Construction parameters.
    pub build: BuildConfig,
    /// Integration parameters.
    pub step: StepConfig,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
    /// Points pinned in place after construction.
    pub fixed: Vec<u32>,
}

impl Scenario {
    /// Create the cube drop scenario.
    ///
    /// A unit cube one meter above the origin, falling for 2 seconds.
    pub fn cube_drop() -> Self {
        Self {
            kind: ScenarioKind::CubeDrop,
            mesh: unit_cube(),
            transform: Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)),
            build: BuildConfig::default(),
            step: StepConfig::default(),
            timesteps: 100,
            fixed: Vec::new(),
        }
    }

    /// Create the filled sphere scenario.
    ///
    /// A sphere of radius 0.5m at 12×16 resolution, filled at 0.1m spacing.
    /// The stiff core needs a smaller timestep than the default.
    pub fn filled_sphere() -> Self {
        Self {
            kind: ScenarioKind::FilledSphere,
            mesh: uv_sphere(0.5, 12, 16),
            transform: Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)),
            build: BuildConfig::filled(),
            step: StepConfig {
                dt: 1.0 / 200.0,
                ..Default::default()
            },
            timesteps: 200,
            fixed: Vec::new(),
        }
    }

    /// Create the hanging sheet scenario.
    ///
    /// A 1m × 1m sheet at 10×10 resolution, laid flat at Y = 1 and fixed
    /// along its first row.
    pub fn hanging_sheet() -> Self {
        let cols = 10;
        let rows = 10;
        let mesh = quad_grid(cols, rows, 1.0, 1.0);

        // XY grid → XZ plane, lifted to Y = 1.
        let transform = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))
            * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2);

        Self {
            kind: ScenarioKind::HangingSheet,
            mesh,
            transform,
            build: BuildConfig::default(),
            step: StepConfig {
                dt: 1.0 / 100.0,
                ..Default::default()
            },
            timesteps: 200,
            fixed: (0..=cols as u32).collect(),
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::CubeDrop => Self::cube_drop(),
            ScenarioKind::FilledSphere => Self::filled_sphere(),
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
        }
    }
}
