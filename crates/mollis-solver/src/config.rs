//! Build and step configuration.
//!
//! [`BuildConfig`] is consumed once while a soft body is constructed.
//! [`StepConfig`] is read by the simulator on every tick and may be
//! swapped between ticks.

use mollis_math::Vec3;
use mollis_types::constants::{
    DEFAULT_DAMPING, DEFAULT_DT, DEFAULT_INTERIOR_SPACING, DEFAULT_MAX_OCTREE_DEPTH,
    DEFAULT_NEIGHBOR_CAP, DEFAULT_POINT_MASS, DEFAULT_STIFFNESS, GRAVITY,
    INTERIOR_CONNECT_FACTOR,
};
use mollis_types::{MollisError, MollisResult};
use serde::{Deserialize, Serialize};

/// Parameters for turning a mesh into a mass-spring network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Base spring stiffness `k`. Angular and torsional springs use `k / 2`.
    pub stiffness: f32,

    /// Keep every `sampling_stride`-th mesh vertex (1 = keep all).
    pub sampling_stride: usize,

    /// Mass of every generated point. Values ≤ 0 produce fixed points.
    pub point_mass: f32,

    /// Whether to fill the enclosed volume with interior points.
    pub fill_interior: bool,

    /// Spacing of the interior sampling grid (meters).
    pub interior_spacing: f32,

    /// Maximum subdivision depth of the interior octree.
    pub max_octree_depth: u32,

    /// Maximum number of volumetric springs accepted per interior point.
    pub neighbor_cap: usize,

    /// Interior points farther apart than this are never connected.
    pub max_interior_connect_distance: f32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            sampling_stride: 1,
            point_mass: DEFAULT_POINT_MASS,
            fill_interior: false,
            interior_spacing: DEFAULT_INTERIOR_SPACING,
            max_octree_depth: DEFAULT_MAX_OCTREE_DEPTH,
            neighbor_cap: DEFAULT_NEIGHBOR_CAP,
            max_interior_connect_distance: DEFAULT_INTERIOR_SPACING * INTERIOR_CONNECT_FACTOR,
        }
    }
}

impl BuildConfig {
    /// Default configuration with interior filling enabled.
    pub fn filled() -> Self {
        Self {
            fill_interior: true,
            ..Default::default()
        }
    }

    /// Sets the interior spacing and scales the connect distance with it.
    pub fn with_interior_spacing(mut self, spacing: f32) -> Self {
        self.interior_spacing = spacing;
        self.max_interior_connect_distance = spacing * INTERIOR_CONNECT_FACTOR;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> MollisResult<()> {
        if self.sampling_stride == 0 {
            return Err(MollisError::InvalidConfig(
                "Sampling stride must be at least 1".into(),
            ));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(MollisError::InvalidConfig(format!(
                "Stiffness must be positive, got {}",
                self.stiffness
            )));
        }
        if !self.point_mass.is_finite() {
            return Err(MollisError::InvalidConfig(
                "Point mass must be finite".into(),
            ));
        }
        if self.fill_interior {
            if !(self.interior_spacing.is_finite() && self.interior_spacing > 0.0) {
                return Err(MollisError::InvalidConfig(format!(
                    "Interior spacing must be positive, got {}",
                    self.interior_spacing
                )));
            }
            if !(self.max_interior_connect_distance.is_finite()
                && self.max_interior_connect_distance > 0.0)
            {
                return Err(MollisError::InvalidConfig(format!(
                    "Interior connect distance must be positive, got {}",
                    self.max_interior_connect_distance
                )));
            }
        }
        Ok(())
    }
}

/// Per-tick integration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Multiplicative velocity factor applied after integration (1.0 = none).
    pub damping: f32,

    /// Fixed timestep (seconds).
    pub dt: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -GRAVITY, 0.0],
            damping: DEFAULT_DAMPING,
            dt: DEFAULT_DT,
        }
    }
}

impl StepConfig {
    /// Default configuration without velocity damping.
    pub fn undamped() -> Self {
        Self {
            damping: 1.0,
            ..Default::default()
        }
    }

    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> MollisResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(MollisError::InvalidConfig(format!(
                "Timestep dt must be positive, got {}",
                self.dt
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(MollisError::InvalidConfig(format!(
                "Damping factor must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !self.gravity_vec().is_finite() {
            return Err(MollisError::InvalidConfig(
                "Gravity must be finite".into(),
            ));
        }
        Ok(())
    }
}
