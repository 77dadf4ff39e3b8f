//! Simulation event types.
//!
//! Structured events emitted by the engine during construction and at
//! various points in each timestep. Events are lightweight value types
//! that carry just enough data to be useful for monitoring and
//! verification.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a timestep index and carry domain-specific data.
/// Construction-time events use timestep 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Soft body construction finished.
    BuildComplete {
        /// Total point count (surface + interior).
        points: u32,
        /// Interior point count.
        interior_points: u32,
        /// Total spring count.
        springs: u32,
    },

    /// An interior point could not be placed in the octree.
    IndexEdgeDrop {
        /// Index of the dropped point.
        point: u32,
    },

    /// Timestep started.
    TimestepBegin {
        /// Simulation time at the start of this step (seconds).
        sim_time: f64,
    },

    /// Timestep completed.
    TimestepEnd {
        /// Wall-clock time for the entire timestep (seconds).
        wall_time: f64,
    },

    /// A point's state became non-finite and was reset.
    InstabilityRecovered {
        /// Index of the recovered point.
        point: u32,
    },

    /// Energy snapshot at current state.
    Energy {
        /// Kinetic energy (0.5 * m * v^2).
        kinetic: f64,
        /// Elastic spring energy (0.5 * k * stretch^2).
        elastic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
