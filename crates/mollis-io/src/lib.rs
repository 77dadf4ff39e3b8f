//! # mollis-io
//!
//! Simulation input/output contract and input validation.
//!
//! Defines the boundary types that external systems (CLI, benchmarks,
//! asset pipelines) use to describe a soft-body run and read back its
//! per-frame output.

pub mod contract;
pub mod validator;

pub use contract::{
    FrameData, MeshSource, SimulationInput, SimulationMetrics, SimulationOutput, TransformSpec,
};
pub use validator::validate_input;
