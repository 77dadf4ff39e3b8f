//! # mollis-solver
//!
//! Soft-body construction from a triangle mesh and explicit time integration.
//!
//! ## Pipeline
//!
//! ```text
//! mesh → sampled points → structural → angular → torsional springs
//!      → (optional) interior points → octree → volumetric springs
//!      → Simulator::step (gravity → springs → integrate → damp → guard)
//! ```
//!
//! ## Key Types
//!
//! - [`PointMass`]: A particle with position, velocity, mass and a force buffer
//! - [`Spring`] / [`SpringSet`]: Canonical, deduplicated spring storage
//! - [`SoftBodyBuilder`]: Batch construction with a [`BuildReport`]
//! - [`SoftBody`]: The assembled point/spring system
//! - [`Simulator`]: Fixed-step stepper with instability recovery

pub mod body;
pub mod config;
pub mod interior;
pub mod network;
pub mod point;
pub mod simulator;
pub mod spring;

pub use body::{BuildReport, SoftBody, SoftBodyBuilder};
pub use config::{BuildConfig, StepConfig};
pub use point::PointMass;
pub use simulator::{Simulator, StepReport};
pub use spring::{Spring, SpringKind, SpringSet};
