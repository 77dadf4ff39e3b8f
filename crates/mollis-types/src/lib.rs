//! # mollis-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the mollis mass-spring soft-body engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other mollis crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{MollisError, MollisResult};
pub use ids::PointId;
