//! # mollis-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (build summary, timing, energy, instability recoveries, index edge
//! drops) that can be consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, SharedVecSink, TracingSink, VecSink};
