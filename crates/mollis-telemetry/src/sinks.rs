//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (collect for inspection, forward to `tracing`, etc.).

use std::sync::{Arc, Mutex};

use crate::events::SimulationEvent;

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A simple sink that logs events to a `Vec` for testing and inspection.
#[derive(Default)]
pub struct VecSink {
    /// Collected events.
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Like [`VecSink`], but the collected events stay readable after the
/// sink has been boxed and handed to a bus.
#[derive(Clone, Default)]
pub struct SharedVecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl SharedVecSink {
    /// Creates an empty shared sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event received so far.
    pub fn events(&self) -> Vec<SimulationEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for SharedVecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "shared_vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Instability and edge-drop events are logged at `WARN`, everything
/// else at `DEBUG`.
#[derive(Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        use crate::events::EventKind;
        match event.kind {
            EventKind::InstabilityRecovered { .. } | EventKind::IndexEdgeDrop { .. } => {
                tracing::warn!(timestep = event.timestep, event = ?event.kind, "simulation_event");
            }
            _ => {
                tracing::debug!(timestep = event.timestep, event = ?event.kind, "simulation_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
