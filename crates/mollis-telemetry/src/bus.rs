//! Event bus: queued event dispatch with pluggable sinks.
//!
//! The engine is single-threaded, so the bus is a plain queue: `emit`
//! appends, `flush` hands every queued event to each registered sink in
//! emission order.

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for simulation telemetry.
pub struct EventBus {
    /// Events emitted since the last flush.
    pending: Vec<SimulationEvent>,
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Creates a bus with a single sink already registered.
    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        let mut bus = Self::new();
        bus.add_sink(sink);
        bus
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&mut self, event: SimulationEvent) {
        if self.enabled {
            self.pending.push(event);
        }
    }

    /// Number of events waiting for the next flush.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Flush all pending events to registered sinks.
    ///
    /// Call this at the end of each timestep or at shutdown
    /// to ensure all events are processed.
    pub fn flush(&mut self) {
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes pending events and lets every sink finalize.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
