//! Fixed-step soft body simulation.
//!
//! Every call to [`Simulator::step`] runs, in order:
//!
//! 1. gravity `m * g` on every point
//! 2. spring forces
//! 3. semi-implicit Euler integration (clears forces)
//! 4. velocity damping
//! 5. instability guard: any point with a non-finite position is reset
//!    to the origin at rest
//!
//! Recoveries are reported in the [`StepReport`], logged, and emitted as
//! events when an [`EventBus`] is attached.

use std::time::Instant;

use mollis_telemetry::{EventBus, EventKind, SimulationEvent};
use mollis_types::{MollisResult, PointId};

use crate::body::SoftBody;
use crate::config::StepConfig;

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Index of the completed step (the first step is 0).
    pub timestep: u32,
    /// Points reset by the instability guard.
    pub recovered: Vec<PointId>,
    /// Wall-clock time spent in the step (seconds).
    pub wall_time: f64,
}

/// Owns a soft body and advances it in time.
pub struct Simulator {
    body: SoftBody,
    config: StepConfig,
    timestep: u32,
    sim_time: f64,
    anomaly_count: u64,
    events: Option<EventBus>,
}

impl Simulator {
    /// Creates a simulator, validating `config`.
    pub fn new(body: SoftBody, config: StepConfig) -> MollisResult<Self> {
        config.validate()?;
        Ok(Self {
            body,
            config,
            timestep: 0,
            sim_time: 0.0,
            anomaly_count: 0,
            events: None,
        })
    }

    /// Attaches an event bus.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn event_bus_mut(&mut self) -> Option<&mut EventBus> {
        self.events.as_mut()
    }

    pub fn body(&self) -> &SoftBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut SoftBody {
        &mut self.body
    }

    pub fn into_body(self) -> SoftBody {
        self.body
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Replaces the step configuration; takes effect on the next step.
    pub fn set_config(&mut self, config: StepConfig) -> MollisResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Number of completed steps.
    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    /// Simulated time (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Total point recoveries since creation.
    pub fn anomaly_count(&self) -> u64 {
        self.anomaly_count
    }

    /// Advances the body by one `dt`.
    pub fn step(&mut self) -> StepReport {
        let start = Instant::now();
        let timestep = self.timestep;
        self.emit(EventKind::TimestepBegin {
            sim_time: self.sim_time,
        });

        let dt = self.config.dt;
        self.body.apply_gravity(self.config.gravity_vec());
        self.body.accumulate_spring_forces();
        self.body.integrate(dt);
        self.body.damp_velocities(self.config.damping);

        let recovered = self.body.recover_non_finite();
        for id in &recovered {
            tracing::warn!(point = id.0, timestep, "non-finite point state reset to origin");
            self.emit(EventKind::InstabilityRecovered { point: id.0 });
        }
        self.anomaly_count += recovered.len() as u64;

        if self.events.as_ref().is_some_and(EventBus::is_enabled) {
            let kinetic = self.body.kinetic_energy();
            let elastic = self.body.elastic_energy();
            self.emit(EventKind::Energy { kinetic, elastic });
        }

        let wall_time = start.elapsed().as_secs_f64();
        self.emit(EventKind::TimestepEnd { wall_time });
        if let Some(bus) = self.events.as_mut() {
            bus.flush();
        }

        self.timestep += 1;
        self.sim_time += dt as f64;

        StepReport {
            timestep,
            recovered,
            wall_time,
        }
    }

    /// Runs `steps` steps and returns the number of point recoveries.
    pub fn run(&mut self, steps: u32) -> usize {
        let mut recovered = 0;
        for _ in 0..steps {
            recovered += self.step().recovered.len();
        }
        tracing::debug!(
            steps,
            recovered,
            sim_time = self.sim_time,
            "simulation run complete"
        );
        recovered
    }

    /// Finalizes the attached sinks.
    pub fn finish(&mut self) {
        if let Some(bus) = self.events.as_mut() {
            bus.finalize();
        }
    }

    fn emit(&mut self, kind: EventKind) {
        if let Some(bus) = self.events.as_mut() {
            bus.emit(SimulationEvent::new(self.timestep, kind));
        }
    }
}
