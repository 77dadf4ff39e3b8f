//! Benchmark runner: builds a scenario's soft body, steps it, and collects metrics.

use std::time::Instant;

use mollis_solver::{Simulator, SoftBodyBuilder};
use mollis_types::{MollisError, MollisResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> MollisResult<BenchmarkMetrics> {
        let build_start = Instant::now();
        let (mut body, report) =
            SoftBodyBuilder::new(scenario.build.clone()).build(&scenario.mesh, scenario.transform)?;
        let build_time = build_start.elapsed().as_secs_f64();

        for &i in &scenario.fixed {
            let point = body.points_mut().get_mut(i as usize).ok_or_else(|| {
                MollisError::InvalidConfig(format!(
                    "Fixed point {} out of range ({} points)",
                    i,
                    report.total_points()
                ))
            })?;
            point.set_mass(0.0);
        }

        // Save initial positions for displacement tracking
        let initial = body.positions();

        let mut sim = Simulator::new(body, scenario.step.clone())?;
        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut recovered_points = 0usize;

        let total_start = Instant::now();

        for _ in 0..scenario.timesteps {
            let result = sim.step();
            step_times.push(result.wall_time);
            recovered_points += result.recovered.len();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let body = sim.body();
        let max_displacement = body
            .points()
            .iter()
            .zip(&initial)
            .map(|(p, &p0)| p.position.distance(p0))
            .fold(0.0f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        if recovered_points > 0 {
            tracing::warn!(
                scenario = scenario.kind.name(),
                recovered_points,
                "benchmark run was numerically unstable"
            );
        }

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            point_count: body.point_count(),
            interior_points: report.interior_points,
            spring_count: body.spring_count(),
            build_time,
            total_wall_time,
            timesteps: scenario.timesteps,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            final_kinetic_energy: body.kinetic_energy(),
            final_elastic_energy: body.elastic_energy(),
            max_displacement,
            recovered_points,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> MollisResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            let metrics = Self::run(&scenario)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
