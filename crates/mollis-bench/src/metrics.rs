//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total point count (surface + interior).
    pub point_count: usize,
    /// Interior point count.
    pub interior_points: usize,
    /// Spring count.
    pub spring_count: usize,
    /// Wall-clock time spent building the soft body (seconds).
    pub build_time: f64,
    /// Total wall-clock time spent stepping (seconds).
    pub total_wall_time: f64,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Final kinetic energy.
    pub final_kinetic_energy: f64,
    /// Final spring energy.
    pub final_elastic_energy: f64,
    /// Maximum point displacement from its initial position.
    pub max_displacement: f32,
    /// Point resets performed by the instability guard (0 for a stable run).
    pub recovered_points: usize,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,point_count,interior_points,spring_count,timesteps,build_ms,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,final_elastic,max_displacement,recovered_points".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.4},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{:.6},{}",
            self.scenario,
            self.point_count,
            self.interior_points,
            self.spring_count,
            self.timesteps,
            self.build_time * 1000.0,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.final_elastic_energy,
            self.max_displacement,
            self.recovered_points,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
