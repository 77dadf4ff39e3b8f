//! Integration tests for mollis-bench.

use mollis_bench::metrics::BenchmarkMetrics;
use mollis_bench::runner::BenchmarkRunner;
use mollis_bench::scenarios::{Scenario, ScenarioKind};

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn hanging_sheet_setup() {
    let s = Scenario::hanging_sheet();
    assert_eq!(s.kind, ScenarioKind::HangingSheet);
    assert_eq!(s.mesh.vertex_count(), 121); // 11×11
    assert_eq!(s.mesh.triangle_count(), 200);
    assert_eq!(s.fixed.len(), 11);
}

#[test]
fn filled_sphere_setup() {
    let s = Scenario::filled_sphere();
    assert!(s.build.fill_interior);
    assert!(s.fixed.is_empty());
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ScenarioKind::from_name("nope"), None);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_hanging_sheet() {
    let mut scenario = Scenario::hanging_sheet();
    scenario.timesteps = 5; // Very short for testing
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "hanging_sheet");
    assert_eq!(metrics.timesteps, 5);
    assert_eq!(metrics.point_count, 121);
    assert_eq!(metrics.interior_points, 0);
    assert!(metrics.max_displacement > 0.0); // Gravity should cause displacement
    assert_eq!(metrics.recovered_points, 0);
}

#[test]
fn run_filled_sphere() {
    let mut scenario = Scenario::filled_sphere();
    scenario.timesteps = 3;
    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert!(metrics.interior_points > 0);
    assert!(metrics.spring_count > 0);
    assert_eq!(metrics.recovered_points, 0);
}

#[test]
fn run_all_scenarios() {
    for &kind in ScenarioKind::all() {
        let mut scenario = Scenario::from_kind(kind);
        scenario.timesteps = 3;
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.total_wall_time >= 0.0);
    }
}

#[test]
fn out_of_range_fixed_point_rejected() {
    let mut scenario = Scenario::cube_drop();
    scenario.fixed = vec![99];
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "test".into(),
        point_count: 8,
        interior_points: 0,
        spring_count: 28,
        build_time: 0.001,
        total_wall_time: 1.5,
        timesteps: 100,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        final_kinetic_energy: 1e-5,
        final_elastic_energy: 2e-3,
        max_displacement: 0.5,
        recovered_points: 0,
    }
}

#[test]
fn metrics_csv_output() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics(), sample_metrics()]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario,"));
    let columns = lines[0].split(',').count();
    assert!(lines[1..].iter().all(|l| l.split(',').count() == columns));
    assert!(lines[1].starts_with("test,8,0,28,100,"));
}

#[test]
fn metrics_json() {
    let json = serde_json::to_string(&sample_metrics()).unwrap();
    assert!(json.contains("\"spring_count\":28"));
}
