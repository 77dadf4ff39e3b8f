//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use mollis_bench::metrics::BenchmarkMetrics;
use mollis_bench::runner::BenchmarkRunner;
use mollis_bench::scenarios::{Scenario, ScenarioKind};
use mollis_io::contract::{FrameData, SimulationInput, SimulationMetrics, SimulationOutput};
use mollis_io::validator::validate_input;
use mollis_solver::{Simulator, SoftBodyBuilder};
use mollis_telemetry::{EventBus, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn load_input(path: &Path) -> Result<SimulationInput, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Run a simulation from config file.
pub fn simulate(config_path: &str, output_path: Option<&str>, events: bool) -> CliResult {
    println!("mollis Simulation");
    println!("─────────────────");
    println!("Config: {config_path}");
    println!();

    let path = Path::new(config_path);
    let base_dir = path.parent();
    let input = load_input(path)?;
    validate_input(&input, base_dir)?;
    let (mesh, transform) = input.prepare(base_dir)?;

    let mut bus = EventBus::new();
    bus.set_enabled(events);
    if events {
        bus.add_sink(Box::new(TracingSink::new()));
    }

    let builder = SoftBodyBuilder::new(input.build.clone());
    let (body, report) = builder.build_observed(&mesh, transform, &mut bus)?;

    println!(
        "Body:   {} points ({} interior), {} springs",
        report.total_points(),
        report.interior_points,
        report.total_springs()
    );
    println!(
        "        {} structural, {} angular, {} torsional, {} volumetric",
        report.structural_springs,
        report.angular_springs,
        report.torsional_springs,
        report.volumetric_springs
    );

    let mut sim = Simulator::new(body, input.step.clone())?.with_event_bus(bus);
    let mut frames = Vec::new();
    let start = Instant::now();

    for _ in 0..input.steps {
        sim.step();
        if input.frame_interval > 0 && sim.timestep() % input.frame_interval == 0 {
            frames.push(FrameData::capture(&sim));
        }
    }
    sim.finish();
    let wall_time = start.elapsed().as_secs_f64();

    if frames.last().map(|f| f.timestep) != Some(sim.timestep()) {
        frames.push(FrameData::capture(&sim));
    }

    let metrics = SimulationMetrics {
        wall_time_seconds: wall_time,
        timestep_count: sim.timestep(),
        recovered_points: sim.anomaly_count(),
        final_kinetic_energy: sim.body().kinetic_energy(),
        final_elastic_energy: sim.body().elastic_energy(),
    };

    println!("Steps:  {} ({:.3}s simulated)", metrics.timestep_count, sim.sim_time());
    println!("Wall:   {:.3}s", metrics.wall_time_seconds);
    println!("KE:     {:.6e}", metrics.final_kinetic_energy);
    println!("Elastic: {:.6e}", metrics.final_elastic_energy);
    if metrics.recovered_points > 0 {
        println!("⚠ {} point recoveries (consider a smaller dt)", metrics.recovered_points);
    }

    if let Some(out) = output_path {
        let output = SimulationOutput {
            build: report,
            frames,
            metrics,
        };
        std::fs::write(out, serde_json::to_string_pretty(&output)?)?;
        println!();
        println!("Output written to: {out}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CliResult {
    println!("mollis Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} verts, {} tris, {} steps)",
            kind.name(),
            scenario.mesh.vertex_count(),
            scenario.mesh.triangle_count(),
            scenario.timesteps,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Points:        {} ({} interior)", metrics.point_count, metrics.interior_points);
        println!("  Springs:       {}", metrics.spring_count);
        println!("  Build time:    {:.3}ms", metrics.build_time * 1000.0);
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Summarize a simulation output file.
pub fn inspect(path: &str) -> CliResult {
    println!("mollis Output Inspector");
    println!("───────────────────────");
    println!();

    let content = std::fs::read_to_string(path)?;
    let output: SimulationOutput =
        serde_json::from_str(&content).map_err(|e| format!("Failed to read output: {e}"))?;

    println!("Frames:       {}", output.frames.len());
    println!("Timesteps:    {}", output.metrics.timestep_count);
    println!("Recoveries:   {}", output.metrics.recovered_points);
    println!("Springs:      {}", output.build.total_springs());

    if let Some(frame) = output.final_frame() {
        println!("Points:       {}", frame.point_count());
        println!("Sim time:     {:.4}s", frame.sim_time);

        let (min_y, max_y) = frame
            .positions
            .iter()
            .map(|p| p[1])
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if min_y <= max_y {
            println!("Y range:      [{:.4}, {:.4}]", min_y, max_y);
        }
    }

    Ok(())
}

/// Validate a mesh or config.
pub fn validate(path: &str) -> CliResult {
    println!("mollis Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let file = Path::new(path);
        let input = load_input(file)?;
        match validate_input(&input, file.parent()) {
            Ok(()) => println!("✅ Config is valid."),
            Err(e) => println!("❌ Config validation failed: {e}"),
        }
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: mollis_mesh::TriangleMesh = serde_json::from_str(&content)?;
        match mesh.validate() {
            Ok(()) => {
                let topology = mollis_mesh::Topology::build(&mesh);
                println!(
                    "✅ Mesh is valid ({} verts, {} tris, {}, {} non-manifold edges).",
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    if topology.is_closed() { "closed" } else { "open" },
                    topology.non_manifold_edge_count()
                );
            }
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (mesh).");
    }

    Ok(())
}
