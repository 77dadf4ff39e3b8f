//! mollis CLI: soft-body simulation, benchmarking, and validation.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "mollis")]
#[command(version, about = "mollis: mass-spring soft-body simulation engine")]
struct Cli {
    /// Logging verbosity level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a config file.
    Simulate {
        /// Path to simulation config (TOML).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,

        /// Write the simulation output (JSON) to this path.
        #[arg(short, long)]
        output: Option<String>,

        /// Log every simulation event.
        #[arg(long)]
        events: bool,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (cube_drop, filled_sphere, hanging_sheet, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize a simulation output file.
    Inspect {
        /// Path to output file (JSON).
        path: String,
    },

    /// Validate a mesh or simulation input.
    Validate {
        /// Path to mesh (.json) or config (.toml) file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let result = match cli.command {
        Commands::Simulate {
            config,
            output,
            events,
        } => commands::simulate(&config, output.as_deref(), events),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
