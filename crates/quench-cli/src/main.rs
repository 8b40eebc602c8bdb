//! Quench Command-Line Interface
//!
//! Generates the benchmark circuit suite, runs the device-transpile
//! workout against a remote transpiler service, and reports records for
//! the downstream pipeline.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{generate, run, targets, version};

/// Quench - benchmark gym for remote quantum-circuit transpilation
#[derive(Parser)]
#[command(name = "quench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the benchmark circuit suite to disk
    Generate {
        /// Number of qubits per circuit
        #[arg(short, long, default_value = "100")]
        qubits: u32,

        /// Suite root directory (one subdirectory per circuit family)
        #[arg(short, long, default_value = "qasm")]
        out: PathBuf,
    },

    /// Run the device-transpile workout against the configured service
    Run {
        /// Configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run a single named case instead of the full workout
        #[arg(long)]
        case: Option<String>,

        /// Timed iterations per case (overrides configuration)
        #[arg(long)]
        iterations: Option<u32>,

        /// Write records to this file instead of stdout
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// List built-in target device presets
    Targets,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Generate { qubits, out } => generate::execute(qubits, &out),

        Commands::Run {
            config,
            case,
            iterations,
            export,
        } => {
            run::execute(
                config.as_deref(),
                case.as_deref(),
                iterations,
                export.as_deref(),
            )
            .await
        }

        Commands::Targets => targets::execute(),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
