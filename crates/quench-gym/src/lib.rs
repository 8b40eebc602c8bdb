//! Benchmark gym for remote quantum-circuit transpilation.
//!
//! Quench measures how long a transpilation engine takes to compile a
//! fixed set of sample circuits (QFT, Quantum Volume, Bernstein-Vazirani,
//! QAOA, square-Heisenberg and an EfficientSU2 ansatz, 100 qubits each)
//! against a target device's coupling map and basis gates, and records
//! two named metrics per case for the reporting pipeline:
//!
//! - `gate_count_2q` — occurrences of the target's designated two-qubit
//!   gate in the transpiled result (zero when absent)
//! - `depth_2q` — circuit depth restricted to that same gate
//!
//! The harness owns no transpilation logic. Everything flows through the
//! `TranspilerEngine` seam; results that come back empty fail the case.
//!
//! ```no_run
//! use quench_gym::{DeviceTranspileWorkout, GymConfig};
//! use quench_target::TranspilerEngine;
//! # async fn run(engine: &impl TranspilerEngine) -> Result<(), Box<dyn std::error::Error>> {
//! let config = GymConfig::default();
//! let target = config.target.build()?;
//! let workout = DeviceTranspileWorkout::new(engine, &config, &target);
//! let record = workout.qft_100().await?;
//! println!("{}", serde_json::to_string_pretty(&record)?);
//! # Ok(())
//! # }
//! ```

pub mod circuits;
mod config;
mod error;
mod metrics;
mod record;
mod workout;

pub use config::{ENV_SERVICE_TOKEN, ENV_SERVICE_URL, GymConfig, ServiceConfig, SuiteConfig, TargetConfig};
pub use error::{GymError, GymResult};
pub use metrics::{TwoQubitMetrics, two_qubit_metrics};
pub use record::{BenchmarkRecord, Timing, measure};
pub use workout::{CASES, DeviceTranspileWorkout, WORKOUT_QUBITS};
