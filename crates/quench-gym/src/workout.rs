//! The device-transpile workout: one benchmarked case per sample circuit.

use tracing::{debug, warn};

use quench_ir::Circuit;
use quench_target::{Target, TranspilerEngine};

use crate::circuits;
use crate::config::GymConfig;
use crate::error::{GymError, GymResult};
use crate::metrics::two_qubit_metrics;
use crate::record::{BenchmarkRecord, measure};

/// Standard qubit count of the workout circuits.
pub const WORKOUT_QUBITS: u32 = 100;

/// Compiles the fixed sample circuits against a target device through a
/// [`TranspilerEngine`], timing each call and recording two-qubit
/// metrics.
///
/// File-loaded cases read from the configured suite directories using
/// the fixed naming convention; the rest are built programmatically.
/// Engine and loader failures propagate unmodified; a failed case is
/// exactly what the benchmark exists to surface.
pub struct DeviceTranspileWorkout<'a, E: TranspilerEngine> {
    engine: &'a E,
    config: &'a GymConfig,
    target: &'a Target,
}

/// Names of all workout cases, in run order.
pub const CASES: &[&str] = &[
    "qft_100",
    "qv_100",
    "circ_su2_100",
    "bv_100",
    "square_heisenberg_100",
    "qaoa_100",
    "bvlike_simplification",
];

impl<'a, E: TranspilerEngine> DeviceTranspileWorkout<'a, E> {
    /// Create a workout over a shared engine, configuration and target.
    pub fn new(engine: &'a E, config: &'a GymConfig, target: &'a Target) -> Self {
        Self {
            engine,
            config,
            target,
        }
    }

    /// Run a named case.
    pub async fn run(&self, case: &str) -> GymResult<BenchmarkRecord> {
        match case {
            "qft_100" => self.qft_100().await,
            "qv_100" => self.qv_100().await,
            "circ_su2_100" => self.circ_su2_100().await,
            "bv_100" => self.bv_100().await,
            "square_heisenberg_100" => self.square_heisenberg_100().await,
            "qaoa_100" => self.qaoa_100().await,
            "bvlike_simplification" => self.bvlike_simplification().await,
            other => Err(GymError::UnknownCase(other.to_string())),
        }
    }

    /// Run every case in order, failing on the first error.
    pub async fn run_all(&self) -> GymResult<Vec<BenchmarkRecord>> {
        let mut records = Vec::with_capacity(CASES.len());
        for case in CASES {
            records.push(self.run(case).await?);
        }
        Ok(records)
    }

    /// Compile the 100-qubit QFT suite file.
    pub async fn qft_100(&self) -> GymResult<BenchmarkRecord> {
        let path = self
            .config
            .qasm_dir("qft")
            .join(format!("qft_N{WORKOUT_QUBITS}.qasm"));
        let circuit = quench_qasm2::parse_file(path)?;
        self.run_case("qft_100", circuit).await
    }

    /// Compile the 100-qubit quantum-volume suite file.
    pub async fn qv_100(&self) -> GymResult<BenchmarkRecord> {
        let path = self.config.qasm_dir("qv").join(format!(
            "qv_N{WORKOUT_QUBITS}_{}.qasm",
            circuits::QV_SEED
        ));
        let circuit = quench_qasm2::parse_file(path)?;
        self.run_case("qv_100", circuit).await
    }

    /// Compile a 100-qubit circular-entanglement EfficientSU2 ansatz.
    pub async fn circ_su2_100(&self) -> GymResult<BenchmarkRecord> {
        let circuit = circuits::efficient_su2(WORKOUT_QUBITS, 3, circuits::SU2_SEED)?;
        self.run_case("circ_su2_100", circuit).await
    }

    /// Compile a 100-qubit Bernstein-Vazirani circuit.
    pub async fn bv_100(&self) -> GymResult<BenchmarkRecord> {
        let circuit = circuits::bv_all_ones(WORKOUT_QUBITS)?;
        self.run_case("bv_100", circuit).await
    }

    /// Compile the 100-qubit square-Heisenberg suite file.
    pub async fn square_heisenberg_100(&self) -> GymResult<BenchmarkRecord> {
        let path = self
            .config
            .qasm_dir("square-heisenberg")
            .join(format!("square_heisenberg_N{WORKOUT_QUBITS}.qasm"));
        let circuit = quench_qasm2::parse_file(path)?;
        self.run_case("square_heisenberg_100", circuit).await
    }

    /// Compile the 100-qubit QAOA-on-Barabási-Albert suite file.
    pub async fn qaoa_100(&self) -> GymResult<BenchmarkRecord> {
        let path = self.config.qasm_dir("qaoa").join(format!(
            "qaoa_barabasi_albert_N{WORKOUT_QUBITS}_3reps.qasm"
        ));
        let circuit = quench_qasm2::parse_file(path)?;
        self.run_case("qaoa_100", circuit).await
    }

    /// Compile a BV-shaped circuit that should collapse to a single X
    /// and Z on the ancilla. A near-zero two-qubit count distinguishes
    /// correct simplification from an optimizer regression.
    pub async fn bvlike_simplification(&self) -> GymResult<BenchmarkRecord> {
        let circuit = circuits::trivial_bvlike(WORKOUT_QUBITS)?;
        self.run_case("bvlike_simplification", circuit).await
    }

    /// Time the engine over one circuit and build its record.
    async fn run_case(&self, case: &str, circuit: Circuit) -> GymResult<BenchmarkRecord> {
        debug!(
            case,
            engine = self.engine.name(),
            qubits = circuit.num_qubits(),
            size = circuit.size(),
            "running device-transpile case"
        );

        let (result, timing) =
            measure(self.config.suite.iterations, || self.engine.transpile(&circuit)).await?;

        if result.is_empty() {
            return Err(GymError::EmptyResult {
                case: case.to_string(),
            });
        }

        let gate = self.target.two_qubit_gate();
        let metrics = two_qubit_metrics(&result, gate);
        if metrics.gate_count == 0 && !metrics.unexpected.is_empty() {
            // Zero entanglers of the assumed name while others are
            // present reads as perfect simplification but usually means
            // the device's native gate is named differently.
            warn!(
                case,
                gate,
                found = ?metrics.unexpected,
                "designated two-qubit gate absent from result; other two-qubit gates present"
            );
        }

        let mut record = BenchmarkRecord::new(format!("device_transpile/{case}"), timing)
            .with_extra("gate_count_2q", metrics.gate_count as u64)
            .with_extra("depth_2q", metrics.depth as u64);
        if !metrics.unexpected.is_empty() {
            record = record.with_extra(
                "unexpected_2q_gates",
                serde_json::Value::from(metrics.unexpected),
            );
        }

        Ok(record)
    }
}
