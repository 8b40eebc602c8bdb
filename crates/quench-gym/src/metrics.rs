//! Two-qubit metric extraction from transpiled circuits.

use quench_ir::Circuit;

/// Two-qubit metrics of a transpiled circuit, relative to the target's
/// designated entangling gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoQubitMetrics {
    /// Count of the designated gate in the operation tally; zero when
    /// absent.
    pub gate_count: usize,
    /// Depth restricted to the designated gate.
    pub depth: usize,
    /// Other two-qubit gate names present in the result, sorted.
    ///
    /// A non-empty list together with `gate_count == 0` means the
    /// device's native entangler is probably named differently than the
    /// target assumes, and the result only *looks* perfectly simplified.
    pub unexpected: Vec<String>,
}

/// Extract two-qubit metrics for `gate` from a transpiled circuit.
pub fn two_qubit_metrics(circuit: &Circuit, gate: &str) -> TwoQubitMetrics {
    let counts = circuit.count_ops();
    let gate_count = counts.get(gate).copied().unwrap_or(0);
    let depth = circuit.depth_filtered(|inst| inst.name() == gate);

    let mut unexpected: Vec<String> = circuit
        .instructions()
        .iter()
        .filter(|inst| inst.is_two_qubit_gate() && inst.name() != gate)
        .map(|inst| inst.name().to_string())
        .collect();
    unexpected.sort_unstable();
    unexpected.dedup();

    TwoQubitMetrics {
        gate_count,
        depth,
        unexpected,
    }
}
