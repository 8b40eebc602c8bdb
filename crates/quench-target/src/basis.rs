//! Native gate sets for target devices.

use serde::{Deserialize, Serialize};

/// Basis gates for a target device (OpenQASM naming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisGates {
    /// Gate names in the basis.
    gates: Vec<String>,
}

impl BasisGates {
    /// Create a new basis gate set.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a gate is in the basis.
    pub fn contains(&self, gate: &str) -> bool {
        self.gates.iter().any(|g| g == gate)
    }

    /// Get the basis gate names.
    pub fn gates(&self) -> &[String] {
        &self.gates
    }

    /// The first two-qubit entangling gate in the basis, if any.
    ///
    /// Used to pick the gate whose count and depth the benchmark records.
    pub fn two_qubit_gate(&self) -> Option<&str> {
        const TWO_QUBIT: &[&str] = &[
            "cx", "cy", "cz", "ch", "swap", "iswap", "ecr", "crx", "cry", "crz", "cp", "rxx",
            "ryy", "rzz",
        ];
        self.gates
            .iter()
            .map(String::as_str)
            .find(|g| TWO_QUBIT.contains(g))
    }

    /// IBM Heron-class basis (CZ entangler).
    pub fn heron() -> Self {
        Self::new(["rz", "sx", "x", "cz", "id", "measure", "barrier"])
    }

    /// IBM Eagle-class basis (ECR entangler).
    pub fn eagle() -> Self {
        Self::new(["rz", "sx", "x", "ecr", "id", "measure", "barrier"])
    }

    /// A universal basis accepting every standard gate.
    pub fn universal() -> Self {
        Self::new([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "sx", "sxdg", "rx", "ry", "rz", "p",
            "u", "cx", "cy", "cz", "ch", "swap", "iswap", "ecr", "crx", "cry", "crz", "cp", "rxx",
            "ryy", "rzz", "ccx", "cswap", "measure", "reset", "barrier",
        ])
    }
}
