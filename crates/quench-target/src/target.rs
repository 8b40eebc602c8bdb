//! Target device descriptions.

use serde::{Deserialize, Serialize};

use crate::basis::BasisGates;
use crate::error::{TargetError, TargetResult};
use crate::topology::Topology;

/// A transpilation target: the device constraints every benchmark case is
/// compiled against.
///
/// Constructed once at startup and shared read-only across all cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Device name.
    name: String,
    /// Coupling topology.
    topology: Topology,
    /// Native gate set.
    basis: BasisGates,
    /// The two-qubit gate whose count/depth the benchmark records.
    two_qubit_gate: String,
}

impl Target {
    /// Create a target from explicit parts.
    ///
    /// The designated two-qubit gate defaults to the first entangler in
    /// the basis; override with [`Target::with_two_qubit_gate`].
    pub fn new(
        name: impl Into<String>,
        topology: Topology,
        basis: BasisGates,
    ) -> TargetResult<Self> {
        let two_qubit_gate = basis
            .two_qubit_gate()
            .ok_or(TargetError::NoTwoQubitGate)?
            .to_string();
        Ok(Self {
            name: name.into(),
            topology,
            basis,
            two_qubit_gate,
        })
    }

    /// Override the designated two-qubit gate.
    #[must_use]
    pub fn with_two_qubit_gate(mut self, gate: impl Into<String>) -> Self {
        self.two_qubit_gate = gate.into();
        self
    }

    /// Heron-class device: CZ entangler on a linear chain.
    ///
    /// The chain is the same approximation the compilation stack uses for
    /// 100+ qubit IBM devices; exact edge lists come in via
    /// [`Topology::custom`] and [`Target::new`].
    pub fn heron(num_qubits: u32) -> Self {
        Self {
            name: format!("heron-{num_qubits}"),
            topology: Topology::linear(num_qubits),
            basis: BasisGates::heron(),
            two_qubit_gate: "cz".to_string(),
        }
    }

    /// Eagle-class device: ECR entangler on a linear chain.
    pub fn eagle(num_qubits: u32) -> Self {
        Self {
            name: format!("eagle-{num_qubits}"),
            topology: Topology::linear(num_qubits),
            basis: BasisGates::eagle(),
            two_qubit_gate: "ecr".to_string(),
        }
    }

    /// All-to-all simulator target accepting every gate.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".to_string(),
            topology: Topology::full(num_qubits),
            basis: BasisGates::universal(),
            two_qubit_gate: "cx".to_string(),
        }
    }

    /// Look up a named preset.
    pub fn preset(name: &str, num_qubits: u32) -> TargetResult<Self> {
        match name.to_lowercase().as_str() {
            "heron" => Ok(Self::heron(num_qubits)),
            "eagle" => Ok(Self::eagle(num_qubits)),
            "simulator" | "sim" => Ok(Self::simulator(num_qubits)),
            other => Err(TargetError::UnknownPreset(other.to_string())),
        }
    }

    /// Names of all built-in presets.
    pub fn preset_names() -> &'static [&'static str] {
        &["heron", "eagle", "simulator"]
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of physical qubits.
    pub fn num_qubits(&self) -> u32 {
        self.topology.num_qubits()
    }

    /// Get the coupling topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Get the native gate set.
    pub fn basis(&self) -> &BasisGates {
        &self.basis
    }

    /// The two-qubit gate whose count/depth the benchmark records.
    pub fn two_qubit_gate(&self) -> &str {
        &self.two_qubit_gate
    }
}
