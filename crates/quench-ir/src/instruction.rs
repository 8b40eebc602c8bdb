//! Circuit instructions.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::{ClbitId, QubitId};

/// The kind of operation an instruction performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate.
    Gate(Gate),
    /// Measurement of a qubit into a classical bit.
    Measure,
    /// Reset a qubit to |0⟩.
    Reset,
    /// Barrier directive (synchronizes, contributes no depth).
    Barrier,
}

/// An operation applied to specific qubits and classical bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// What this instruction does.
    pub kind: InstructionKind,
    /// Qubits the instruction acts on, in application order.
    pub qubits: Vec<QubitId>,
    /// Classical bits the instruction writes (measurements only).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// Create a reset instruction.
    pub fn reset(qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Reset,
            qubits: vec![qubit],
            clbits: vec![],
        }
    }

    /// Create a barrier over the given qubits.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Get the operation name as it appears in an operation tally.
    #[inline]
    pub fn name(&self) -> &'static str {
        match &self.kind {
            InstructionKind::Gate(gate) => gate.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Reset => "reset",
            InstructionKind::Barrier => "barrier",
        }
    }

    /// Check if this instruction is a two-qubit gate.
    #[inline]
    pub fn is_two_qubit_gate(&self) -> bool {
        matches!(&self.kind, InstructionKind::Gate(g) if g.is_two_qubit())
    }

    /// Get the gate, if this instruction is one.
    #[inline]
    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            InstructionKind::Gate(gate) => Some(gate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::gate(Gate::CX, [QubitId(0), QubitId(1)]);
        assert_eq!(inst.name(), "cx");
        assert!(inst.is_two_qubit_gate());
        assert_eq!(inst.qubits.len(), 2);
        assert!(inst.clbits.is_empty());
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::measure(QubitId(2), ClbitId(2));
        assert_eq!(inst.name(), "measure");
        assert!(!inst.is_two_qubit_gate());
        assert_eq!(inst.clbits, vec![ClbitId(2)]);
    }

    #[test]
    fn test_barrier_name() {
        let inst = Instruction::barrier([QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(inst.name(), "barrier");
        assert!(inst.as_gate().is_none());
    }
}
