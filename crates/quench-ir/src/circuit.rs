//! High-level circuit builder and metric queries.

use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// Instructions are stored in application order. The gym treats circuits
/// as immutable once constructed; all mutation happens through the
/// validating builder methods below.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new circuit with the given number of qubits and classical bits.
    pub fn new(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Append an instruction after validating its operands.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<()> {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::ArityMismatch {
                    gate: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }
        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate: instruction.name().to_string(),
                });
            }
        }
        for &clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitOutOfRange {
                    clbit,
                    num_clbits: self.num_clbits,
                });
            }
        }
        self.instructions.push(instruction);
        Ok(())
    }

    /// Apply a gate to the given qubits.
    pub fn gate(
        &mut self,
        gate: Gate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::H, [qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::X, [qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Y, [qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Z, [qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::S, [qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::T, [qubit])
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::SX, [qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Rx(theta), [qubit])
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Ry(theta), [qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Rz(theta), [qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::P(theta), [qubit])
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::U(theta, phi, lambda), [qubit])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::CX, [control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::CZ, [control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::Swap, [q1, q2])
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::CP(theta), [control, target])
    }

    /// Apply XX rotation gate.
    pub fn rxx(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::RXX(theta), [q1, q2])
    }

    /// Apply YY rotation gate.
    pub fn ryy(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::RYY(theta), [q1, q2])
    }

    /// Apply ZZ rotation gate.
    pub fn rzz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(Gate::RZZ(theta), [q1, q2])
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure every qubit to the matching classical bit, growing the
    /// classical register if needed.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            self.num_clbits = self.num_qubits;
        }
        for i in 0..self.num_qubits {
            self.push(Instruction::measure(QubitId(i), ClbitId(i)))?;
        }
        Ok(self)
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::reset(qubit))?;
        Ok(self)
    }

    /// Apply a barrier to the given qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Instruction::barrier(qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Accessors and metrics
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Get the instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Total number of instructions.
    pub fn size(&self) -> usize {
        self.instructions.len()
    }

    /// Check whether the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Tally of operation counts by name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.instructions {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Circuit depth: the longest dependency chain of operations.
    ///
    /// Barriers synchronize their qubits but contribute no depth.
    pub fn depth(&self) -> usize {
        self.depth_filtered(|inst| !matches!(inst.kind, InstructionKind::Barrier))
    }

    /// Circuit depth restricted to instructions matching `filter`.
    ///
    /// Non-matching instructions still propagate dependencies between
    /// wires but do not lengthen the chain, so `depth_filtered` over a
    /// single gate type reports how many sequential layers of that gate
    /// the circuit contains.
    pub fn depth_filtered<F>(&self, filter: F) -> usize
    where
        F: Fn(&Instruction) -> bool,
    {
        let num_wires = (self.num_qubits + self.num_clbits) as usize;
        let mut wire_depth = vec![0usize; num_wires];
        let mut max_depth = 0usize;

        for inst in &self.instructions {
            let weight = usize::from(filter(inst));
            let level = inst
                .qubits
                .iter()
                .map(|q| wire_depth[q.index()])
                .chain(
                    inst.clbits
                        .iter()
                        .map(|c| wire_depth[self.num_qubits as usize + c.index()]),
                )
                .max()
                .unwrap_or(0)
                + weight;

            for q in &inst.qubits {
                wire_depth[q.index()] = level;
            }
            for c in &inst.clbits {
                wire_depth[self.num_qubits as usize + c.index()] = level;
            }
            max_depth = max_depth.max(level);
        }

        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test", 3, 2);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert!(circuit.is_empty());
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new("bell", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.size(), 4);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }

    #[test]
    fn test_out_of_range() {
        let mut circuit = Circuit::new("test", 2, 0);
        let err = circuit.h(QubitId(2)).unwrap_err();
        assert_eq!(
            err,
            IrError::QubitOutOfRange {
                qubit: QubitId(2),
                num_qubits: 2
            }
        );
    }

    #[test]
    fn test_duplicate_qubit() {
        let mut circuit = Circuit::new("test", 2, 0);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_arity_mismatch() {
        let mut circuit = Circuit::new("test", 3, 0);
        let err = circuit
            .push(Instruction::gate(Gate::CX, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::ArityMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_count_ops() {
        let mut circuit = Circuit::new("test", 3, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.cz(QubitId(0), QubitId(1)).unwrap();
        circuit.cz(QubitId(1), QubitId(2)).unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts.get("h").copied(), Some(1));
        assert_eq!(counts.get("cz").copied(), Some(2));
        // Absent names tally to zero on the caller side.
        assert_eq!(counts.get("cx").copied().unwrap_or(0), 0);
    }

    #[test]
    fn test_parallel_gates_depth() {
        let mut circuit = Circuit::new("test", 4, 0);
        for i in 0..4 {
            circuit.h(QubitId(i)).unwrap();
        }
        assert_eq!(circuit.depth(), 1);
    }

    #[test]
    fn test_filtered_depth() {
        // cz(0,1); h(1); cz(1,2): two sequential CZ layers joined
        // through the Hadamard on qubit 1.
        let mut circuit = Circuit::new("test", 3, 0);
        circuit.cz(QubitId(0), QubitId(1)).unwrap();
        circuit.h(QubitId(1)).unwrap();
        circuit.cz(QubitId(1), QubitId(2)).unwrap();

        assert_eq!(circuit.depth(), 3);
        assert_eq!(circuit.depth_filtered(|i| i.name() == "cz"), 2);
        assert_eq!(circuit.depth_filtered(|i| i.name() == "cx"), 0);
    }

    #[test]
    fn test_barrier_depth() {
        let mut circuit = Circuit::new("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier([QubitId(0), QubitId(1)]).unwrap();
        circuit.h(QubitId(1)).unwrap();

        // Barrier forces the second H after the first without counting.
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_measure_all_grows_creg() {
        let mut circuit = Circuit::new("test", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.count_ops().get("measure").copied(), Some(3));
    }
}
