//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur when building circuits.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the circuit.
    #[error("qubit {qubit:?} out of range for circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Classical bit index is outside the circuit.
    #[error("classical bit {clbit:?} out of range for circuit with {num_clbits} bits")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// The same qubit was used twice in one operation.
    #[error("duplicate qubit {qubit:?} in '{gate}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the operation.
        gate: String,
    },

    /// Operation received the wrong number of qubits.
    #[error("'{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
