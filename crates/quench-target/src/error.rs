//! Error types for target descriptions and transpiler engines.

use thiserror::Error;

/// Errors in target device construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TargetError {
    /// Coupling edge references a qubit outside the device.
    #[error("edge {edge:?} out of range for device with {num_qubits} qubits")]
    EdgeOutOfRange {
        /// The offending edge.
        edge: (u32, u32),
        /// Number of qubits on the device.
        num_qubits: u32,
    },

    /// Basis contains no two-qubit entangling gate.
    #[error("basis gate set contains no two-qubit gate")]
    NoTwoQubitGate,

    /// Unknown device preset name.
    #[error("unknown target preset: {0}")]
    UnknownPreset(String),
}

/// Result type for target operations.
pub type TargetResult<T> = Result<T, TargetError>;

/// Errors surfaced by a transpiler engine.
///
/// Engines translate their transport-level failures into these variants;
/// the harness propagates them unmodified (no retries, no recovery).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The request to the engine failed (transport, auth, protocol).
    #[error("transpiler request failed: {0}")]
    Request(String),

    /// The engine accepted the circuit but the transpilation task failed.
    #[error("transpilation task failed: {0}")]
    TaskFailed(String),

    /// The engine returned a program the harness cannot read back.
    #[error("transpiler returned an invalid program: {0}")]
    InvalidProgram(String),

    /// The engine did not reach a terminal state in time.
    #[error("transpilation timed out after {waited_secs}s")]
    Timeout {
        /// Seconds waited before giving up.
        waited_secs: u64,
    },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
