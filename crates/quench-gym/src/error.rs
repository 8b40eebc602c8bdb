//! Error types for the benchmark gym.

use thiserror::Error;

/// Errors that can occur while running benchmark workouts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GymError {
    /// I/O error (suite files, config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Target device construction failed.
    #[error("invalid target: {0}")]
    Target(#[from] quench_target::TargetError),

    /// A suite circuit file did not parse.
    #[error("circuit file error: {0}")]
    Qasm(#[from] quench_qasm2::ParseError),

    /// Circuit construction failed.
    #[error("circuit error: {0}")]
    Circuit(#[from] quench_ir::IrError),

    /// The transpiler engine failed; propagated unmodified.
    #[error(transparent)]
    Engine(#[from] quench_target::EngineError),

    /// The engine returned an empty circuit.
    #[error("case '{case}' produced an empty transpiled circuit")]
    EmptyResult {
        /// The benchmark case that failed.
        case: String,
    },

    /// Request for a benchmark case that does not exist.
    #[error("unknown benchmark case: {0}")]
    UnknownCase(String),
}

/// Result type for gym operations.
pub type GymResult<T> = Result<T, GymError>;
