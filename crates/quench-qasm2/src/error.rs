//! Error types for the QASM 2.0 reader.

use thiserror::Error;

/// Errors that can occur while reading QASM 2.0.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid input).
    #[error("invalid input at line {line}: '{slice}'")]
    Lexer {
        /// 1-based source line.
        line: usize,
        /// The offending text.
        slice: String,
    },

    /// Unexpected token.
    #[error("unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// 1-based source line.
        line: usize,
        /// What the parser expected.
        expected: String,
        /// What it found instead.
        found: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Not a supported OPENQASM version.
    #[error("unsupported OPENQASM version: {0}")]
    UnsupportedVersion(String),

    /// Reference to an undeclared register.
    #[error("undeclared register: {0}")]
    UndeclaredRegister(String),

    /// Register declared twice.
    #[error("duplicate register declaration: {0}")]
    DuplicateRegister(String),

    /// Unknown gate name or wrong parameter count.
    #[error("unknown gate or bad parameter count: {0}")]
    UnknownGate(String),

    /// Register index out of bounds.
    #[error("index {index} out of bounds for register '{register}' of size {size}")]
    IndexOutOfBounds {
        /// Register name.
        register: String,
        /// Offending index.
        index: u32,
        /// Register size.
        size: u32,
    },

    /// Registers of unequal size used in one broadcast statement.
    #[error("cannot broadcast registers of different sizes in '{statement}'")]
    BroadcastMismatch {
        /// The statement kind being broadcast.
        statement: String,
    },

    /// Valid QASM 2.0 the reader deliberately does not handle.
    #[error("unsupported QASM 2.0 construct: {0}")]
    Unsupported(String),

    /// IR error during circuit construction.
    #[error("circuit error: {0}")]
    Circuit(#[from] quench_ir::IrError),

    /// I/O error reading a circuit file.
    #[error("failed to read circuit file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
