//! `OpenQASM` 2.0 reader and writer for Quench.
//!
//! The benchmark suite stores its sample circuits as QASM 2.0 text files
//! (`qft_N100.qasm` and friends), and the transpiler service both accepts
//! and returns programs in the same format. This crate covers the subset
//! those programs use:
//!
//! | Feature | Example |
//! |---------|---------|
//! | Version declaration | `OPENQASM 2.0;` |
//! | Includes | `include "qelib1.inc";` |
//! | Register declarations | `qreg q[100];`, `creg c[99];` |
//! | Standard gates | `h q[0];`, `cz q[0], q[1];` |
//! | Parameterized gates | `cp(pi/4) q[1], q[0];` |
//! | Register broadcast | `h q;`, `measure q -> c;` |
//! | Measurement | `measure q[0] -> c[0];` |
//! | Barrier / reset | `barrier q;`, `reset q[0];` |
//!
//! Custom `gate` definitions, `opaque` declarations and `if` statements
//! are rejected with [`ParseError::Unsupported`].
//!
//! # Example
//!
//! ```rust
//! use quench_qasm2::{emit, parse};
//!
//! let qasm = r#"
//!     OPENQASM 2.0;
//!     include "qelib1.inc";
//!     qreg q[2];
//!     creg c[2];
//!     h q[0];
//!     cx q[0], q[1];
//!     measure q -> c;
//! "#;
//!
//! let circuit = parse(qasm).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.count_ops().get("cx").copied(), Some(1));
//!
//! let emitted = emit(&circuit);
//! assert!(emitted.contains("cx q[0], q[1];"));
//! ```

mod ast;
mod emitter;
mod error;
mod lexer;
mod parser;

use std::path::Path;

use quench_ir::Circuit;

pub use emitter::emit;
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_ast};

// Re-export AST types for callers that inspect programs structurally.
pub mod syntax {
    pub use crate::ast::*;
}

/// Read and parse a QASM 2.0 circuit file.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Circuit> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}
