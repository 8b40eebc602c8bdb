//! Syntax tree for `OpenQASM` 2.0 programs.
//!
//! Gate parameters are folded to concrete values during parsing: QASM 2
//! parameter expressions are always constant arithmetic over literals and
//! `pi`, so nothing symbolic survives to this level.

/// A parsed QASM 2.0 program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Declared version (e.g. "2.0").
    pub version: String,
    /// Included files (recorded, not resolved; `qelib1.inc` is implied).
    pub includes: Vec<String>,
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A single QASM 2.0 statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Quantum register declaration: `qreg q[5];`
    QregDecl {
        /// Register name.
        name: String,
        /// Register size.
        size: u32,
    },
    /// Classical register declaration: `creg c[5];`
    CregDecl {
        /// Register name.
        name: String,
        /// Register size.
        size: u32,
    },
    /// Gate application: `cp(pi/4) q[1], q[0];`
    Gate {
        /// Gate name.
        name: String,
        /// Evaluated parameter values.
        params: Vec<f64>,
        /// Quantum arguments.
        args: Vec<Argument>,
    },
    /// Measurement: `measure q[0] -> c[0];`
    Measure {
        /// Source qubit argument.
        qubit: Argument,
        /// Destination classical argument.
        clbit: Argument,
    },
    /// Barrier: `barrier q;`
    Barrier {
        /// Arguments the barrier spans.
        args: Vec<Argument>,
    },
    /// Reset: `reset q[0];`
    Reset {
        /// Qubit argument.
        arg: Argument,
    },
}

/// A register reference, optionally indexed.
///
/// `q` refers to a whole register (broadcast), `q[3]` to a single bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Register name.
    pub register: String,
    /// Optional element index.
    pub index: Option<u32>,
}

impl Argument {
    /// Reference a whole register.
    pub fn whole(register: impl Into<String>) -> Self {
        Self {
            register: register.into(),
            index: None,
        }
    }

    /// Reference a single register element.
    pub fn indexed(register: impl Into<String>, index: u32) -> Self {
        Self {
            register: register.into(),
            index: Some(index),
        }
    }
}
