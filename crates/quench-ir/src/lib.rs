//! Circuit representation for the Quench benchmark gym.
//!
//! This crate holds the harness-side view of a quantum program: a named
//! sequence of gate, measurement, reset and barrier instructions over a
//! fixed set of qubits, together with the two queries every benchmark
//! record is built from:
//!
//! - [`Circuit::count_ops`] — operation tally by OpenQASM name
//! - [`Circuit::depth_filtered`] — longest dependency chain restricted
//!   to a gate predicate
//!
//! Transpilation itself lives behind the `TranspilerEngine` seam in
//! `quench-target`; this crate never rewrites circuits.

mod circuit;
mod error;
mod gate;
mod instruction;
mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
