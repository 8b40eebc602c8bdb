//! Quantum gate types.
//!
//! Gates carry concrete angles only. The gym always sends fully bound
//! circuits to the transpiler service (OpenQASM 2.0 cannot express
//! symbolic parameters), so there is no symbolic parameter machinery.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Standard gates with known semantics, OpenQASM naming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate.
    P(f64),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,
    /// Echoed cross-resonance gate.
    ECR,
    /// Controlled rotation around X.
    CRx(f64),
    /// Controlled rotation around Y.
    CRy(f64),
    /// Controlled rotation around Z.
    CRz(f64),
    /// Controlled phase gate.
    CP(f64),
    /// XX rotation gate.
    RXX(f64),
    /// YY rotation gate.
    RYY(f64),
    /// ZZ rotation gate.
    RZZ(f64),

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,
}

impl Gate {
    /// Get the OpenQASM name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::SX => "sx",
            Gate::SXdg => "sxdg",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::P(_) => "p",
            Gate::U(_, _, _) => "u",
            Gate::CX => "cx",
            Gate::CY => "cy",
            Gate::CZ => "cz",
            Gate::CH => "ch",
            Gate::Swap => "swap",
            Gate::ISwap => "iswap",
            Gate::ECR => "ecr",
            Gate::CRx(_) => "crx",
            Gate::CRy(_) => "cry",
            Gate::CRz(_) => "crz",
            Gate::CP(_) => "cp",
            Gate::RXX(_) => "rxx",
            Gate::RYY(_) => "ryy",
            Gate::RZZ(_) => "rzz",
            Gate::CCX => "ccx",
            Gate::CSwap => "cswap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg
            | Gate::SX
            | Gate::SXdg
            | Gate::Rx(_)
            | Gate::Ry(_)
            | Gate::Rz(_)
            | Gate::P(_)
            | Gate::U(_, _, _) => 1,

            Gate::CX
            | Gate::CY
            | Gate::CZ
            | Gate::CH
            | Gate::Swap
            | Gate::ISwap
            | Gate::ECR
            | Gate::CRx(_)
            | Gate::CRy(_)
            | Gate::CRz(_)
            | Gate::CP(_)
            | Gate::RXX(_)
            | Gate::RYY(_)
            | Gate::RZZ(_) => 2,

            Gate::CCX | Gate::CSwap => 3,
        }
    }

    /// Check if this gate operates on exactly two qubits.
    #[inline]
    pub fn is_two_qubit(&self) -> bool {
        self.num_qubits() == 2
    }

    /// Get the angle parameters of this gate.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Gate::Rx(t) | Gate::Ry(t) | Gate::Rz(t) | Gate::P(t) => vec![*t],
            Gate::CRx(t) | Gate::CRy(t) | Gate::CRz(t) | Gate::CP(t) => vec![*t],
            Gate::RXX(t) | Gate::RYY(t) | Gate::RZZ(t) => vec![*t],
            Gate::U(t, p, l) => vec![*t, *p, *l],
            _ => vec![],
        }
    }

    /// Look up a gate by OpenQASM name and parameter list.
    ///
    /// Accepts the legacy qelib1 aliases `u1`, `u2`, `u3` and `cu1`.
    /// Returns `None` for unknown names or a wrong parameter count.
    pub fn from_name(name: &str, params: &[f64]) -> Option<Gate> {
        let gate = match (name, params) {
            ("id", []) => Gate::I,
            ("x", []) => Gate::X,
            ("y", []) => Gate::Y,
            ("z", []) => Gate::Z,
            ("h", []) => Gate::H,
            ("s", []) => Gate::S,
            ("sdg", []) => Gate::Sdg,
            ("t", []) => Gate::T,
            ("tdg", []) => Gate::Tdg,
            ("sx", []) => Gate::SX,
            ("sxdg", []) => Gate::SXdg,
            ("rx", [t]) => Gate::Rx(*t),
            ("ry", [t]) => Gate::Ry(*t),
            ("rz", [t]) => Gate::Rz(*t),
            ("p" | "u1", [t]) => Gate::P(*t),
            ("u2", [p, l]) => Gate::U(PI / 2.0, *p, *l),
            ("u" | "u3", [t, p, l]) => Gate::U(*t, *p, *l),
            ("cx", []) => Gate::CX,
            ("cy", []) => Gate::CY,
            ("cz", []) => Gate::CZ,
            ("ch", []) => Gate::CH,
            ("swap", []) => Gate::Swap,
            ("iswap", []) => Gate::ISwap,
            ("ecr", []) => Gate::ECR,
            ("crx", [t]) => Gate::CRx(*t),
            ("cry", [t]) => Gate::CRy(*t),
            ("crz", [t]) => Gate::CRz(*t),
            ("cp" | "cu1", [t]) => Gate::CP(*t),
            ("rxx", [t]) => Gate::RXX(*t),
            ("ryy", [t]) => Gate::RYY(*t),
            ("rzz", [t]) => Gate::RZZ(*t),
            ("ccx", []) => Gate::CCX,
            ("cswap", []) => Gate::CSwap,
            _ => return None,
        };
        Some(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(Gate::H.name(), "h");
        assert_eq!(Gate::H.num_qubits(), 1);
        assert_eq!(Gate::CZ.num_qubits(), 2);
        assert!(Gate::CZ.is_two_qubit());
        assert!(!Gate::CCX.is_two_qubit());
        assert_eq!(Gate::CCX.num_qubits(), 3);
    }

    #[test]
    fn test_params() {
        assert!(Gate::CX.params().is_empty());
        assert_eq!(Gate::Rz(1.5).params(), vec![1.5]);
        assert_eq!(Gate::U(0.1, 0.2, 0.3).params(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Gate::from_name("cz", &[]), Some(Gate::CZ));
        assert_eq!(Gate::from_name("rx", &[1.0]), Some(Gate::Rx(1.0)));
        assert_eq!(Gate::from_name("cu1", &[0.5]), Some(Gate::CP(0.5)));
        assert_eq!(Gate::from_name("u1", &[0.5]), Some(Gate::P(0.5)));
        assert_eq!(Gate::from_name("nope", &[]), None);
        // Wrong arity is rejected, not coerced.
        assert_eq!(Gate::from_name("rx", &[]), None);
        assert_eq!(Gate::from_name("h", &[1.0]), None);
    }

    #[test]
    fn test_u2_lowering() {
        let g = Gate::from_name("u2", &[0.1, 0.2]).unwrap();
        assert_eq!(g, Gate::U(PI / 2.0, 0.1, 0.2));
    }
}
