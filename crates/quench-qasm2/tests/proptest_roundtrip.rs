//! Property-based tests for QASM 2.0 round-trip conversion.
//!
//! Tests that circuit → QASM → circuit preserves structure and the
//! metrics the benchmark records are built from.

use proptest::prelude::*;
use quench_ir::{Circuit, ClbitId, QubitId};
use quench_qasm2::{emit, parse};

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Z(u32),
    Rz(u32, f64),
    Cx(u32, u32),
    Cz(u32, u32),
    Cp(u32, u32, f64),
    Measure(u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            GateOp::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            GateOp::X(q) => {
                let _ = circuit.x(QubitId(q));
            }
            GateOp::Z(q) => {
                let _ = circuit.z(QubitId(q));
            }
            GateOp::Rz(q, theta) => {
                let _ = circuit.rz(theta, QubitId(q));
            }
            GateOp::Cx(q1, q2) => {
                if q1 != q2 {
                    let _ = circuit.cx(QubitId(q1), QubitId(q2));
                }
            }
            GateOp::Cz(q1, q2) => {
                if q1 != q2 {
                    let _ = circuit.cz(QubitId(q1), QubitId(q2));
                }
            }
            GateOp::Cp(q1, q2, theta) => {
                if q1 != q2 {
                    let _ = circuit.cp(theta, QubitId(q1), QubitId(q2));
                }
            }
            GateOp::Measure(q) => {
                let _ = circuit.measure(QubitId(q), ClbitId(q));
            }
        }
    }
}

/// Generate a random gate operation for a circuit with `num_qubits` qubits.
fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let angle = -10.0..10.0f64;
    if num_qubits < 2 {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rz(q, t)),
            (0..num_qubits).prop_map(GateOp::Measure),
        ]
        .boxed()
    } else {
        prop_oneof![
            (0..num_qubits).prop_map(GateOp::H),
            (0..num_qubits).prop_map(GateOp::X),
            (0..num_qubits).prop_map(GateOp::Z),
            (0..num_qubits, angle.clone()).prop_map(|(q, t)| GateOp::Rz(q, t)),
            (0..num_qubits, 0..num_qubits).prop_map(|(a, b)| GateOp::Cx(a, b)),
            (0..num_qubits, 0..num_qubits).prop_map(|(a, b)| GateOp::Cz(a, b)),
            (0..num_qubits, 0..num_qubits, angle).prop_map(|(a, b, t)| GateOp::Cp(a, b, t)),
            (0..num_qubits).prop_map(GateOp::Measure),
        ]
        .boxed()
    }
}

/// Generate a random simple circuit for property testing.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=6).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 1..=24).prop_map(move |ops| {
            let mut circuit = Circuit::new("prop", num_qubits, num_qubits);
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn roundtrip_preserves_shape(circuit in arb_circuit()) {
        let qasm = emit(&circuit);
        let reparsed = parse(&qasm).expect("emitted QASM must parse");

        prop_assert_eq!(reparsed.num_qubits(), circuit.num_qubits());
        prop_assert_eq!(reparsed.num_clbits(), circuit.num_clbits());
        prop_assert_eq!(reparsed.size(), circuit.size());
    }

    #[test]
    fn roundtrip_preserves_metrics(circuit in arb_circuit()) {
        let reparsed = parse(&emit(&circuit)).expect("emitted QASM must parse");

        prop_assert_eq!(reparsed.count_ops(), circuit.count_ops());
        prop_assert_eq!(reparsed.depth(), circuit.depth());
        prop_assert_eq!(
            reparsed.depth_filtered(|i| i.name() == "cz"),
            circuit.depth_filtered(|i| i.name() == "cz")
        );
    }

    #[test]
    fn roundtrip_preserves_instructions(circuit in arb_circuit()) {
        let reparsed = parse(&emit(&circuit)).expect("emitted QASM must parse");
        prop_assert_eq!(reparsed.instructions(), circuit.instructions());
    }
}
