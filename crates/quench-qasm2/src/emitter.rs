//! QASM 2.0 emitter for serializing circuits.

use quench_ir::{Circuit, Instruction, InstructionKind};

/// Emit a circuit as QASM 2.0 source code.
///
/// Registers are flattened to a single `q`/`c` pair and every argument is
/// emitted indexed, so output from [`emit`] always re-parses to the same
/// flat circuit. Angles use the shortest decimal form that round-trips.
pub fn emit(circuit: &Circuit) -> String {
    let mut output = String::new();

    output.push_str("OPENQASM 2.0;\n");
    output.push_str("include \"qelib1.inc\";\n");

    if circuit.num_qubits() > 0 {
        output.push_str(&format!("qreg q[{}];\n", circuit.num_qubits()));
    }
    if circuit.num_clbits() > 0 {
        output.push_str(&format!("creg c[{}];\n", circuit.num_clbits()));
    }

    for instruction in circuit.instructions() {
        emit_instruction(&mut output, instruction);
    }

    output
}

fn emit_instruction(output: &mut String, instruction: &Instruction) {
    match &instruction.kind {
        InstructionKind::Gate(gate) => {
            let params = gate.params();
            let qubits = qubit_list(instruction);
            if params.is_empty() {
                output.push_str(&format!("{} {};\n", gate.name(), qubits));
            } else {
                let params = params
                    .iter()
                    .map(|p| format_angle(*p))
                    .collect::<Vec<_>>()
                    .join(",");
                output.push_str(&format!("{}({}) {};\n", gate.name(), params, qubits));
            }
        }
        InstructionKind::Measure => {
            output.push_str(&format!(
                "measure q[{}] -> c[{}];\n",
                instruction.qubits[0].0, instruction.clbits[0].0
            ));
        }
        InstructionKind::Reset => {
            output.push_str(&format!("reset q[{}];\n", instruction.qubits[0].0));
        }
        InstructionKind::Barrier => {
            output.push_str(&format!("barrier {};\n", qubit_list(instruction)));
        }
    }
}

fn qubit_list(instruction: &Instruction) -> String {
    instruction
        .qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format an angle so it survives a parse round-trip.
///
/// Rust's shortest-representation float formatting is already lossless;
/// the only care needed is forcing a decimal point so the token lexes as
/// a float and not an integer exponent base.
fn format_angle(value: f64) -> String {
    let formatted = format!("{value}");
    if formatted.contains('.') || formatted.contains('e') || formatted.contains("inf") {
        formatted
    } else {
        format!("{formatted}.0")
    }
}
