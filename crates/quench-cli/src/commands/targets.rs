//! List built-in target device presets.

use anyhow::Result;
use console::style;

use quench_target::Target;

pub fn execute() -> Result<()> {
    println!("{}", style("Available target presets:").bold());

    for name in Target::preset_names() {
        let target = Target::preset(name, 133)?;
        println!(
            "  {:<12} {:>4} qubits  {:>5} edges  2q gate: {:<4}  basis: {}",
            style(name).cyan(),
            target.num_qubits(),
            target.topology().edges().len(),
            style(target.two_qubit_gate()).yellow(),
            target.basis().gates().join(", ")
        );
    }

    println!("\nQubit count and coupling edges are configurable; see `run --config`.");
    Ok(())
}
