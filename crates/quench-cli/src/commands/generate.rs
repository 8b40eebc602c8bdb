//! Generate the benchmark circuit suite on disk.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use quench_gym::circuits;

pub fn execute(qubits: u32, out: &Path) -> Result<()> {
    let written = circuits::write_suite(out, qubits)
        .with_context(|| format!("Failed to write suite under {}", out.display()))?;

    println!(
        "{} Wrote {} circuit files under {}:",
        style("✓").green().bold(),
        written.len(),
        out.display()
    );
    for path in written {
        println!("  {}", style(path.display()).cyan());
    }

    Ok(())
}
