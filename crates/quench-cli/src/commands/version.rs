//! Show version information.

use console::style;

pub fn execute() {
    println!(
        "{} {}",
        style("quench").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("benchmark gym for remote quantum-circuit transpilation");
}
