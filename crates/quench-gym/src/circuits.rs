//! Sample circuit generators for the benchmark suite.
//!
//! All generators are deterministic: randomized families take an explicit
//! seed, so the suite files on disk and the programmatically built cases
//! are reproducible across runs and machines.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quench_ir::{Circuit, ClbitId, IrResult, QubitId};
use quench_target::Topology;

use crate::error::GymResult;

/// Seed baked into the quantum-volume suite file name.
pub const QV_SEED: u64 = 12345;
/// Seed for the EfficientSU2 ansatz angles.
pub const SU2_SEED: u64 = 170;
/// Seed for the QAOA graph and layer angles.
pub const QAOA_SEED: u64 = 241;

/// Quantum Fourier transform over `n` qubits, without measurements.
pub fn qft(n: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new(format!("qft_{n}"), n, 0);

    for i in 0..n {
        circuit.h(QubitId(i))?;
        for j in (i + 1)..n {
            let angle = PI / f64::from(1 << (j - i));
            circuit.cp(angle, QubitId(j), QubitId(i))?;
        }
    }

    // Bit-reversal swaps
    for i in 0..n / 2 {
        circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
    }

    Ok(circuit)
}

/// Quantum Volume model circuit: `n` layers of random two-qubit blocks
/// over a random qubit pairing per layer.
pub fn quantum_volume(n: u32, seed: u64) -> IrResult<Circuit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut circuit = Circuit::new(format!("qv_{n}"), n, n);

    for _layer in 0..n {
        let mut order: Vec<u32> = (0..n).collect();
        order.shuffle(&mut rng);

        for pair in order.chunks_exact(2) {
            let (q1, q2) = (QubitId(pair[0]), QubitId(pair[1]));

            // Random SU(4) block as 1q rotations around a CX core. Not a
            // full Haar sample, but enough structure to stress routing.
            circuit.rz(rng.gen_range(0.0..2.0 * PI), q1)?;
            circuit.ry(rng.gen_range(0.0..2.0 * PI), q1)?;
            circuit.rz(rng.gen_range(0.0..2.0 * PI), q2)?;
            circuit.ry(rng.gen_range(0.0..2.0 * PI), q2)?;
            circuit.cx(q1, q2)?;
            circuit.ry(rng.gen_range(0.0..2.0 * PI), q1)?;
            circuit.ry(rng.gen_range(0.0..2.0 * PI), q2)?;
        }
    }

    circuit.measure_all()?;
    Ok(circuit)
}

/// Bernstein-Vazirani circuit whose secret string is all ones.
///
/// Qubit `n - 1` is the phase-kickback ancilla; the other `n - 1` qubits
/// are measured.
pub fn bv_all_ones(n: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new(format!("bv_{n}"), n, n.saturating_sub(1));
    let ancilla = QubitId(n - 1);

    circuit.x(ancilla)?;
    for i in 0..n {
        circuit.h(QubitId(i))?;
    }
    for i in 0..n - 1 {
        circuit.cx(QubitId(i), ancilla)?;
    }
    for i in 0..n - 1 {
        circuit.h(QubitId(i))?;
    }
    for i in 0..n - 1 {
        circuit.measure(QubitId(i), ClbitId(i))?;
    }

    Ok(circuit)
}

/// A BV-shaped circuit that a correct optimizer collapses to a single X
/// and Z on the ancilla: the CX ladder is applied and immediately
/// mirrored, so every two-qubit gate cancels.
pub fn trivial_bvlike(n: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new(format!("bvlike_{n}"), n, 0);
    let ancilla = QubitId(n - 1);

    for i in 0..n - 1 {
        circuit.cx(QubitId(i), ancilla)?;
    }
    circuit.x(ancilla)?;
    circuit.z(ancilla)?;
    for i in (0..n - 1).rev() {
        circuit.cx(QubitId(i), ancilla)?;
    }

    Ok(circuit)
}

/// EfficientSU2-style hardware-efficient ansatz with circular
/// entanglement and seeded, bound rotation angles.
pub fn efficient_su2(n: u32, reps: u32, seed: u64) -> IrResult<Circuit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut circuit = Circuit::new(format!("su2_{n}"), n, 0);

    let mut rotation_layer = |circuit: &mut Circuit, rng: &mut SmallRng| -> IrResult<()> {
        for i in 0..n {
            circuit.ry(rng.gen_range(0.0..2.0 * PI), QubitId(i))?;
        }
        for i in 0..n {
            circuit.rz(rng.gen_range(0.0..2.0 * PI), QubitId(i))?;
        }
        Ok(())
    };

    rotation_layer(&mut circuit, &mut rng)?;
    for _rep in 0..reps {
        // Circular entanglement: wrap-around first, then the chain.
        if n > 1 {
            circuit.cx(QubitId(n - 1), QubitId(0))?;
        }
        for i in 0..n.saturating_sub(1) {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        rotation_layer(&mut circuit, &mut rng)?;
    }

    Ok(circuit)
}

/// Trotterized Heisenberg-model circuit on a `rows` x `cols` square
/// lattice: XX+YY+ZZ interaction on every lattice edge plus a Z field
/// per site, repeated `steps` times with step size `dt`.
pub fn square_heisenberg(rows: u32, cols: u32, steps: u32, dt: f64) -> IrResult<Circuit> {
    let lattice = Topology::grid(rows, cols);
    let n = lattice.num_qubits();
    let mut circuit = Circuit::new(format!("square_heisenberg_{n}"), n, 0);
    let angle = 2.0 * dt;

    for _step in 0..steps {
        for &(a, b) in lattice.edges() {
            circuit.rxx(angle, QubitId(a), QubitId(b))?;
            circuit.ryy(angle, QubitId(a), QubitId(b))?;
            circuit.rzz(angle, QubitId(a), QubitId(b))?;
        }
        for q in 0..n {
            circuit.rz(angle, QubitId(q))?;
        }
    }

    Ok(circuit)
}

/// QAOA circuit for MaxCut on a seeded Barabási-Albert graph with
/// `reps` cost/mixer layers.
pub fn qaoa_barabasi_albert(n: u32, attach: u32, reps: u32, seed: u64) -> IrResult<Circuit> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = barabasi_albert(n as usize, attach as usize, &mut rng);
    let mut circuit = Circuit::new(format!("qaoa_ba_{n}"), n, 0);

    for i in 0..n {
        circuit.h(QubitId(i))?;
    }

    for _layer in 0..reps {
        let gamma = rng.gen_range(0.0..2.0 * PI);
        let beta = rng.gen_range(0.0..PI);

        for edge in graph.raw_edges() {
            let (a, b) = (edge.source(), edge.target());
            circuit.rzz(gamma, QubitId(a.index() as u32), QubitId(b.index() as u32))?;
        }
        for i in 0..n {
            circuit.rx(2.0 * beta, QubitId(i))?;
        }
    }

    Ok(circuit)
}

/// Barabási-Albert preferential-attachment graph: start from a clique of
/// `attach` nodes, then attach each new node to `attach` distinct
/// existing nodes chosen proportional to degree.
fn barabasi_albert(n: usize, attach: usize, rng: &mut SmallRng) -> UnGraph<(), ()> {
    let attach = attach.max(1).min(n.saturating_sub(1).max(1));
    let mut graph = UnGraph::with_capacity(n, n * attach);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();

    // Degree-weighted sampling pool: one entry per incident edge end.
    let mut pool: Vec<usize> = vec![];

    for i in 0..attach.min(n) {
        for j in (i + 1)..attach.min(n) {
            graph.add_edge(nodes[i], nodes[j], ());
            pool.push(i);
            pool.push(j);
        }
    }

    for new in attach..n {
        let mut targets: Vec<usize> = vec![];
        while targets.len() < attach {
            let candidate = if pool.is_empty() {
                rng.gen_range(0..new)
            } else {
                pool[rng.gen_range(0..pool.len())]
            };
            if candidate != new && !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        for &target in &targets {
            graph.add_edge(nodes[new], nodes[target], ());
            pool.push(new);
            pool.push(target);
        }
    }

    graph
}

// =============================================================================
// Suite files
// =============================================================================

/// Write the standard file-loaded circuit families under `root`, one
/// subdirectory per family, using the fixed naming convention
/// (`qft_N100.qasm`, `qv_N100_12345.qasm`, ...).
///
/// Returns the written paths.
pub fn write_suite(root: &Path, num_qubits: u32) -> GymResult<Vec<PathBuf>> {
    let mut written = vec![];

    let side = integer_sqrt(num_qubits);
    let lattice_qubits = side * side;

    let files: Vec<(&str, String, Circuit)> = vec![
        ("qft", format!("qft_N{num_qubits}.qasm"), qft(num_qubits)?),
        (
            "qv",
            format!("qv_N{num_qubits}_{QV_SEED}.qasm"),
            quantum_volume(num_qubits, QV_SEED)?,
        ),
        (
            "square-heisenberg",
            format!("square_heisenberg_N{lattice_qubits}.qasm"),
            square_heisenberg(side, side, 1, 0.1)?,
        ),
        (
            "qaoa",
            format!("qaoa_barabasi_albert_N{num_qubits}_3reps.qasm"),
            qaoa_barabasi_albert(num_qubits, 4, 3, QAOA_SEED)?,
        ),
    ];

    for (family, file_name, circuit) in files {
        let dir = root.join(family);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        std::fs::write(&path, quench_qasm2::emit(&circuit))?;
        written.push(path);
    }

    Ok(written)
}

/// Largest `s` with `s * s <= n`.
fn integer_sqrt(n: u32) -> u32 {
    let mut s = (f64::from(n)).sqrt().floor() as u32;
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    while s * s > n {
        s -= 1;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qft_shape() {
        let circuit = qft(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        let counts = circuit.count_ops();
        assert_eq!(counts.get("h").copied(), Some(5));
        assert_eq!(counts.get("cp").copied(), Some(10)); // n*(n-1)/2
        assert_eq!(counts.get("swap").copied(), Some(2));
    }

    #[test]
    fn test_quantum_volume_deterministic() {
        let c1 = quantum_volume(6, 42).unwrap();
        let c2 = quantum_volume(6, 42).unwrap();
        assert_eq!(c1.instructions(), c2.instructions());

        let c3 = quantum_volume(6, 43).unwrap();
        assert_ne!(c1.instructions(), c3.instructions());
    }

    #[test]
    fn test_quantum_volume_shape() {
        let circuit = quantum_volume(6, QV_SEED).unwrap();
        assert_eq!(circuit.num_qubits(), 6);
        // n layers of n/2 pairs, one CX per pair
        assert_eq!(circuit.count_ops().get("cx").copied(), Some(18));
        assert_eq!(circuit.count_ops().get("measure").copied(), Some(6));
    }

    #[test]
    fn test_bv_all_ones() {
        let circuit = bv_all_ones(100).unwrap();
        assert_eq!(circuit.num_qubits(), 100);
        assert_eq!(circuit.num_clbits(), 99);
        let counts = circuit.count_ops();
        assert_eq!(counts.get("cx").copied(), Some(99));
        assert_eq!(counts.get("h").copied(), Some(199));
        assert_eq!(counts.get("x").copied(), Some(1));
        assert_eq!(counts.get("measure").copied(), Some(99));
    }

    #[test]
    fn test_trivial_bvlike_mirrors() {
        let circuit = trivial_bvlike(10).unwrap();
        let counts = circuit.count_ops();
        assert_eq!(counts.get("cx").copied(), Some(18));
        assert_eq!(counts.get("x").copied(), Some(1));
        assert_eq!(counts.get("z").copied(), Some(1));

        // The second ladder is the exact mirror of the first.
        let cx: Vec<_> = circuit
            .instructions()
            .iter()
            .filter(|inst| inst.name() == "cx")
            .collect();
        assert_eq!(cx[0].qubits, cx[17].qubits);
        assert_eq!(cx[8].qubits, cx[9].qubits);
    }

    #[test]
    fn test_efficient_su2_shape() {
        let circuit = efficient_su2(8, 3, SU2_SEED).unwrap();
        let counts = circuit.count_ops();
        // (reps + 1) rotation layers of ry+rz on every qubit
        assert_eq!(counts.get("ry").copied(), Some(32));
        assert_eq!(counts.get("rz").copied(), Some(32));
        // reps circular-entanglement layers of n gates
        assert_eq!(counts.get("cx").copied(), Some(24));
    }

    #[test]
    fn test_square_heisenberg_shape() {
        let circuit = square_heisenberg(3, 3, 2, 0.1).unwrap();
        assert_eq!(circuit.num_qubits(), 9);
        // 3x3 grid has 12 edges; 2 steps
        let counts = circuit.count_ops();
        assert_eq!(counts.get("rxx").copied(), Some(24));
        assert_eq!(counts.get("ryy").copied(), Some(24));
        assert_eq!(counts.get("rzz").copied(), Some(24));
        assert_eq!(counts.get("rz").copied(), Some(18));
    }

    #[test]
    fn test_qaoa_deterministic() {
        let c1 = qaoa_barabasi_albert(12, 3, 2, QAOA_SEED).unwrap();
        let c2 = qaoa_barabasi_albert(12, 3, 2, QAOA_SEED).unwrap();
        assert_eq!(c1.instructions(), c2.instructions());
    }

    #[test]
    fn test_qaoa_layers() {
        let reps = 3;
        let circuit = qaoa_barabasi_albert(12, 3, reps, QAOA_SEED).unwrap();
        let counts = circuit.count_ops();
        assert_eq!(counts.get("h").copied(), Some(12));
        assert_eq!(counts.get("rx").copied(), Some(12 * reps as usize));
        // One rzz per graph edge per layer.
        let rzz = counts.get("rzz").copied().unwrap_or(0);
        assert_eq!(rzz % reps as usize, 0);
        assert!(rzz > 0);
    }

    #[test]
    fn test_barabasi_albert_edge_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = barabasi_albert(20, 3, &mut rng);
        assert_eq!(graph.node_count(), 20);
        // Clique of 3 (3 edges) + 17 nodes x 3 attachments
        assert_eq!(graph.edge_count(), 3 + 17 * 3);
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(100), 10);
        assert_eq!(integer_sqrt(99), 9);
        assert_eq!(integer_sqrt(1), 1);
    }

    #[test]
    fn test_write_suite() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_suite(dir.path(), 9).unwrap();
        assert_eq!(written.len(), 4);
        assert!(dir.path().join("qft/qft_N9.qasm").exists());
        assert!(dir.path().join("qv/qv_N9_12345.qasm").exists());
        assert!(dir.path().join("square-heisenberg/square_heisenberg_N9.qasm").exists());
        assert!(dir.path().join("qaoa/qaoa_barabasi_albert_N9_3reps.qasm").exists());

        // Every suite file re-parses to a non-empty circuit.
        for path in written {
            let circuit = quench_qasm2::parse_file(&path).unwrap();
            assert!(!circuit.is_empty(), "{} is empty", path.display());
        }
    }
}
