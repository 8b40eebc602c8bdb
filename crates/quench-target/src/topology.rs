//! Qubit connectivity topology.

use petgraph::graph::UnGraph;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{TargetError, TargetResult};

/// The coupling graph of a target device.
///
/// All edges are bidirectional: if `(a, b)` is present, both `a → b` and
/// `b → a` are valid two-qubit interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    /// Number of physical qubits.
    num_qubits: u32,
    /// Coupling edges (pairs of connected qubits).
    edges: Vec<(u32, u32)>,
    /// Adjacency index, rebuilt from `edges` after deserialization.
    #[serde(skip)]
    adjacency: FxHashMap<u32, Vec<u32>>,
}

impl Topology {
    fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            edges: vec![],
            adjacency: FxHashMap::default(),
        }
    }

    fn add_edge(&mut self, q1: u32, q2: u32) {
        if q1 == q2 || self.is_connected(q1, q2) {
            return;
        }
        self.edges.push((q1, q2));
        self.adjacency.entry(q1).or_default().push(q2);
        self.adjacency.entry(q2).or_default().push(q1);
    }

    /// Create a linear chain topology (0-1-2-...).
    pub fn linear(n: u32) -> Self {
        let mut topology = Self::new(n);
        for i in 0..n.saturating_sub(1) {
            topology.add_edge(i, i + 1);
        }
        topology
    }

    /// Create a rectangular grid topology in row-major order.
    pub fn grid(rows: u32, cols: u32) -> Self {
        let mut topology = Self::new(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let q = r * cols + c;
                if c + 1 < cols {
                    topology.add_edge(q, q + 1);
                }
                if r + 1 < rows {
                    topology.add_edge(q, q + cols);
                }
            }
        }
        topology
    }

    /// Create a star topology (qubit 0 connected to all others).
    pub fn star(n: u32) -> Self {
        let mut topology = Self::new(n);
        for i in 1..n {
            topology.add_edge(0, i);
        }
        topology
    }

    /// Create a fully connected topology.
    pub fn full(n: u32) -> Self {
        let mut topology = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                topology.add_edge(i, j);
            }
        }
        topology
    }

    /// Create a topology from an explicit edge list.
    pub fn custom(num_qubits: u32, edges: impl IntoIterator<Item = (u32, u32)>) -> TargetResult<Self> {
        let mut topology = Self::new(num_qubits);
        for (q1, q2) in edges {
            if q1 >= num_qubits || q2 >= num_qubits {
                return Err(TargetError::EdgeOutOfRange {
                    edge: (q1, q2),
                    num_qubits,
                });
            }
            topology.add_edge(q1, q2);
        }
        Ok(topology)
    }

    /// Rebuild the adjacency index from the edge list.
    ///
    /// Must be called after deserialization to restore O(1) connectivity
    /// lookups.
    pub fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();
        for &(q1, q2) in &self.edges {
            self.adjacency.entry(q1).or_default().push(q2);
            self.adjacency.entry(q2).or_default().push(q1);
        }
    }

    /// Get the number of physical qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the coupling edges.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Check if two qubits are directly connected.
    #[inline]
    pub fn is_connected(&self, q1: u32, q2: u32) -> bool {
        self.adjacency
            .get(&q1)
            .is_some_and(|neighbors| neighbors.contains(&q2))
    }

    /// Get neighbors of a qubit.
    pub fn neighbors(&self, qubit: u32) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .get(&qubit)
            .map(|v| v.iter().copied())
            .into_iter()
            .flatten()
    }

    /// View the topology as a petgraph undirected graph.
    ///
    /// Node indices match physical qubit numbers.
    pub fn graph(&self) -> UnGraph<u32, ()> {
        let mut graph = UnGraph::with_capacity(self.num_qubits as usize, self.edges.len());
        let nodes: Vec<_> = (0..self.num_qubits).map(|q| graph.add_node(q)).collect();
        for &(q1, q2) in &self.edges {
            graph.add_edge(nodes[q1 as usize], nodes[q2 as usize], ());
        }
        graph
    }
}
