//! MNA matrix assembly and solving.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::{DMatrix, DVector};

use crate::circuit::{BranchId, Circuit, NodeId};
use crate::components::Component;
use crate::error::{NodalError, Result};

/// Augmented MNA system Ax = z for one solve.
///
/// Rows `0..n` are KCL equations of the non-ground nodes, rows `n..n+m` are
/// the constraint equations of the voltage sources.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    /// Non-ground node → matrix row, assigned in ascending node order
    pub node_index: BTreeMap<NodeId, usize>,
    /// Number of non-ground nodes (n)
    pub num_nodes: usize,
    /// Number of voltage sources (m)
    pub num_sources: usize,
    /// System matrix A, (n+m)×(n+m)
    pub a: DMatrix<f64>,
    /// Source vector z = [I; E]
    pub z: DVector<f64>,
}

impl MnaSystem {
    /// Create a zeroed system for the given non-ground nodes and source count.
    pub fn new(nodes: &BTreeSet<NodeId>, num_sources: usize) -> Self {
        let node_index: BTreeMap<NodeId, usize> = nodes
            .iter()
            .filter(|n| !n.is_ground())
            .enumerate()
            .map(|(row, &node)| (node, row))
            .collect();
        let num_nodes = node_index.len();
        let size = num_nodes + num_sources;

        Self {
            node_index,
            num_nodes,
            num_sources,
            a: DMatrix::zeros(size, size),
            z: DVector::zeros(size),
        }
    }

    /// Matrix dimension n + m.
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_sources
    }

    /// Get the matrix row for a node voltage.
    /// Returns None for ground.
    pub fn node_index(&self, node: NodeId) -> Option<usize> {
        self.node_index.get(&node).copied()
    }

    /// Get the matrix row for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        self.num_nodes + branch.0
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[(row, col)] += value;
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a voltage source between two nodes with branch current at row br.
    /// V[n+] - V[n-] = E
    ///
    /// Entries accumulate, so a source whose terminals are the same node
    /// leaves an all-zero constraint row and the system becomes singular.
    pub fn stamp_voltage_source(&mut self, n_pos: Option<usize>, n_neg: Option<usize>, br: usize, voltage: f64) {
        if let Some(i) = n_pos {
            self.add(br, i, 1.0);
            self.add(i, br, 1.0);
        }
        if let Some(j) = n_neg {
            self.add(br, j, -1.0);
            self.add(j, br, -1.0);
        }
        self.z[br] = voltage;
    }

    /// Solve the system by LU decomposition with partial pivoting.
    ///
    /// Each pivot is measured against the largest entry of its own column in
    /// A. A pivot at or below `pivot_tolerance` times that scale marks the
    /// system as singular, so conductances of very different magnitude in
    /// separate columns do not trip the check.
    pub fn solve(self, pivot_tolerance: f64) -> Result<DVector<f64>> {
        let scales: Vec<f64> = self.a.column_iter().map(|col| col.amax()).collect();
        let lu = self.a.lu();

        if let Some((col, pivot)) = lu
            .u()
            .diagonal()
            .iter()
            .enumerate()
            .find(|&(col, d)| d.abs() <= scales[col] * pivot_tolerance)
        {
            tracing::debug!(col, pivot = *pivot, scale = scales[col], "singular MNA matrix");
            return Err(NodalError::SingularCircuit);
        }

        lu.solve(&self.z).ok_or(NodalError::SingularCircuit)
    }
}

/// Build the augmented MNA system for a circuit.
///
/// The current-injection block of z stays zero: the component set has no
/// independent current sources.
pub fn assemble(circuit: &Circuit) -> MnaSystem {
    let mut system = MnaSystem::new(&circuit.nodes(), circuit.num_sources());

    for component in &circuit.components {
        match component {
            Component::Resistor(r) => {
                let n1 = system.node_index(r.nodes[0]);
                let n2 = system.node_index(r.nodes[1]);
                system.stamp_conductance(n1, n2, r.conductance());
            }

            Component::VoltageSource(v) => {
                let n1 = system.node_index(v.nodes[0]);
                let n2 = system.node_index(v.nodes[1]);
                let br = system.branch_index(v.branch);
                system.stamp_voltage_source(n1, n2, br, v.voltage);
            }
        }
    }

    tracing::trace!(size = system.size(), matrix = %system.a, "assembled MNA system");
    system
}
