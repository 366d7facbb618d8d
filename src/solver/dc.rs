//! DC operating point of a resistive circuit.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::circuit::{Circuit, NodeId};
use crate::error::{NodalError, Result};

use super::mna::assemble;
use super::DEFAULT_PIVOT_TOLERANCE;

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Relative pivot magnitude below which the MNA matrix counts as singular.
    pub pivot_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative pivot tolerance.
    ///
    /// Larger values flag nearly-floating nodes as singular instead of
    /// returning huge voltages.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }
}

/// Result of a DC solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveOutput {
    /// Non-ground nodes in matrix order (ascending)
    pub nodes: Vec<NodeId>,
    /// Voltage of every referenced node; ground is always present at 0.0
    pub node_voltages: BTreeMap<NodeId, f64>,
    /// Branch current of each voltage source, in source order.
    /// Positive current enters the source at its negative terminal.
    pub source_currents: Vec<f64>,
    /// Voltage drop V+ - V- of each resistor, in resistor order
    pub resistor_voltages: Vec<f64>,
    /// Current of each resistor (positive flows from + to -), in resistor order
    pub resistor_currents: Vec<f64>,
    /// Power absorbed by each resistor, in resistor order
    pub resistor_powers: Vec<f64>,
}

impl SolveOutput {
    /// Voltage at a node, if the node appears in the circuit.
    pub fn voltage(&self, node: NodeId) -> Option<f64> {
        self.node_voltages.get(&node).copied()
    }

    /// Total power absorbed by all resistors.
    pub fn total_power(&self) -> f64 {
        self.resistor_powers.iter().sum()
    }
}

/// Solve a circuit with the default configuration.
pub fn solve(circuit: &Circuit) -> Result<SolveOutput> {
    solve_with_config(circuit, &SolverConfig::default())
}

/// Solve a circuit for node voltages, source currents and resistor power.
///
/// The circuit is not modified. Either a complete [`SolveOutput`] is
/// returned or an error, never a partial result.
pub fn solve_with_config(circuit: &Circuit, config: &SolverConfig) -> Result<SolveOutput> {
    let system = assemble(circuit);
    let n = system.num_nodes;
    let m = system.num_sources;
    let _span = tracing::debug_span!("solve", nodes = n, sources = m).entered();

    let nodes: Vec<NodeId> = system.node_index.keys().copied().collect();
    let mut node_voltages = BTreeMap::from([(NodeId::GROUND, 0.0)]);

    let source_currents = if n == 0 {
        // Only ground: any source would constrain ground against itself.
        if m > 0 {
            tracing::debug!("voltage sources present without any non-ground node");
            return Err(NodalError::SingularCircuit);
        }
        Vec::new()
    } else {
        let x = system.solve(config.pivot_tolerance)?;
        for (row, &node) in nodes.iter().enumerate() {
            node_voltages.insert(node, x[row]);
        }
        x.rows(n, m).iter().copied().collect()
    };

    let voltage = |node: NodeId| node_voltages.get(&node).copied().unwrap_or(0.0);

    let mut resistor_voltages = Vec::new();
    let mut resistor_currents = Vec::new();
    let mut resistor_powers = Vec::new();
    for r in circuit.resistors() {
        let (v_pos, v_neg) = (voltage(r.nodes[0]), voltage(r.nodes[1]));
        let current = r.current(v_pos, v_neg);
        resistor_voltages.push(v_pos - v_neg);
        resistor_currents.push(current);
        resistor_powers.push(r.power(current));
    }

    tracing::debug!(total_power = resistor_powers.iter().sum::<f64>(), "solved");

    Ok(SolveOutput {
        nodes,
        node_voltages,
        source_currents,
        resistor_voltages,
        resistor_currents,
        resistor_powers,
    })
}
