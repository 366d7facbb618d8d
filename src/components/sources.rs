//! Independent voltage sources.

use crate::circuit::{BranchId, ComponentId, NodeId};
use crate::error::{NodalError, Result};

/// A voltage source component.
///
/// Voltage sources require an extra row/column in the MNA matrix for the
/// branch current. The source enforces: V+ - V- = V_source
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    pub id: ComponentId,
    pub name: String,
    pub nodes: [NodeId; 2], // [positive, negative]
    pub voltage: f64,
    pub branch: BranchId,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(
        id: ComponentId,
        name: String,
        nodes: [NodeId; 2],
        voltage: f64,
        branch: BranchId,
    ) -> Result<Self> {
        if !voltage.is_finite() {
            return Err(NodalError::invalid_component(
                name,
                format!("voltage must be finite, got {voltage}"),
            ));
        }
        Ok(Self {
            id,
            name,
            nodes,
            voltage,
            branch,
        })
    }

    /// Set the source value (used by DC sweeps).
    pub fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    /// True when both terminals are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.nodes[0] == self.nodes[1]
    }
}
