//! Component models for circuit analysis.
//!
//! The component set is closed: two-terminal resistors and independent DC
//! voltage sources. Values are validated when a component is constructed,
//! so the solver can assume every resistance is positive and finite.

mod linear;
mod sources;

pub use linear::Resistor;
pub use sources::VoltageSource;

use crate::circuit::{BranchId, ComponentId, NodeId};
use crate::dsl::{ComponentDef, ComponentType};
use crate::error::Result;

/// A circuit component.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
}

impl Component {
    /// Create a component from a netlist definition.
    ///
    /// `branch_counter` hands out source-order branch indices and is advanced
    /// for every voltage source.
    pub fn from_def(id: ComponentId, def: &ComponentDef, branch_counter: &mut usize) -> Result<Self> {
        match def.component_type {
            ComponentType::Resistor => Ok(Component::Resistor(Resistor::new(
                id,
                def.name.clone(),
                def.nodes,
                def.value,
            )?)),

            ComponentType::VoltageSource => {
                let branch = BranchId(*branch_counter);
                let source = VoltageSource::new(id, def.name.clone(), def.nodes, def.value, branch)?;
                *branch_counter += 1;
                Ok(Component::VoltageSource(source))
            }
        }
    }

    /// Get the component name.
    pub fn name(&self) -> &str {
        match self {
            Component::Resistor(r) => &r.name,
            Component::VoltageSource(v) => &v.name,
        }
    }

    /// Positive and negative terminal.
    pub fn nodes(&self) -> [NodeId; 2] {
        match self {
            Component::Resistor(r) => r.nodes,
            Component::VoltageSource(v) => v.nodes,
        }
    }
}
