//! Circuit structure.

use std::collections::BTreeSet;

use super::types::{BranchId, ComponentId, NodeId};
use super::validate::validate_circuit;
use crate::components::{Component, Resistor, VoltageSource};
use crate::dsl::CircuitAst;
use crate::error::{NodalError, Result};

/// Definition of a DC sweep over one voltage source.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDef {
    /// Name of the swept voltage source
    pub source: String,
    /// First source value
    pub start: f64,
    /// Last source value (inclusive)
    pub stop: f64,
    /// Increment between points
    pub step: f64,
}

/// A circuit ready for analysis: an ordered sequence of components.
///
/// Component order is significant. It fixes the order of reported resistor
/// currents/powers and of source currents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    /// All components in definition order
    pub components: Vec<Component>,

    /// Sweeps requested by the netlist
    pub sweeps: Vec<SweepDef>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from a parsed AST.
    pub fn from_ast(ast: CircuitAst) -> Result<Self> {
        let mut components = Vec::with_capacity(ast.components.len());
        let mut num_branches = 0usize;

        for (idx, comp_def) in ast.components.iter().enumerate() {
            components.push(Component::from_def(ComponentId(idx), comp_def, &mut num_branches)?);
        }

        let mut circuit = Circuit {
            components,
            sweeps: Vec::with_capacity(ast.sweeps.len()),
        };

        for sweep in ast.sweeps {
            if circuit.find_source(&sweep.source).is_none() {
                return Err(NodalError::parse(
                    sweep.line,
                    format!("sweep references unknown voltage source '{}'", sweep.source),
                ));
            }
            circuit.sweeps.push(SweepDef {
                source: sweep.source,
                start: sweep.start,
                stop: sweep.stop,
                step: sweep.step,
            });
        }

        validate_circuit(&circuit)?;
        Ok(circuit)
    }

    /// Append a resistor, named by its position among resistors.
    pub fn add_resistor(&mut self, positive: usize, negative: usize, resistance: f64) -> Result<&mut Self> {
        let name = self.free_name('R', self.resistors().count() + 1);
        let resistor = Resistor::new(
            ComponentId(self.components.len()),
            name,
            [NodeId(positive), NodeId(negative)],
            resistance,
        )?;
        self.components.push(Component::Resistor(resistor));
        Ok(self)
    }

    /// Append a voltage source, named by its position among sources.
    pub fn add_voltage_source(&mut self, positive: usize, negative: usize, voltage: f64) -> Result<&mut Self> {
        let branch = self.num_sources();
        let source = VoltageSource::new(
            ComponentId(self.components.len()),
            self.free_name('V', branch + 1),
            [NodeId(positive), NodeId(negative)],
            voltage,
            BranchId(branch),
        )?;
        self.components.push(Component::VoltageSource(source));
        Ok(self)
    }

    /// Resistors in definition order.
    pub fn resistors(&self) -> impl Iterator<Item = &Resistor> {
        self.components.iter().filter_map(|c| match c {
            Component::Resistor(r) => Some(r),
            _ => None,
        })
    }

    /// Voltage sources in definition order.
    pub fn voltage_sources(&self) -> impl Iterator<Item = &VoltageSource> {
        self.components.iter().filter_map(|c| match c {
            Component::VoltageSource(v) => Some(v),
            _ => None,
        })
    }

    /// Number of voltage sources (branch current unknowns).
    pub fn num_sources(&self) -> usize {
        self.voltage_sources().count()
    }

    /// Distinct non-ground nodes referenced by any component, ascending.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.components
            .iter()
            .flat_map(|c| c.nodes())
            .filter(|n| !n.is_ground())
            .collect()
    }

    /// Index into `components` of the voltage source with the given name.
    pub fn find_source(&self, name: &str) -> Option<usize> {
        self.components
            .iter()
            .position(|c| matches!(c, Component::VoltageSource(v) if v.name == name))
    }

    /// First `{prefix}{k}` with `k >= start` not used by any component.
    fn free_name(&self, prefix: char, start: usize) -> String {
        (start..)
            .map(|k| format!("{}{}", prefix, k))
            .find(|name| self.components.iter().all(|c| c.name() != name.as_str()))
            .unwrap_or_default()
    }

    /// Check whether the circuit has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
