//! Circuit validation.

use std::collections::HashSet;

use crate::components::Component;
use crate::error::{NodalError, Result};

use super::Circuit;

/// Validate a circuit for analysis.
///
/// Checks:
/// - No duplicate component names
///
/// Degenerate but solvable topology is only reported through `tracing`:
/// - Resistors with both terminals on ground (always zero current)
/// - Voltage sources whose terminals coincide (the solve will be singular)
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    let mut names = HashSet::with_capacity(circuit.components.len());

    for component in &circuit.components {
        if !names.insert(component.name()) {
            return Err(NodalError::DuplicateComponent {
                name: component.name().to_string(),
            });
        }

        match component {
            Component::Resistor(r) if r.is_grounded_loop() => {
                tracing::warn!(component = %r.name, "resistor has both terminals on ground and carries no current");
            }
            Component::VoltageSource(v) if v.is_self_loop() => {
                tracing::warn!(component = %v.name, node = %v.nodes[0], "voltage source terminals are the same node");
            }
            _ => {}
        }
    }

    Ok(())
}
