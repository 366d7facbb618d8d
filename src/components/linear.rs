//! Linear passive components: Resistor.

use crate::circuit::{ComponentId, NodeId};
use crate::error::{NodalError, Result};

/// A resistor component.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub id: ComponentId,
    pub name: String,
    pub nodes: [NodeId; 2], // [positive, negative]
    /// Resistance in ohms, always finite and > 0
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    ///
    /// Zero, negative and non-finite resistances are rejected here so the
    /// solver never divides by them.
    pub fn new(id: ComponentId, name: String, nodes: [NodeId; 2], resistance: f64) -> Result<Self> {
        if !resistance.is_finite() || resistance <= 0.0 {
            return Err(NodalError::invalid_component(
                name,
                format!("resistance must be positive and finite, got {resistance}"),
            ));
        }
        Ok(Self {
            id,
            name,
            nodes,
            resistance,
        })
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }

    /// Current through the resistor from the positive to the negative terminal.
    pub fn current(&self, v_pos: f64, v_neg: f64) -> f64 {
        (v_pos - v_neg) / self.resistance
    }

    /// Power absorbed for a given current (I²R).
    pub fn power(&self, current: f64) -> f64 {
        current * current * self.resistance
    }

    /// True when both terminals are ground, so the resistor carries no current.
    pub fn is_grounded_loop(&self) -> bool {
        self.nodes[0].is_ground() && self.nodes[1].is_ground()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor(value: f64) -> Result<Resistor> {
        Resistor::new(ComponentId(0), "R1".to_string(), [NodeId(1), NodeId(0)], value)
    }

    #[test]
    fn test_resistor_conductance() {
        let r = resistor(1000.0).unwrap();
        assert!((r.conductance() - 0.001).abs() < 1e-10);
    }

    #[test]
    fn test_resistor_current_and_power() {
        let r = resistor(2000.0).unwrap();
        let i = r.current(3.0, 9.0);
        assert!((i + 0.003).abs() < 1e-12);
        assert!((r.power(i) - 0.018).abs() < 1e-12);
    }

    #[test]
    fn test_resistor_rejects_bad_values() {
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(resistor(bad), Err(NodalError::InvalidComponent { .. })));
        }
    }
}
