//! Abstract Syntax Tree types for the netlist format.

use crate::circuit::NodeId;

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct CircuitAst {
    /// All component instances, in file order
    pub components: Vec<ComponentDef>,
    /// `.sweep` directives
    pub sweeps: Vec<SweepDirective>,
}

impl CircuitAst {
    /// Create a new empty circuit AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A component definition from the netlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// Component type (R or V)
    pub component_type: ComponentType,
    /// Component name, auto-assigned for bare `R`/`V` lines
    pub name: String,
    /// Positive and negative terminal
    pub nodes: [NodeId; 2],
    /// Resistance in ohms or voltage in volts
    pub value: f64,
    /// Source line number for error reporting
    pub line: usize,
}

/// Component types supported by the netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// Resistor
    Resistor,
    /// Independent DC voltage source
    VoltageSource,
}

impl ComponentType {
    /// Parse a component type from its netlist prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'R' => Some(Self::Resistor),
            'V' => Some(Self::VoltageSource),
            _ => None,
        }
    }

    /// The canonical prefix letter.
    pub fn prefix(&self) -> char {
        match self {
            Self::Resistor => 'R',
            Self::VoltageSource => 'V',
        }
    }
}

/// A `.sweep <source> <start> <stop> <step>` directive.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDirective {
    /// Name of the voltage source to step
    pub source: String,
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    /// Source line number
    pub line: usize,
}
