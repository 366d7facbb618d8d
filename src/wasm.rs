//! WASM bindings for Nodal Core.
//!
//! This module provides JavaScript-friendly bindings so a browser-based
//! circuit editor can collect components and call the solver.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'nodal_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit();
//! circuit.add_voltage_source(1, 0, "9");
//! circuit.add_resistor(1, 2, "1k");
//! circuit.add_resistor(2, 0, "2k");
//!
//! const solution = circuit.solve();
//! solution.nodes;          // Uint32Array [1, 2]
//! solution.node_voltages;  // Float64Array [9, 6]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::error::NodalError;
use crate::solver::{solve_with_config, SolveOutput, SolverConfig};
use crate::value::parse_value;

fn to_js(err: NodalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Circuit under construction by a JavaScript editor.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
    config: SolverConfig,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create an empty circuit.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuit {
        WasmCircuit {
            circuit: Circuit::new(),
            config: SolverConfig::default(),
        }
    }

    /// Build a circuit from netlist text.
    #[wasm_bindgen]
    pub fn from_netlist(netlist: &str) -> Result<WasmCircuit, JsValue> {
        let circuit = crate::load_circuit(netlist).map_err(to_js)?;
        Ok(WasmCircuit {
            circuit,
            config: SolverConfig::default(),
        })
    }

    /// Append a resistor; `value` accepts SI suffixes (`"4.7k"`).
    #[wasm_bindgen]
    pub fn add_resistor(&mut self, positive: u32, negative: u32, value: &str) -> Result<(), JsValue> {
        let resistance = parse_value(value).map_err(to_js)?;
        self.circuit
            .add_resistor(positive as usize, negative as usize, resistance)
            .map_err(to_js)?;
        Ok(())
    }

    /// Append a voltage source; `value` accepts SI suffixes (`"500m"`).
    #[wasm_bindgen]
    pub fn add_voltage_source(&mut self, positive: u32, negative: u32, value: &str) -> Result<(), JsValue> {
        let voltage = parse_value(value).map_err(to_js)?;
        self.circuit
            .add_voltage_source(positive as usize, negative as usize, voltage)
            .map_err(to_js)?;
        Ok(())
    }

    /// Remove all components.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.circuit = Circuit::new();
    }

    /// Number of components entered so far.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.circuit.components.len()
    }

    /// Set the relative pivot tolerance used for singularity detection.
    #[wasm_bindgen]
    pub fn set_pivot_tolerance(&mut self, pivot_tolerance: f64) {
        self.config = SolverConfig::new().with_pivot_tolerance(pivot_tolerance);
    }

    /// Solve the circuit.
    #[wasm_bindgen]
    pub fn solve(&self) -> Result<WasmSolution, JsValue> {
        let output = solve_with_config(&self.circuit, &self.config).map_err(to_js)?;
        Ok(WasmSolution { output })
    }
}

impl Default for WasmCircuit {
    fn default() -> Self {
        Self::new()
    }
}

/// Solved operating point, exposed as flat arrays.
#[wasm_bindgen]
pub struct WasmSolution {
    output: SolveOutput,
}

#[wasm_bindgen]
impl WasmSolution {
    /// Non-ground nodes, ascending.
    #[wasm_bindgen(getter)]
    pub fn nodes(&self) -> Vec<u32> {
        self.output.nodes.iter().map(|n| n.0 as u32).collect()
    }

    /// Voltages of `nodes`, same order.
    #[wasm_bindgen(getter)]
    pub fn node_voltages(&self) -> Vec<f64> {
        self.output
            .nodes
            .iter()
            .map(|n| self.output.voltage(*n).unwrap_or(0.0))
            .collect()
    }

    /// Voltage source currents in source order.
    #[wasm_bindgen(getter)]
    pub fn source_currents(&self) -> Vec<f64> {
        self.output.source_currents.clone()
    }

    /// Resistor currents in resistor order.
    #[wasm_bindgen(getter)]
    pub fn resistor_currents(&self) -> Vec<f64> {
        self.output.resistor_currents.clone()
    }

    /// Resistor powers in resistor order.
    #[wasm_bindgen(getter)]
    pub fn resistor_powers(&self) -> Vec<f64> {
        self.output.resistor_powers.clone()
    }

    /// Resistor voltage drops in resistor order.
    #[wasm_bindgen(getter)]
    pub fn resistor_voltages(&self) -> Vec<f64> {
        self.output.resistor_voltages.clone()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
