//! # Nodal Core
//!
//! DC analysis of resistive circuits using Modified Nodal Analysis.
//!
//! This library provides:
//! - SI-suffixed value parsing (`2k`, `4.7M`, `10u`)
//! - A line-oriented netlist format for resistors and voltage sources
//! - Dense MNA assembly and LU solving for node voltages and source currents
//! - Per-resistor current and power, and DC sweeps of a voltage source
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`value`] - Parsing and formatting of SI-suffixed values
//! - [`dsl`] - Parser for the netlist format
//! - [`circuit`] - Ordered circuit representation and validation
//! - [`components`] - Resistor and voltage source models
//! - [`solver`] - MNA matrix assembly and numerical solving
//! - [`report`] - Text and CSV output of results
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodal divider.cir
//! nodal divider.cir --json
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::{solve, Circuit, NodeId};
//!
//! let mut circuit = Circuit::new();
//! circuit.add_voltage_source(1, 0, 9.0)?;
//! circuit.add_resistor(1, 2, 1e3)?;
//! circuit.add_resistor(2, 0, 2e3)?;
//!
//! let out = solve(&circuit)?;
//! assert!((out.voltage(NodeId(2)).unwrap() - 6.0).abs() < 1e-9);
//! # Ok::<(), nodal_core::NodalError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuit } from 'nodal_core';
//!
//! const circuit = new WasmCircuit();
//! circuit.add_voltage_source(1, 0, "5");
//! circuit.add_resistor(1, 0, "1k");
//! const solution = circuit.solve();
//! ```

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod report;
pub mod solver;
pub mod value;

// Re-export main types for convenience
pub use circuit::{Circuit, NodeId};
pub use error::{NodalError, Result};
pub use solver::{solve, SolveOutput, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmCircuit, WasmSolution};

/// Load a netlist string into a validated circuit.
pub fn load_circuit(netlist: &str) -> Result<Circuit> {
    Circuit::from_ast(dsl::parse(netlist)?)
}
