//! Plain-text and CSV rendering of solve results.

use std::io::Write;

use crate::circuit::Circuit;
use crate::error::Result;
use crate::solver::{SolveOutput, SweepResult};
use crate::value::format_value;

/// Write a DC solution as a human-readable report.
///
/// Format:
/// ```text
/// === Node voltages ===
/// V(0) = 0.000000 V
/// V(1) = 5.000000 V
///
/// === Resistor voltages ===
/// R1 (1.00k): VR = 5.000000 V
///
/// === Voltage source currents ===
/// I(V1) = -0.005000 A
///
/// === Resistor currents and power ===
/// R1: I = 0.005000 A   P = 0.025000 W
/// ```
pub fn write_report<W: Write>(circuit: &Circuit, output: &SolveOutput, writer: &mut W) -> Result<()> {
    writeln!(writer, "=== Node voltages ===")?;
    for (node, voltage) in &output.node_voltages {
        writeln!(writer, "V({}) = {:.6} V", node, voltage)?;
    }

    writeln!(writer, "\n=== Resistor voltages ===")?;
    for (r, v) in circuit.resistors().zip(&output.resistor_voltages) {
        writeln!(writer, "{} ({}): VR = {:.6} V", r.name, format_value(r.resistance), v)?;
    }

    writeln!(writer, "\n=== Voltage source currents ===")?;
    for (v, i) in circuit.voltage_sources().zip(&output.source_currents) {
        writeln!(writer, "I({}) = {:.6} A", v.name, i)?;
    }

    writeln!(writer, "\n=== Resistor currents and power ===")?;
    for ((r, i), p) in circuit
        .resistors()
        .zip(&output.resistor_currents)
        .zip(&output.resistor_powers)
    {
        writeln!(writer, "{}: I = {:.6} A   P = {:.6} W", r.name, i, p)?;
    }

    Ok(())
}

/// Write a sweep as CSV, one row per point.
///
/// Columns: swept value, every node voltage (ground excluded), every source
/// current, in solution order.
pub fn write_sweep_csv<W: Write>(circuit: &Circuit, result: &SweepResult, writer: &mut W) -> Result<()> {
    let nodes = result.solutions.first().map(|s| s.nodes.as_slice()).unwrap_or_default();

    write!(writer, "{}", result.source)?;
    for node in nodes {
        write!(writer, ",V({})", node)?;
    }
    for v in circuit.voltage_sources() {
        write!(writer, ",I({})", v.name)?;
    }
    writeln!(writer)?;

    for (value, solution) in result.values.iter().zip(&result.solutions) {
        write!(writer, "{}", value)?;
        for node in nodes {
            write!(writer, ",{}", solution.voltage(*node).unwrap_or(0.0))?;
        }
        for current in &solution.source_currents {
            write!(writer, ",{}", current)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
