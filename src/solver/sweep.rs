//! DC sweep of a single voltage source.

use crate::circuit::{Circuit, NodeId, SweepDef};
use crate::components::Component;
use crate::error::{NodalError, Result};

use super::dc::{solve_with_config, SolveOutput, SolverConfig};
use super::MAX_SWEEP_POINTS;

/// Result of a DC sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Name of the swept source.
    pub source: String,
    /// Source value at each point.
    pub values: Vec<f64>,
    /// DC solution at each point.
    pub solutions: Vec<SolveOutput>,
}

impl SweepResult {
    /// Voltage at a node across all sweep points.
    pub fn voltage_waveform(&self, node: NodeId) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .zip(&self.solutions)
            .map(|(&sv, sol)| (sv, sol.voltage(node).unwrap_or(0.0)))
            .collect()
    }

    /// Current of the i-th resistor across all sweep points.
    pub fn resistor_current_waveform(&self, index: usize) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .zip(&self.solutions)
            .filter_map(|(&sv, sol)| sol.resistor_currents.get(index).map(|&i| (sv, i)))
            .collect()
    }
}

/// Expand a sweep definition into its source values, `stop` included.
pub fn sweep_points(sweep: &SweepDef) -> Result<Vec<f64>> {
    let SweepDef { start, stop, step, .. } = *sweep;
    if ![start, stop, step].iter().all(|v| v.is_finite()) {
        return Err(NodalError::invalid_param("sweep bounds must be finite"));
    }
    if step == 0.0 {
        return Err(NodalError::invalid_param("sweep step must be nonzero"));
    }

    let span = (stop - start) / step;
    if span < 0.0 {
        return Err(NodalError::invalid_param(format!(
            "sweep step {step} does not move from {start} toward {stop}"
        )));
    }

    // Tolerate rounding so that e.g. 0..1 by 0.1 still ends on 1.0
    let count = (span + 1e-9).floor() as usize + 1;
    if count > MAX_SWEEP_POINTS {
        return Err(NodalError::invalid_param(format!(
            "sweep has {count} points, limit is {MAX_SWEEP_POINTS}"
        )));
    }

    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// Re-solve the circuit with one voltage source stepped over a range.
///
/// The input circuit is left untouched; each point solves a working copy.
pub fn sweep_source(circuit: &Circuit, sweep: &SweepDef, config: &SolverConfig) -> Result<SweepResult> {
    let index = circuit.find_source(&sweep.source).ok_or_else(|| {
        NodalError::invalid_param(format!("no voltage source named '{}'", sweep.source))
    })?;
    let values = sweep_points(sweep)?;
    let _span = tracing::debug_span!("sweep", source = %sweep.source, points = values.len()).entered();

    let mut working = circuit.clone();
    let mut solutions = Vec::with_capacity(values.len());
    for &value in &values {
        if let Component::VoltageSource(v) = &mut working.components[index] {
            v.set_voltage(value);
        }
        solutions.push(solve_with_config(&working, config)?);
    }

    Ok(SweepResult {
        source: sweep.source.clone(),
        values,
        solutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sweep(start: f64, stop: f64, step: f64) -> SweepDef {
        SweepDef {
            source: "V1".to_string(),
            start,
            stop,
            step,
        }
    }

    #[test]
    fn test_points_include_stop() {
        let points = sweep_points(&sweep(0.0, 1.0, 0.1)).unwrap();
        assert_eq!(points.len(), 11);
        assert_abs_diff_eq!(*points.last().unwrap(), 1.0, epsilon = 1e-12);

        let down = sweep_points(&sweep(5.0, 0.0, -2.5)).unwrap();
        assert_eq!(down, vec![5.0, 2.5, 0.0]);

        assert_eq!(sweep_points(&sweep(3.0, 3.0, 1.0)).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_bad_steps() {
        assert!(sweep_points(&sweep(0.0, 1.0, 0.0)).is_err());
        assert!(sweep_points(&sweep(0.0, 1.0, -0.1)).is_err());
        assert!(sweep_points(&sweep(0.0, f64::INFINITY, 1.0)).is_err());
        assert!(sweep_points(&sweep(0.0, 1e9, 1e-3)).is_err());
    }

    #[test]
    fn test_sweep_divider_is_linear() {
        let mut circuit = Circuit::new();
        circuit.add_voltage_source(1, 0, 0.0).unwrap();
        circuit.add_resistor(1, 2, 1e3).unwrap();
        circuit.add_resistor(2, 0, 2e3).unwrap();

        let result = sweep_source(&circuit, &sweep(0.0, 9.0, 3.0), &SolverConfig::default()).unwrap();
        assert_eq!(result.values, vec![0.0, 3.0, 6.0, 9.0]);

        for (vin, vout) in result.voltage_waveform(NodeId(2)) {
            assert_abs_diff_eq!(vout, vin * 2.0 / 3.0, epsilon = 1e-9);
        }
        let last = result.resistor_current_waveform(0).pop().unwrap();
        assert_abs_diff_eq!(last.1, 3e-3, epsilon = 1e-12);

        // Input circuit untouched
        match &circuit.components[0] {
            Component::VoltageSource(v) => assert_eq!(v.voltage, 0.0),
            other => panic!("unexpected component: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_source() {
        let circuit = Circuit::new();
        let err = sweep_source(&circuit, &sweep(0.0, 1.0, 1.0), &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, NodalError::InvalidSimulationParam { .. }));
    }
}
