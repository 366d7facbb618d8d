//! End-to-end tests: netlist text through loading and solving.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nodal_core::circuit::Circuit;
use nodal_core::solver::{solve, sweep_source, SolveOutput, SolverConfig};
use nodal_core::{load_circuit, NodalError, NodeId};

/// Helper: load + solve
fn dc_solve(netlist: &str) -> SolveOutput {
    let circuit = load_circuit(netlist).expect("load failed");
    solve(&circuit).expect("solve failed")
}

fn dc_error(netlist: &str) -> NodalError {
    let circuit = load_circuit(netlist).expect("load failed");
    solve(&circuit).expect_err("solve should fail")
}

// ── Reference scenarios ───────────────────────────────────────────

#[test]
fn test_resistor_with_source_scenario() {
    let out = dc_solve("R 1 0 1000\nV 1 0 5\n");

    assert_eq!(out.node_voltages.len(), 2);
    assert_eq!(out.voltage(NodeId(0)), Some(0.0));
    assert_abs_diff_eq!(out.voltage(NodeId(1)).unwrap(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(out.source_currents[0], -0.005, epsilon = 1e-12);
    assert_abs_diff_eq!(out.resistor_currents[0], 0.005, epsilon = 1e-12);
    assert_abs_diff_eq!(out.resistor_powers[0], 0.025, epsilon = 1e-12);
}

#[test]
fn test_voltage_divider() {
    let out = dc_solve(
        "# 9 V across 1k + 2k
         V1 1 0 9
         R1 1 2 1k
         R2 2 0 2k",
    );

    assert_abs_diff_eq!(out.voltage(NodeId(1)).unwrap(), 9.0, epsilon = 1e-9);
    assert_abs_diff_eq!(out.voltage(NodeId(2)).unwrap(), 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(out.resistor_currents[0], 3e-3, epsilon = 1e-12);
    assert_abs_diff_eq!(out.resistor_currents[1], 3e-3, epsilon = 1e-12);
    // Source delivers what the resistors absorb
    assert_relative_eq!(-out.source_currents[0] * 9.0, out.total_power(), max_relative = 1e-9);
}

// ── Properties ────────────────────────────────────────────────────

#[test]
fn test_single_loop_kirchhoff() {
    for (v, r) in [(1.0, 1.0), (12.0, 470.0), (-3.3, 2.2e6), (0.5, 1e-3)] {
        let mut circuit = Circuit::new();
        circuit.add_voltage_source(4, 0, v).unwrap();
        circuit.add_resistor(4, 0, r).unwrap();

        let out = solve(&circuit).unwrap();
        assert_abs_diff_eq!(out.voltage(NodeId(4)).unwrap(), v, epsilon = 1e-9);
        assert_relative_eq!(out.resistor_currents[0], v / r, max_relative = 1e-9);
    }
}

#[test]
fn test_ground_and_power_invariants() {
    let out = dc_solve(
        "V1 1 0 12
         V2 3 2 -4
         R1 1 2 330
         R2 2 0 1k
         R3 3 0 4.7k
         R4 1 3 2.2k
         R5 0 2 10k",
    );

    assert_eq!(out.voltage(NodeId::GROUND), Some(0.0));
    assert_eq!(out.nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
    assert_eq!(out.source_currents.len(), 2);
    assert_eq!(out.resistor_currents.len(), 5);
    assert!(out.resistor_powers.iter().all(|&p| p >= 0.0));

    // Source constraints hold
    let v = |n| out.voltage(NodeId(n)).unwrap();
    assert_abs_diff_eq!(v(1), 12.0, epsilon = 1e-9);
    assert_abs_diff_eq!(v(3) - v(2), -4.0, epsilon = 1e-9);

    // Reversed terminals flip the current sign (R5 runs from ground to node 2)
    assert_relative_eq!(out.resistor_currents[4], -v(2) / 10e3, max_relative = 1e-9);
}

#[test]
fn test_kcl_at_every_node() {
    let circuit = load_circuit(
        "V1 1 0 10
         R1 1 2 100
         R2 2 0 200
         R3 2 3 300
         R4 3 0 400",
    )
    .unwrap();
    let out = solve(&circuit).unwrap();

    // Net resistor current leaving nodes 2 and 3 must be zero
    for node in [NodeId(2), NodeId(3)] {
        let mut net = 0.0;
        for (r, i) in circuit.resistors().zip(&out.resistor_currents) {
            if r.nodes[0] == node {
                net += i;
            }
            if r.nodes[1] == node {
                net -= i;
            }
        }
        assert_abs_diff_eq!(net, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_node_order_is_numeric() {
    let out = dc_solve("V1 10 0 1\nR1 10 2 1k\nR2 2 0 1k");
    assert_eq!(out.nodes, vec![NodeId(2), NodeId(10)]);
    assert_abs_diff_eq!(out.voltage(NodeId(2)).unwrap(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_source_order_matches_definition_order() {
    let out = dc_solve(
        "R1 1 0 1k
         V2 2 0 2
         R2 2 0 1k
         V1 1 0 1",
    );
    // V2 appears first, so it owns the first current slot
    assert_abs_diff_eq!(out.source_currents[0], -2e-3, epsilon = 1e-12);
    assert_abs_diff_eq!(out.source_currents[1], -1e-3, epsilon = 1e-12);
}

#[test]
fn test_mixed_resistance_magnitudes_solve() {
    // 1 TΩ leg beside a source and a 1 kΩ load
    let out = dc_solve("V1 1 0 1\nR1 1 0 1k\nR2 2 0 1e12");
    assert_abs_diff_eq!(out.voltage(NodeId(1)).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out.voltage(NodeId(2)).unwrap(), 0.0, epsilon = 1e-12);

    // 1 mΩ shunt next to 1 GΩ and 1 TΩ dividers
    let out = dc_solve("V1 1 0 1\nR1 1 0 1m\nR2 1 2 1e9\nR3 2 0 1e9\nR4 1 3 1e12\nR5 3 0 1e12");
    assert_relative_eq!(out.voltage(NodeId(2)).unwrap(), 0.5, max_relative = 1e-9);
    assert_relative_eq!(out.voltage(NodeId(3)).unwrap(), 0.5, max_relative = 1e-9);
}

// ── Singular and degenerate circuits ──────────────────────────────

#[test]
fn test_self_loop_source_is_singular() {
    assert!(matches!(dc_error("V1 1 1 5"), NodalError::SingularCircuit));
    assert!(matches!(dc_error("V1 1 1 5\nR1 1 0 1k"), NodalError::SingularCircuit));
}

#[test]
fn test_conflicting_parallel_sources_are_singular() {
    assert!(matches!(dc_error("V1 1 0 5\nV2 1 0 3"), NodalError::SingularCircuit));
    assert!(matches!(
        dc_error("V1 1 2 5\nV2 1 2 3\nR1 1 0 1k\nR2 2 0 1k"),
        NodalError::SingularCircuit
    ));
}

#[test]
fn test_voltage_source_loop_is_singular() {
    assert!(matches!(
        dc_error("V1 1 0 1\nV2 2 1 1\nV3 2 0 2\nR1 2 0 1k"),
        NodalError::SingularCircuit
    ));
}

#[test]
fn test_floating_subcircuit_is_singular() {
    assert!(matches!(
        dc_error("V1 1 0 5\nR1 1 0 1k\nR2 2 3 1k"),
        NodalError::SingularCircuit
    ));
}

#[test]
fn test_empty_netlist() {
    assert!(load_circuit("# nothing here\n\n").unwrap().is_empty());
    assert!(!load_circuit("R1 1 0 1k").unwrap().is_empty());

    let out = dc_solve("# nothing here\n\n");
    assert!(out.nodes.is_empty());
    assert_eq!(out.node_voltages.len(), 1);
    assert_eq!(out.voltage(NodeId::GROUND), Some(0.0));
    assert!(out.source_currents.is_empty());
    assert!(out.resistor_currents.is_empty());
    assert!(out.resistor_powers.is_empty());
}

#[test]
fn test_sources_without_nodes_are_singular() {
    assert!(matches!(dc_error("V1 0 GND 5"), NodalError::SingularCircuit));
}

// ── Loader boundary ───────────────────────────────────────────────

#[test]
fn test_loader_rejects_bad_input_before_solving() {
    assert!(matches!(
        load_circuit("R1 1 0 1k\nL1 1 0 10m"),
        Err(NodalError::UnknownComponentKind { line: 2, .. })
    ));
    assert!(matches!(load_circuit("R1 1 0 "), Err(NodalError::ParseError { .. })));
    assert!(matches!(load_circuit("R1 1 0 1q"), Err(NodalError::InvalidValue { .. })));
    assert!(matches!(load_circuit("R1 1 0 0"), Err(NodalError::InvalidComponent { .. })));
    assert!(matches!(load_circuit("R1 1 0 -5k"), Err(NodalError::InvalidComponent { .. })));
}

#[test]
fn test_netlist_sweep() {
    let circuit = load_circuit(
        "V1 1 0 0
         R1 1 2 1k
         R2 2 0 1k
         .sweep V1 0 10 2.5",
    )
    .unwrap();

    let result = sweep_source(&circuit, &circuit.sweeps[0], &SolverConfig::default()).unwrap();
    assert_eq!(result.values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    for (vin, vmid) in result.voltage_waveform(NodeId(2)) {
        assert_abs_diff_eq!(vmid, vin / 2.0, epsilon = 1e-9);
    }
}
