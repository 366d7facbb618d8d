//! Nodal - DC circuit solver
//!
//! Solves resistor / voltage-source netlists with Modified Nodal Analysis.
//!
//! # Usage
//!
//! ```bash
//! nodal divider.cir
//! RUST_LOG=nodal_core=debug nodal divider.cir --json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use nodal_core::{
    circuit::Circuit,
    dsl,
    error::{NodalError, Result},
    report,
    solver::{solve_with_config, sweep_source, SolverConfig, DEFAULT_PIVOT_TOLERANCE},
};

/// DC circuit solver using Modified Nodal Analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Print the operating point as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Relative pivot magnitude below which the circuit is reported singular
    #[arg(long, default_value_t = DEFAULT_PIVOT_TOLERANCE)]
    pivot_tolerance: f64,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Parse the netlist file
    let ast = dsl::parse_file(&args.circuit_file)?;

    // Build and validate the circuit
    let circuit = Circuit::from_ast(ast)?;
    tracing::info!(
        components = circuit.components.len(),
        nodes = circuit.nodes().len(),
        sources = circuit.num_sources(),
        "loaded circuit"
    );
    if circuit.is_empty() {
        tracing::warn!(file = %args.circuit_file.display(), "netlist has no components");
    }

    let config = SolverConfig::new().with_pivot_tolerance(args.pivot_tolerance);
    let output = solve_with_config(&circuit, &config)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &output).map_err(io::Error::from)?;
        writeln!(stdout)?;
    } else {
        report::write_report(&circuit, &output, &mut stdout)?;
    }

    for sweep in &circuit.sweeps {
        let result = sweep_source(&circuit, sweep, &config)?;
        writeln!(stdout)?;
        report::write_sweep_csv(&circuit, &result, &mut stdout)?;
    }

    stdout.flush().map_err(NodalError::from)
}
