//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for DC analysis.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ Bᵗ  0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B connects voltage sources to nodes (+1 at n+, -1 at n-)
//! - v is the vector of non-ground node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node (always zero here)
//! - e is the vector of voltage source values
//!
//! The blocks are coupled and solved jointly as one dense system.

mod dc;
mod mna;
mod sweep;

pub use dc::{solve, solve_with_config, SolveOutput, SolverConfig};
pub use mna::{assemble, MnaSystem};
pub use sweep::{sweep_points, sweep_source, SweepResult};

/// Default relative pivot tolerance for singularity detection.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;
