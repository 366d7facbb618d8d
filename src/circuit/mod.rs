//! Circuit representation and validation.
//!
//! This module provides the internal representation of a circuit after
//! loading. The [`Circuit`] struct holds the ordered component list in a
//! form suitable for analysis.

mod graph;
mod types;
mod validate;

pub use graph::{Circuit, SweepDef};
pub use types::*;
pub use validate::validate_circuit;
