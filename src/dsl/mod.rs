//! Netlist loader for resistive circuit descriptions.
//!
//! This module provides a SPICE-inspired, line-oriented text format for
//! describing resistor / voltage-source networks. It is the boundary where
//! raw user input becomes typed components: values go through the
//! [`value`](crate::value) parser and any component kind other than `R` or
//! `V` is rejected before a [`Circuit`](crate::Circuit) is ever built.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | component | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".sweep" source number number number | ".end"
//! component   = kind [name] node node ["DC"] value
//!
//! kind        = "R" | "V"            (case-insensitive)
//! node        = digit+ | "GND"       (0 and GND are ground)
//! value       = number [suffix]
//! suffix      = 'k' | 'M' | 'm' | 'u'
//! ```
//!
//! A bare kind letter (`R 1 0 2k`) is named by its position among components
//! of the same kind: `R1`, `R2`, ...
//!
//! # Example
//!
//! ```text
//! # Voltage divider
//! V1 1 0 9
//! R1 1 2 1k
//! R2 2 0 2k
//! .sweep V1 0 9 1
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read netlist");
    parse(&content)
}
