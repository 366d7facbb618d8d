//! Error types for the nodal analysis engine.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! all error conditions that can occur during value parsing, netlist loading,
//! component construction, and solving.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all nodal analysis operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Value / Netlist Errors ============
    /// Malformed numeric or SI-suffixed value text
    #[error("Invalid value '{text}': {message}")]
    InvalidValue { text: String, message: String },

    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Component tagged with a kind other than resistor or voltage source
    #[error("Unknown component kind '{kind}' at line {line}")]
    UnknownComponentKind { kind: String, line: usize },

    /// Component with an unusable value (zero resistance, NaN, ...)
    #[error("Invalid component '{name}': {message}")]
    InvalidComponent { name: String, message: String },

    /// Duplicate component name
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    // ============ Solver Errors ============
    /// The augmented MNA matrix is not invertible
    #[error("Singular circuit - check connections (floating node, voltage source loop or conflicting sources)")]
    SingularCircuit,

    /// Invalid analysis parameter
    #[error("Invalid simulation parameter: {message}")]
    InvalidSimulationParam { message: String },

    // ============ I/O Errors ============
    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

impl NodalError {
    /// Create an invalid value error
    pub fn invalid_value(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            text: text.into(),
            message: message.into(),
        }
    }

    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid simulation parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidSimulationParam {
            message: message.into(),
        }
    }
}
