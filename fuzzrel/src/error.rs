use crate::Operator;
use thiserror::Error;

/// Error types for compositions, matrices and the relational equation solvers.
///
/// An inconsistent equation system is not an error: it is reported through
/// [`Solution::exist`](crate::Solution::exist) and
/// [`Solution::contradict`](crate::Solution::contradict).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// Operand shapes do not line up. Raised before any computation happens.
    #[error("Dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    /// A nested-row matrix literal whose rows differ in length
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat matrix data whose length is not rows * cols
    #[error("Invalid matrix shape: {rows}x{cols} needs {expected} values, got {found}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    /// The aggregate operator of a composition has no identity element
    #[error("Operator '{0}' cannot be used as an aggregate")]
    InvalidAggregator(Operator),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown composition: {0}")]
    UnknownComposition(String),

    #[error("Unknown solver family: {0}")]
    UnknownFamily(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Resource limit exceeded
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FuzzyError {
    fn from(err: serde_json::Error) -> Self {
        FuzzyError::Serialization(err.to_string())
    }
}
