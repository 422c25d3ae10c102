//! JSON documents for equation systems and solutions

use crate::matrix::BoundedMatrix;
use crate::solver::{Family, Mode, Solution};
use crate::FuzzyResult;
use serde::{Deserialize, Serialize};

/// An equation system as stored on disk
///
/// ```json
/// { "family": "godel", "mode": "eq", "a": [[0.4]], "b": [0.4] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDocument {
    pub family: Family,
    #[serde(default)]
    pub mode: Mode,
    pub a: BoundedMatrix,
    pub b: Vec<f64>,
}

/// Parse a system document. Shape agreement between `a` and `b` is left to
/// the solver, which reports it as a dimension mismatch.
pub fn system_from_json(json: &str) -> FuzzyResult<SystemDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a matrix written as nested rows
pub fn matrix_from_json(json: &str) -> FuzzyResult<BoundedMatrix> {
    Ok(serde_json::from_str(json)?)
}

pub fn solution_to_json(solution: &Solution) -> FuzzyResult<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}
