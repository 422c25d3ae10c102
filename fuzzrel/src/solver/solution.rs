use super::{Family, Mode};
use crate::value::format_vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a full solve
///
/// Assembled phase by phase inside the solver and handed out immutable. When
/// `exist` is false, `contradict` names the rows no column can satisfy and
/// `boundary` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub family: Family,
    pub mode: Mode,
    pub rows: usize,
    pub cols: usize,
    pub exist: bool,
    /// 0-based indices of unsatisfiable rows
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contradict: Vec<usize>,
    pub extremal: Vec<f64>,
    /// Pairwise incomparable solutions on the side opposite the extremal
    pub boundary: Vec<Vec<f64>>,
    /// Rows left after dominance reduction
    pub help_rows: usize,
}

impl Solution {
    pub fn is_consistent(&self) -> bool {
        self.exist
    }

    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}) system {}x{}: {}",
            self.family,
            self.mode,
            self.rows,
            self.cols,
            if self.exist { "consistent" } else { "inconsistent" }
        )?;
        writeln!(f, "extremal: {}", format_vector(&self.extremal))?;

        if !self.exist {
            let rows: Vec<String> = self.contradict.iter().map(|i| i.to_string()).collect();
            return writeln!(f, "contradicting rows: {}", rows.join(", "));
        }

        writeln!(f, "help rows: {}", self.help_rows)?;
        writeln!(f, "boundary with {} vectors:", self.boundary.len())?;
        for (i, vector) in self.boundary.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, format_vector(vector))?;
        }
        Ok(())
    }
}
