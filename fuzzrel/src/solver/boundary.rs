//! Boundary enumeration
//!
//! Depth-first search over column choices. Each frame carries the covered-row
//! markers and the accumulator; finished accumulators are folded into an
//! antichain. The search runs on an explicit stack since its depth is the
//! reduced row count, which the caller controls.

use super::budget::SearchBudget;
use super::help::HelpMatrix;
use super::Family;
use crate::FuzzyResult;
use tracing::trace;

/// Pairwise incomparable vectors under a family's dominance order
#[derive(Debug, Clone)]
pub(crate) struct Antichain {
    family: Family,
    tolerance: f64,
    members: Vec<Vec<f64>>,
}

impl Antichain {
    pub fn new(family: Family, tolerance: f64) -> Self {
        Self {
            family,
            tolerance,
            members: Vec::new(),
        }
    }

    /// Insert unless an existing member already dominates `candidate`; evict
    /// the members `candidate` dominates. Returns whether it was inserted.
    pub fn insert(&mut self, candidate: Vec<f64>) -> bool {
        let (family, tolerance) = (self.family, self.tolerance);
        if self
            .members
            .iter()
            .any(|member| family.dominates(member, &candidate, tolerance))
        {
            return false;
        }
        self.members
            .retain(|member| !family.dominates(&candidate, member, tolerance));
        self.members.push(candidate);
        true
    }

    pub fn into_vec(self) -> Vec<Vec<f64>> {
        self.members
    }
}

struct Frame {
    covered: Vec<bool>,
    acc: Vec<f64>,
}

/// Enumerate the boundary of a reduced help matrix.
///
/// The lowest uncovered row branches over its live columns; choosing column
/// `j` tightens `acc[j]` to the row's value and covers every row whose
/// column-`j` cell that value satisfies.
pub(crate) fn enumerate(
    help: &HelpMatrix,
    family: Family,
    tolerance: f64,
    budget: &mut SearchBudget<'_>,
) -> FuzzyResult<Vec<Vec<f64>>> {
    let mut antichain = Antichain::new(family, tolerance);
    let mut stack = vec![Frame {
        covered: help.rows.iter().map(|row| row.unconditional).collect(),
        acc: vec![family.trivial_bound(); help.cols],
    }];

    while let Some(frame) = stack.pop() {
        budget.tick()?;

        let Some(next) = frame.covered.iter().position(|covered| !covered) else {
            trace!(candidate = ?frame.acc, "boundary candidate");
            antichain.insert(frame.acc);
            continue;
        };

        // Pushed in reverse so the lowest column is explored first
        let choices: Vec<(usize, f64)> = help.rows[next].live_columns().collect();
        for &(j, h) in choices.iter().rev() {
            let mut acc = frame.acc.clone();
            acc[j] = family.tighten(acc[j], h);

            let mut covered = frame.covered.clone();
            for (mark, row) in covered.iter_mut().zip(&help.rows) {
                if *mark {
                    continue;
                }
                if let Some(other) = row.cells[j] {
                    if family.satisfies(acc[j], other, tolerance) {
                        *mark = true;
                    }
                }
            }
            stack.push(Frame { covered, acc });
        }
    }

    Ok(antichain.into_vec())
}
