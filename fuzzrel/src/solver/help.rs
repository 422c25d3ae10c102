//! Help matrix: per-cell constraints derived from `A` and `b`

use super::Family;
use crate::matrix::BoundedMatrix;
use crate::value::approx_eq;

/// One row of the help matrix. `None` cells are the family sentinel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HelpRow {
    /// Row index in the original system
    pub index: usize,
    pub rhs: f64,
    pub cells: Vec<Option<f64>>,
    /// Satisfied by every candidate; never needs a column choice
    pub unconditional: bool,
}

impl HelpRow {
    pub fn live_columns(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.map(|h| (j, h)))
    }
}

/// Scratch matrix built once per solve and dropped with it
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HelpMatrix {
    pub cols: usize,
    pub rows: Vec<HelpRow>,
}

impl HelpMatrix {
    pub fn build(a: &BoundedMatrix, rhs: &[f64], family: Family, tolerance: f64) -> Self {
        let rows = rhs
            .iter()
            .enumerate()
            .map(|(i, &b)| HelpRow {
                index: i,
                rhs: b,
                cells: a
                    .row(i)
                    .iter()
                    .map(|coef| family.preprocess(coef.get(), b, tolerance))
                    .collect(),
                unconditional: family.is_unconditional(b, tolerance),
            })
            .collect();
        Self {
            cols: a.cols(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Aggregate of column `j` over its live cells, kept inside [0, 1]
    fn column_bound(&self, j: usize, family: Family) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.cells[j])
            .reduce(|acc, h| family.fold(acc, h))
            .map(|m| m.clamp(0.0, 1.0))
    }

    /// Extremal vector over every live cell, without touching the cells.
    /// Columns with no live cell fall back to the trivial bound.
    pub fn bound(&self, family: Family) -> Vec<f64> {
        (0..self.cols)
            .map(|j| {
                self.column_bound(j, family)
                    .unwrap_or_else(|| family.trivial_bound())
            })
            .collect()
    }

    /// Extract the extremal vector and mark covering cells.
    ///
    /// A cell stays live only if it sits on the column aggregate and can make
    /// its row hold with equality; every other cell reverts to the sentinel.
    /// Returns the extremal vector and, per row, the number of columns that
    /// cover it.
    pub fn extract(
        &mut self,
        a: &BoundedMatrix,
        family: Family,
        tolerance: f64,
    ) -> (Vec<f64>, Vec<usize>) {
        let mut extremal = vec![family.trivial_bound(); self.cols];
        let mut coverage = vec![0usize; self.rows.len()];

        for (j, slot) in extremal.iter_mut().enumerate() {
            let Some(m) = self.column_bound(j, family) else {
                continue;
            };
            *slot = m;
            for (row, count) in self.rows.iter_mut().zip(coverage.iter_mut()) {
                let Some(h) = row.cells[j] else {
                    continue;
                };
                let coef = a.get(row.index, j).get();
                if approx_eq(h, m, tolerance) && family.attainable(coef, row.rhs, h, tolerance) {
                    *count += 1;
                } else {
                    row.cells[j] = None;
                }
            }
        }

        (extremal, coverage)
    }

    /// Keep only cells that can satisfy their row on their own. Used when the
    /// system constrains the boundary side only. Returns the live cell count
    /// per row.
    pub fn restrict_to_coverable(
        &mut self,
        a: &BoundedMatrix,
        family: Family,
        tolerance: f64,
    ) -> Vec<usize> {
        self.rows
            .iter_mut()
            .map(|row| {
                let mut live = 0;
                for (j, cell) in row.cells.iter_mut().enumerate() {
                    let Some(h) = *cell else {
                        continue;
                    };
                    let coef = a.get(row.index, j).get();
                    if family.attainable(coef, row.rhs, h, tolerance) {
                        *cell = Some(h.clamp(0.0, 1.0));
                        live += 1;
                    } else {
                        *cell = None;
                    }
                }
                live
            })
            .collect()
    }

    /// Original indices of rows that are neither covered nor unconditional
    pub fn uncovered_rows(&self, coverage: &[usize]) -> Vec<usize> {
        self.rows
            .iter()
            .zip(coverage)
            .filter(|(row, count)| !row.unconditional && **count == 0)
            .map(|(row, _)| row.index)
            .collect()
    }

    /// Cell values with sentinels rendered as the family's sentinel number
    pub fn render(&self, family: Family) -> Vec<Vec<f64>> {
        let sentinel = family.trivial_bound();
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|c| c.unwrap_or(sentinel)).collect())
            .collect()
    }
}
