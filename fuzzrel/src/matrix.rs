//! Dense row-major matrices of bounded values

use crate::value::{approx_eq, BoundedValue, DEFAULT_TOLERANCE};
use crate::{FuzzyError, FuzzyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable 2-D array of [`BoundedValue`]s.
///
/// Equality is tolerance-based: two matrices are equal when they have the same
/// shape and every pair of entries differs by at most machine epsilon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct BoundedMatrix {
    rows: usize,
    cols: usize,
    data: Vec<BoundedValue>,
}

impl BoundedMatrix {
    /// Build a `rows x cols` matrix from row-major data, clamping every entry
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> FuzzyResult<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(FuzzyError::InvalidShape {
                rows,
                cols,
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.into_iter().map(BoundedValue::new).collect(),
        })
    }

    /// Build a matrix from nested rows. An empty slice yields a 0x0 matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FuzzyResult<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(FuzzyError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row.iter().copied().map(BoundedValue::new));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// An `n x 1` column vector
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.iter().copied().map(BoundedValue::new).collect(),
        }
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![BoundedValue::new(value); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `(i, j)`. Panics when out of range, like slice indexing.
    pub fn get(&self, i: usize, j: usize) -> BoundedValue {
        assert!(j < self.cols, "column {} out of range for {} columns", j, self.cols);
        self.data[i * self.cols + j]
    }

    pub fn row(&self, i: usize) -> &[BoundedValue] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn column_values(&self, j: usize) -> Vec<f64> {
        (0..self.rows).map(|i| self.get(i, j).get()).collect()
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|i| self.row(i).iter().map(|v| v.get()).collect())
            .collect()
    }

    pub fn approx_eq(&self, other: &BoundedMatrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx_eq(a.get(), b.get(), tolerance))
    }
}

impl PartialEq for BoundedMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }
}

impl TryFrom<Vec<Vec<f64>>> for BoundedMatrix {
    type Error = FuzzyError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        BoundedMatrix::from_rows(&rows)
    }
}

impl From<BoundedMatrix> for Vec<Vec<f64>> {
    fn from(matrix: BoundedMatrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for BoundedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let cells: Vec<String> = self.row(i).iter().map(|v| v.to_string()).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
