//! Generalized matrix composition
//!
//! `result[i,j] = aggregate_t pointwise(A[i,t], B[t,j])`. Every named
//! composition is this one engine with a fixed operator pair.

use crate::matrix::BoundedMatrix;
use crate::value::BoundedValue;
use crate::{FuzzyError, FuzzyResult, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compose `a` with `b` using an aggregate fold over pointwise results.
///
/// Fails with [`FuzzyError::DimensionMismatch`] when `a.cols() != b.rows()`
/// and with [`FuzzyError::InvalidAggregator`] when `aggregate` has no
/// identity element; nothing is computed in either case.
pub fn compose(
    a: &BoundedMatrix,
    b: &BoundedMatrix,
    aggregate: Operator,
    pointwise: Operator,
) -> FuzzyResult<BoundedMatrix> {
    if a.cols() != b.rows() {
        return Err(FuzzyError::DimensionMismatch {
            operation: "compose",
            expected: a.cols(),
            found: b.rows(),
        });
    }
    let identity = aggregate
        .identity()
        .ok_or(FuzzyError::InvalidAggregator(aggregate))?;

    let mut data = Vec::with_capacity(a.rows() * b.cols());
    for i in 0..a.rows() {
        let row = a.row(i);
        for j in 0..b.cols() {
            let cell = row
                .iter()
                .enumerate()
                .fold(BoundedValue::new(identity), |acc, (t, &left)| {
                    aggregate.apply(acc, pointwise.apply(left, b.get(t, j)))
                });
            data.push(cell.get());
        }
    }
    BoundedMatrix::new(a.rows(), b.cols(), data)
}

/// Compose a matrix with a vector, treating `x` as a column
pub fn compose_vector(
    a: &BoundedMatrix,
    x: &[f64],
    composition: Composition,
) -> FuzzyResult<Vec<f64>> {
    let result = composition.apply(a, &BoundedMatrix::column(x))?;
    Ok(result.column_values(0))
}

/// The named compositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Composition {
    #[serde(rename = "max-min")]
    MaxMin,
    #[serde(rename = "min-max")]
    MinMax,
    #[serde(rename = "max-product")]
    MaxProduct,
    /// Gödel composition
    #[serde(rename = "min-alpha")]
    MinAlpha,
    #[serde(rename = "max-epsilon")]
    MaxEpsilon,
    /// Goguen composition
    #[serde(rename = "min-diamond")]
    MinDiamond,
    /// min over the Lukasiewicz implication
    #[serde(rename = "lukasiewicz")]
    Lukasiewicz,
    /// max over the Lukasiewicz t-norm
    #[serde(rename = "max-lukasiewicz")]
    MaxLukasiewicz,
    #[serde(rename = "min-probabilistic")]
    MinProbabilistic,
    #[serde(rename = "min-bounded")]
    MinBounded,
    #[serde(rename = "max-delta")]
    MaxDelta,
    #[serde(rename = "max-gamma")]
    MaxGamma,
}

impl Composition {
    pub const ALL: [Composition; 12] = [
        Composition::MaxMin,
        Composition::MinMax,
        Composition::MaxProduct,
        Composition::MinAlpha,
        Composition::MaxEpsilon,
        Composition::MinDiamond,
        Composition::Lukasiewicz,
        Composition::MaxLukasiewicz,
        Composition::MinProbabilistic,
        Composition::MinBounded,
        Composition::MaxDelta,
        Composition::MaxGamma,
    ];

    /// `(aggregate, pointwise)`
    pub fn operators(self) -> (Operator, Operator) {
        use Operator as Op;
        match self {
            Composition::MaxMin => (Op::Max, Op::Min),
            Composition::MinMax => (Op::Min, Op::Max),
            Composition::MaxProduct => (Op::Max, Op::Product),
            Composition::MinAlpha => (Op::Min, Op::Alpha),
            Composition::MaxEpsilon => (Op::Max, Op::Epsilon),
            Composition::MinDiamond => (Op::Min, Op::Diamond),
            Composition::Lukasiewicz => (Op::Min, Op::LukasiewiczImplication),
            Composition::MaxLukasiewicz => (Op::Max, Op::BoundedDifference),
            Composition::MinProbabilistic => (Op::Min, Op::ProbabilisticSum),
            Composition::MinBounded => (Op::Min, Op::BoundedSum),
            Composition::MaxDelta => (Op::Max, Op::Delta),
            Composition::MaxGamma => (Op::Max, Op::Gamma),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Composition::MaxMin => "max-min",
            Composition::MinMax => "min-max",
            Composition::MaxProduct => "max-product",
            Composition::MinAlpha => "min-alpha",
            Composition::MaxEpsilon => "max-epsilon",
            Composition::MinDiamond => "min-diamond",
            Composition::Lukasiewicz => "lukasiewicz",
            Composition::MaxLukasiewicz => "max-lukasiewicz",
            Composition::MinProbabilistic => "min-probabilistic",
            Composition::MinBounded => "min-bounded",
            Composition::MaxDelta => "max-delta",
            Composition::MaxGamma => "max-gamma",
        }
    }

    pub fn apply(self, a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
        let (aggregate, pointwise) = self.operators();
        compose(a, b, aggregate, pointwise)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Composition {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "godel" => Ok(Composition::MinAlpha),
            "goguen" => Ok(Composition::MinDiamond),
            other => Composition::ALL
                .into_iter()
                .find(|c| c.name() == other)
                .ok_or_else(|| FuzzyError::UnknownComposition(s.to_string())),
        }
    }
}

pub fn max_min(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxMin.apply(a, b)
}

pub fn min_max(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MinMax.apply(a, b)
}

pub fn max_product(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxProduct.apply(a, b)
}

pub fn min_alpha(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MinAlpha.apply(a, b)
}

/// Alias of [`min_alpha`]
pub fn godel(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    min_alpha(a, b)
}

pub fn max_epsilon(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxEpsilon.apply(a, b)
}

pub fn min_diamond(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MinDiamond.apply(a, b)
}

/// Alias of [`min_diamond`]
pub fn goguen(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    min_diamond(a, b)
}

pub fn lukasiewicz(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::Lukasiewicz.apply(a, b)
}

pub fn max_lukasiewicz(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxLukasiewicz.apply(a, b)
}

pub fn min_probabilistic(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MinProbabilistic.apply(a, b)
}

pub fn min_bounded(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MinBounded.apply(a, b)
}

pub fn max_delta(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxDelta.apply(a, b)
}

pub fn max_gamma(a: &BoundedMatrix, b: &BoundedMatrix) -> FuzzyResult<BoundedMatrix> {
    Composition::MaxGamma.apply(a, b)
}
