//! Pointwise operators on [0, 1]
//!
//! A closed catalog of binary operators resolved through one dispatch table.
//! The composition engine and the solver preprocessing both go through
//! [`Operator::raw`], so forward evaluation and inversion can never drift apart.

use crate::value::BoundedValue;
use crate::FuzzyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary operator `[0,1] x [0,1] -> [0,1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "product")]
    Product,
    /// `min(1, x + y)`
    #[serde(rename = "bounded-sum")]
    BoundedSum,
    /// `max(0, x + y - 1)`, the Lukasiewicz t-norm
    #[serde(rename = "bounded-difference")]
    BoundedDifference,
    /// `x + y - x*y`
    #[serde(rename = "probabilistic-sum")]
    ProbabilisticSum,
    /// Gödel implication (the alpha operator): `1` if `x <= y`, else `y`
    #[serde(rename = "alpha")]
    Alpha,
    /// `min(1, 1 - x + y)`
    #[serde(rename = "lukasiewicz-implication")]
    LukasiewiczImplication,
    /// `y` if `x < y`, else `0`
    #[serde(rename = "epsilon")]
    Epsilon,
    /// Goguen implication: `1` if `x <= y`, else `y / x`
    #[serde(rename = "diamond")]
    Diamond,
    /// `(y - x) / (1 - x)` if `x < y`, else `0`
    #[serde(rename = "delta")]
    Delta,
    /// `y - x` if `x < y`, else `0`
    #[serde(rename = "gamma")]
    Gamma,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Min,
        Operator::Max,
        Operator::Product,
        Operator::BoundedSum,
        Operator::BoundedDifference,
        Operator::ProbabilisticSum,
        Operator::Alpha,
        Operator::LukasiewiczImplication,
        Operator::Epsilon,
        Operator::Diamond,
        Operator::Delta,
        Operator::Gamma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Min => "min",
            Operator::Max => "max",
            Operator::Product => "product",
            Operator::BoundedSum => "bounded-sum",
            Operator::BoundedDifference => "bounded-difference",
            Operator::ProbabilisticSum => "probabilistic-sum",
            Operator::Alpha => "alpha",
            Operator::LukasiewiczImplication => "lukasiewicz-implication",
            Operator::Epsilon => "epsilon",
            Operator::Diamond => "diamond",
            Operator::Delta => "delta",
            Operator::Gamma => "gamma",
        }
    }

    /// The defining formula, before clamping to [0, 1].
    ///
    /// Only the bounded sum/difference and the Lukasiewicz implication can
    /// leave the unit interval here; solver preprocessing relies on seeing
    /// `1 - x + y` unclamped.
    pub fn raw(self, x: f64, y: f64) -> f64 {
        match self {
            Operator::Min => x.min(y),
            Operator::Max => x.max(y),
            Operator::Product => x * y,
            Operator::BoundedSum => x + y,
            Operator::BoundedDifference => x + y - 1.0,
            Operator::ProbabilisticSum => x + y - x * y,
            Operator::Alpha => {
                if x <= y {
                    1.0
                } else {
                    y
                }
            }
            Operator::LukasiewiczImplication => 1.0 - x + y,
            Operator::Epsilon => {
                if x < y {
                    y
                } else {
                    0.0
                }
            }
            Operator::Diamond => {
                if x <= y {
                    1.0
                } else {
                    y / x
                }
            }
            Operator::Delta => {
                if x < y {
                    (y - x) / (1.0 - x)
                } else {
                    0.0
                }
            }
            Operator::Gamma => {
                if x < y {
                    y - x
                } else {
                    0.0
                }
            }
        }
    }

    pub fn apply(self, x: BoundedValue, y: BoundedValue) -> BoundedValue {
        BoundedValue::new(self.raw(x.get(), y.get()))
    }

    /// Neutral element when the operator is used to fold a sequence.
    ///
    /// Only the associative, commutative operators have one; those are the
    /// only valid aggregates for a composition.
    pub fn identity(self) -> Option<f64> {
        match self {
            Operator::Max | Operator::BoundedSum | Operator::ProbabilisticSum => Some(0.0),
            Operator::Min | Operator::Product | Operator::BoundedDifference => Some(1.0),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operator {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let op = match normalized.as_str() {
            "godel" | "godel-implication" => Operator::Alpha,
            "goguen" | "goguen-implication" => Operator::Diamond,
            "lukasiewicz" => Operator::LukasiewiczImplication,
            "lukasiewicz-t-norm" => Operator::BoundedDifference,
            other => Operator::ALL
                .into_iter()
                .find(|op| op.name() == other)
                .ok_or_else(|| FuzzyError::UnknownOperator(s.to_string()))?,
        };
        Ok(op)
    }
}
