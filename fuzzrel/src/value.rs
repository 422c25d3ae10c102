//! Bounded membership degrees
//!
//! Every value handled by the operator library lives in [0, 1]. Construction
//! clamps out-of-range input to the nearest bound and collapses NaN to 0.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default comparison window for all tolerance-based equality
pub const DEFAULT_TOLERANCE: f64 = f64::EPSILON;

/// A real number clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct BoundedValue(f64);

impl BoundedValue {
    pub const ZERO: BoundedValue = BoundedValue(0.0);
    pub const ONE: BoundedValue = BoundedValue(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return BoundedValue(0.0);
        }
        BoundedValue(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn approx_eq(self, other: BoundedValue, tolerance: f64) -> bool {
        approx_eq(self.0, other.0, tolerance)
    }
}

impl From<f64> for BoundedValue {
    fn from(value: f64) -> Self {
        BoundedValue::new(value)
    }
}

impl From<BoundedValue> for f64 {
    fn from(value: BoundedValue) -> Self {
        value.0
    }
}

impl fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_degree(self.0))
    }
}

/// `|a - b| <= tolerance`
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Element-wise [`approx_eq`] combined with logical AND. Slices of different
/// lengths are never equal.
pub fn vectors_approx_eq(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y, tolerance))
}

/// Render a degree with at most four decimals and no trailing zeros
pub fn format_degree(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Render a vector as `[a, b, c]` using [`format_degree`]
pub fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format_degree(*v)).collect();
    format!("[{}]", parts.join(", "))
}
