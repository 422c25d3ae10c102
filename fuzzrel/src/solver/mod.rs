//! Fuzzy relational equation solvers
//!
//! Solves `A ∘ x {=, <=, >=} b` for the two supported families through one
//! parametrized pipeline: preprocess → extremal extraction → consistency →
//! dominance reduction → boundary enumeration.
//!
//! - **Gödel** (min-alpha): `min_j (A[i,j] α x[j]) = b[i]`. The extremal
//!   vector is the least solution; the boundary holds the maximal ones.
//! - **max-Lukasiewicz**: `max_j max(0, A[i,j] + x[j] - 1) = b[i]`. The
//!   extremal vector is the greatest solution; the boundary holds the
//!   minimal ones.

pub(crate) mod boundary;
pub(crate) mod budget;
pub(crate) mod help;
pub(crate) mod reduction;
mod solution;

pub use solution::Solution;

use crate::composition::{compose_vector, Composition};
use crate::matrix::BoundedMatrix;
use crate::value::{approx_eq, BoundedValue, DEFAULT_TOLERANCE};
use crate::{FuzzyError, FuzzyResult, Operator, ResourceLimits};
use budget::SearchBudget;
use help::HelpMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which equation family a solver inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Godel,
    MaxLukasiewicz,
}

/// Relation between `A ∘ x` and `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "eq")]
    Equality,
    #[serde(rename = "le")]
    AtMost,
    #[serde(rename = "ge")]
    AtLeast,
}

/// How a family treats a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Full pipeline
    Equation,
    /// Only the extremal bound is constrained; the boundary is trivial
    Extremal,
    /// Only coverability matters; the extremal is trivial
    Boundary,
}

impl Family {
    /// The composition whose inverse this family computes
    pub fn composition(self) -> Composition {
        match self {
            Family::Godel => Composition::MinAlpha,
            Family::MaxLukasiewicz => Composition::MaxLukasiewicz,
        }
    }

    /// The trivial bound: starting point of boundary enumeration and the
    /// boundary of a system without rows. All-ones for Gödel, all-zeros for
    /// max-Lukasiewicz.
    pub fn trivial_bound(self) -> f64 {
        match self {
            Family::Godel => 1.0,
            Family::MaxLukasiewicz => 0.0,
        }
    }

    /// The opposite trivial bound, used as the extremal vector when only the
    /// boundary side of a system is constrained
    pub fn opposite_bound(self) -> f64 {
        1.0 - self.trivial_bound()
    }

    /// Whether `u` is no worse than `v` as a boundary vector.
    ///
    /// Boundary vectors are maximal for Gödel and minimal for max-Lukasiewicz,
    /// so "no worse" means element-wise `>=` resp. `<=` within tolerance.
    pub fn dominates(self, u: &[f64], v: &[f64], tolerance: f64) -> bool {
        u.len() == v.len()
            && u.iter().zip(v).all(|(x, y)| match self {
                Family::Godel => *x >= *y - tolerance,
                Family::MaxLukasiewicz => *x <= *y + tolerance,
            })
    }

    /// Help-matrix cell for coefficient `a` and right-hand side `b`, or `None`
    /// for the sentinel.
    fn preprocess(self, a: f64, b: f64, tolerance: f64) -> Option<f64> {
        match self {
            // Cells with a < b keep min(a, b) rather than the sentinel; they
            // still bound the extremal and `attainable` keeps them from covering.
            Family::Godel => Some(Operator::Min.raw(a, b)),
            Family::MaxLukasiewicz => {
                if a - 1.0 <= b + tolerance {
                    Some(Operator::LukasiewiczImplication.raw(a, b))
                } else {
                    None
                }
            }
        }
    }

    /// Column aggregation for the extremal vector
    fn fold(self, acc: f64, h: f64) -> f64 {
        match self {
            Family::Godel => acc.max(h),
            Family::MaxLukasiewicz => acc.min(h),
        }
    }

    /// Move a boundary accumulator coordinate towards a cell value
    fn tighten(self, acc: f64, h: f64) -> f64 {
        match self {
            Family::Godel => acc.min(h),
            Family::MaxLukasiewicz => acc.max(h),
        }
    }

    /// Whether an accumulator coordinate satisfies a cell's constraint
    fn satisfies(self, acc: f64, h: f64, tolerance: f64) -> bool {
        match self {
            Family::Godel => acc <= h + tolerance,
            Family::MaxLukasiewicz => acc >= h - tolerance,
        }
    }

    /// Whether choosing this cell can make its row hold with equality
    fn attainable(self, a: f64, b: f64, h: f64, tolerance: f64) -> bool {
        match self {
            // H = min(a, b) reaches b only when a >= b
            Family::Godel => a >= b - tolerance,
            Family::MaxLukasiewicz => h <= 1.0 + tolerance,
        }
    }

    /// Rows every vector between the extremal and the trivial bound satisfies
    fn is_unconditional(self, b: f64, tolerance: f64) -> bool {
        match self {
            Family::Godel => b >= 1.0 - tolerance,
            Family::MaxLukasiewicz => b <= tolerance,
        }
    }

    fn side(self, mode: Mode) -> Side {
        match (self, mode) {
            (_, Mode::Equality) => Side::Equation,
            (Family::Godel, Mode::AtLeast) | (Family::MaxLukasiewicz, Mode::AtMost) => {
                Side::Extremal
            }
            _ => Side::Boundary,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Godel => "godel",
            Family::MaxLukasiewicz => "max-lukasiewicz",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Family {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "godel" | "min-alpha" => Ok(Family::Godel),
            "max-lukasiewicz" | "lukasiewicz" => Ok(Family::MaxLukasiewicz),
            _ => Err(FuzzyError::UnknownFamily(s.to_string())),
        }
    }
}

impl Mode {
    fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Mode::Equality => approx_eq(lhs, rhs, tolerance),
            Mode::AtMost => lhs <= rhs + tolerance,
            Mode::AtLeast => lhs >= rhs - tolerance,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mode::Equality => "=",
            Mode::AtMost => "<=",
            Mode::AtLeast => ">=",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for Mode {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" | "eq" => Ok(Mode::Equality),
            "<=" | "le" => Ok(Mode::AtMost),
            ">=" | "ge" => Ok(Mode::AtLeast),
            _ => Err(FuzzyError::UnknownMode(s.to_string())),
        }
    }
}

/// What [`Solver::solve`] returns
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutput {
    /// Only the extremal vector was requested and the system is consistent
    Extremal(Vec<f64>),
    /// The full record. Always returned for inconsistent systems.
    Full(Solution),
}

/// A relational equation solver for one family.
///
/// Holds no per-solve state: every call owns its scratch help matrix,
/// coverage markers and antichain, so a solver can be shared across threads.
#[derive(Debug, Clone)]
pub struct Solver {
    family: Family,
    tolerance: f64,
    limits: ResourceLimits,
}

impl Solver {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            tolerance: DEFAULT_TOLERANCE,
            limits: ResourceLimits::default(),
        }
    }

    pub fn godel() -> Self {
        Self::new(Family::Godel)
    }

    pub fn max_lukasiewicz() -> Self {
        Self::new(Family::MaxLukasiewicz)
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Solve `a ∘ x (mode) b`.
    ///
    /// With `full = false` a consistent system returns only its extremal
    /// vector. Inconsistent systems always return the full record with
    /// `exist == false`.
    pub fn solve(
        &self,
        a: &BoundedMatrix,
        b: &[f64],
        mode: Mode,
        full: bool,
    ) -> FuzzyResult<SolveOutput> {
        if full {
            return self.solve_full(a, b, mode).map(SolveOutput::Full);
        }
        let prepared = self.prepare(a, b, mode)?;
        if prepared.contradict.is_empty() {
            Ok(SolveOutput::Extremal(prepared.extremal))
        } else {
            Ok(SolveOutput::Full(prepared.into_inconsistent(a, mode)))
        }
    }

    /// Solve and always return the full record
    pub fn solve_full(&self, a: &BoundedMatrix, b: &[f64], mode: Mode) -> FuzzyResult<Solution> {
        let family = self.family;
        let prepared = self.prepare(a, b, mode)?;
        if !prepared.contradict.is_empty() {
            return Ok(prepared.into_inconsistent(a, mode));
        }

        let (rows, cols) = a.shape();
        let Prepared { help, side, extremal, .. } = prepared;

        if side == Side::Extremal {
            return Ok(Solution {
                family,
                mode,
                rows,
                cols,
                exist: true,
                contradict: Vec::new(),
                extremal,
                boundary: vec![vec![family.trivial_bound(); cols]],
                help_rows: help.len(),
            });
        }

        let reduced = reduction::reduce(&help, family, self.tolerance);
        debug!(%family, help_rows = reduced.len(), dropped = help.len() - reduced.len(), "reduced help matrix");

        let mut budget = SearchBudget::new(&self.limits);
        let boundary = boundary::enumerate(&reduced, family, self.tolerance, &mut budget)?;
        debug!(%family, boundary = boundary.len(), nodes = budget.nodes(), "enumerated boundary");

        Ok(Solution {
            family,
            mode,
            rows,
            cols,
            exist: true,
            contradict: Vec::new(),
            extremal,
            boundary,
            help_rows: reduced.len(),
        })
    }

    /// Validation, preprocessing, extraction and the consistency check
    fn prepare(&self, a: &BoundedMatrix, b: &[f64], mode: Mode) -> FuzzyResult<Prepared> {
        self.check_input(a, b)?;

        let family = self.family;
        let tolerance = self.tolerance;
        let rhs: Vec<f64> = b.iter().map(|v| BoundedValue::new(*v).get()).collect();
        let (rows, cols) = a.shape();

        let mut help = HelpMatrix::build(a, &rhs, family, tolerance);
        debug!(%family, %mode, rows, cols, "preprocessed help matrix");
        trace!(help = ?help.render(family), "help matrix cells");

        let side = family.side(mode);
        let (extremal, contradict) = match side {
            Side::Extremal => (help.bound(family), Vec::new()),
            Side::Equation => {
                let (extremal, coverage) = help.extract(a, family, tolerance);
                (extremal, help.uncovered_rows(&coverage))
            }
            Side::Boundary => {
                let coverage = help.restrict_to_coverable(a, family, tolerance);
                (vec![family.opposite_bound(); cols], help.uncovered_rows(&coverage))
            }
        };
        if !contradict.is_empty() {
            debug!(%family, %mode, contradicting = contradict.len(), "system is inconsistent");
        }

        Ok(Prepared {
            family,
            help,
            side,
            extremal,
            contradict,
        })
    }

    /// The extremal vector, or `None` when the system is inconsistent
    pub fn extremal(
        &self,
        a: &BoundedMatrix,
        b: &[f64],
        mode: Mode,
    ) -> FuzzyResult<Option<Vec<f64>>> {
        match self.solve(a, b, mode, false)? {
            SolveOutput::Extremal(extremal) => Ok(Some(extremal)),
            SolveOutput::Full(solution) if solution.exist => Ok(Some(solution.extremal)),
            SolveOutput::Full(_) => Ok(None),
        }
    }

    /// Whether `x` solves `a ∘ x (mode) b` under the family's composition
    pub fn verify(&self, a: &BoundedMatrix, b: &[f64], x: &[f64], mode: Mode) -> FuzzyResult<bool> {
        if a.rows() != b.len() {
            return Err(FuzzyError::DimensionMismatch {
                operation: "verify",
                expected: a.rows(),
                found: b.len(),
            });
        }
        let lhs = compose_vector(a, x, self.family.composition())?;
        Ok(lhs
            .iter()
            .zip(b)
            .all(|(l, r)| mode.holds(*l, BoundedValue::new(*r).get(), self.tolerance)))
    }

    fn check_input(&self, a: &BoundedMatrix, b: &[f64]) -> FuzzyResult<()> {
        if a.rows() != b.len() {
            return Err(FuzzyError::DimensionMismatch {
                operation: "solve",
                expected: a.rows(),
                found: b.len(),
            });
        }
        let cells = a.rows() * a.cols();
        if cells > self.limits.max_matrix_cells {
            return Err(FuzzyError::ResourceLimitExceeded {
                limit_name: "max_matrix_cells".to_string(),
                limit_value: self.limits.max_matrix_cells.to_string(),
                actual_value: cells.to_string(),
                suggestion: format!(
                    "Split the system or raise the limit above {} cells",
                    cells
                ),
            });
        }
        Ok(())
    }
}

/// State after the consistency check, before reduction
struct Prepared {
    family: Family,
    help: HelpMatrix,
    side: Side,
    extremal: Vec<f64>,
    contradict: Vec<usize>,
}

impl Prepared {
    fn into_inconsistent(self, a: &BoundedMatrix, mode: Mode) -> Solution {
        Solution {
            family: self.family,
            mode,
            rows: a.rows(),
            cols: a.cols(),
            exist: false,
            help_rows: self.help.len(),
            contradict: self.contradict,
            extremal: self.extremal,
            boundary: Vec::new(),
        }
    }
}
