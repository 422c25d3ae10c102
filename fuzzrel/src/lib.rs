//! # fuzzrel
//!
//! **Fuzzy relational equations over [0, 1]**
//!
//! fuzzrel composes fuzzy relations and inverts them: given a matrix `A`, a
//! right-hand side `b` and a composition, it decides whether `A ∘ x = b` (or
//! `<=`, `>=`) has a solution, extracts the extremal one and enumerates the
//! remaining boundary of pairwise incomparable solutions.
//!
//! ## Quick Start
//!
//! ```rust
//! use fuzzrel::{BoundedMatrix, FuzzyResult, Mode, Solver};
//!
//! fn main() -> FuzzyResult<()> {
//!     let a = BoundedMatrix::from_rows(&[[0.6]])?;
//!     let solution = Solver::max_lukasiewicz().solve_full(&a, &[0.3], Mode::Equality)?;
//!
//!     assert!(solution.exist);
//!     assert!((solution.extremal[0] - 0.7).abs() < 1e-9);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Operators and compositions
//! [`Operator`] is the closed catalog of binary functions on [0, 1]. A
//! [`Composition`] pairs an aggregate with a pointwise operator and runs
//! through the single engine in [`compose`].
//!
//! ### Solvers
//! A [`Solver`] inverts one [`Family`] of compositions: the Gödel (min-alpha)
//! family or the max-Lukasiewicz family. Both share one pipeline and differ
//! only in their formulas and ordering.
//!
//! ### Limits
//! Boundary enumeration is exponential in the worst case. [`ResourceLimits`]
//! caps input size, search nodes and wall-clock time.

pub mod composition;
pub mod error;
pub mod matrix;
pub mod operators;
pub mod resource_limits;
pub mod serializers;
pub mod solver;
pub mod value;

pub use composition::{compose, compose_vector, Composition};
pub use error::FuzzyError;
pub use matrix::BoundedMatrix;
pub use operators::Operator;
pub use resource_limits::ResourceLimits;
pub use solver::{Family, Mode, Solution, SolveOutput, Solver};
pub use value::BoundedValue;

/// Result type for fuzzrel operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;

#[cfg(test)]
mod tests;
