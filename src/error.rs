//! Error types for the `hungarian-wells` library.

use thiserror::Error;

/// Errors that can occur while building or solving an assignment problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The number of houses does not equal `n * k`, or a cost matrix handed
    /// to the solver is not square.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Dimension actually observed.
        got: usize,
    },

    /// The input file does not conform to the `N K` / coordinate-lines format.
    #[error("malformed input at line {line}: {reason}")]
    InputStructure {
        /// One-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An internal invariant of the Kuhn-Munkres solver was violated. This
    /// indicates a programming error in the solver itself, never a
    /// consequence of malformed input, and is not retryable.
    #[error("solver invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type alias for `hungarian-wells` operations.
pub type Result<T> = std::result::Result<T, Error>;
