//! Error types for matrix operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

use crate::primitives::{MAX_SIZE, MIN_SIZE};

/// Main error type for matrix operations.
///
/// Every failure is a deterministic validation failure: a dimension
/// outside the accepted range, operand shapes that disagree, or element
/// data whose length does not match the declared shape.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// A dimension passed to a constructor lies outside `[MIN_SIZE, MAX_SIZE]`.
    DimensionOutOfRange {
        /// Which dimension failed validation ("rows" or "cols")
        axis: &'static str,
        /// The rejected value
        value: usize,
    },

    /// Operand shapes don't agree for the requested operation.
    DimensionMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Element data length doesn't match `rows * cols`.
    DataLength {
        /// Required number of elements
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionOutOfRange { axis, value } => {
                write!(
                    f,
                    "Matrix {axis} out of range: {value} not in [{MIN_SIZE}, {MAX_SIZE}]"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::DataLength { expected, actual } => {
                write!(
                    f,
                    "Data length must equal rows * cols: expected {expected}, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error from two operand shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
