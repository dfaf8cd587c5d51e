//! Error types for simul8 operations.
//!
//! Only shape problems are reported as errors. Numerical edge cases
//! (singular inversion, division by zero, normalising a zero vector) are
//! handled as silent no-ops by the operations themselves, and inverting a
//! zero-norm quaternion is a panic rather than an [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use simul8_core::{Error, Result};
//!
//! fn check_same_shape(a: (usize, usize), b: (usize, usize)) -> Result<()> {
//!     if a != b {
//!         return Err(Error::dimension_mismatch("add", a, b));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_same_shape((2, 3), (3, 2)).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during matrix operations.
///
/// # Categories
///
/// - **Operand errors**: [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Precondition errors**: [`Shape`](Error::Shape)
/// - **Construction errors**: [`RaggedRows`](Error::RaggedRows), [`DataLength`](Error::DataLength)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two operands have incompatible shapes for a binary operation.
    ///
    /// Returned by add and subtract when the shapes differ, and by
    /// multiply when the left column count differs from the right row
    /// count. Shapes are `(rows, columns)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simul8_core::Error;
    ///
    /// let err = Error::dimension_mismatch("multiply", (2, 3), (2, 3));
    /// assert!(err.to_string().contains("2x3"));
    /// ```
    #[error("{op}: dimension mismatch {a_rows}x{a_columns} vs {b_rows}x{b_columns}")]
    DimensionMismatch {
        /// Operation that rejected the operands
        op: &'static str,
        /// Left operand row count
        a_rows: usize,
        /// Left operand column count
        a_columns: usize,
        /// Right operand row count
        b_rows: usize,
        /// Right operand column count
        b_columns: usize,
    },

    /// Operation requires a fixed shape the matrix does not have.
    ///
    /// Determinant, inversion, Euler assignment and vector transform are
    /// only defined for 3x3 matrices.
    #[error("{op}: requires a {expected_rows}x{expected_columns} matrix, got {rows}x{columns}")]
    Shape {
        /// Operation that was attempted
        op: &'static str,
        /// Required row count
        expected_rows: usize,
        /// Required column count
        expected_columns: usize,
        /// Actual row count
        rows: usize,
        /// Actual column count
        columns: usize,
    },

    /// Row data passed to a constructor has inconsistent lengths.
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        /// Length of the first row
        expected: usize,
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Flat element buffer does not hold exactly `rows * columns` values.
    #[error("{rows}x{columns} matrix needs {expected} elements, got {got}")]
    DataLength {
        /// Row count
        rows: usize,
        /// Column count
        columns: usize,
        /// `rows * columns`, or `usize::MAX` if that overflows
        expected: usize,
        /// Elements supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] error from two
    /// `(rows, columns)` shapes.
    #[inline]
    pub fn dimension_mismatch(op: &'static str, a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            op,
            a_rows: a.0,
            a_columns: a.1,
            b_rows: b.0,
            b_columns: b.1,
        }
    }

    /// Creates an [`Error::Shape`] error.
    ///
    /// # Arguments
    ///
    /// * `op` - Operation name
    /// * `expected` - Required `(rows, columns)`
    /// * `actual` - Actual `(rows, columns)`
    #[inline]
    pub fn shape(op: &'static str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::Shape {
            op,
            expected_rows: expected.0,
            expected_columns: expected.1,
            rows: actual.0,
            columns: actual.1,
        }
    }

    /// Creates an [`Error::RaggedRows`] error.
    #[inline]
    pub fn ragged_rows(expected: usize, row: usize, got: usize) -> Self {
        Self::RaggedRows { expected, row, got }
    }

    /// Creates an [`Error::DataLength`] error.
    #[inline]
    pub fn data_length(rows: usize, columns: usize, got: usize) -> Self {
        Self::DataLength {
            rows,
            columns,
            expected: rows.checked_mul(columns).unwrap_or(usize::MAX),
            got,
        }
    }

    /// Returns `true` if two operands were incompatible.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Returns `true` if a fixed-shape precondition was violated.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}
