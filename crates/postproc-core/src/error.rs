//! Error types for postproc-core operations.
//!
//! The [`Error`] enum covers the failure modes of the data model:
//! - Frame stack assembly (empty input, mismatched frame shapes)
//! - Mask construction (zero dimensions, non-binary values)
//!
//! # Usage
//!
//! ```rust
//! use postproc_core::{Error, Result};
//!
//! fn check_shape(rows: usize, cols: usize) -> Result<()> {
//!     if rows == 0 || cols == 0 {
//!         return Err(Error::invalid_dimensions(rows, cols, "mask must not be empty"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Used By
//!
//! - [`crate::frames`] - Stack assembly
//! - [`crate::mask`] - Mask validation and generation
//! - `postproc-ops` - Wrapped into `OpsError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building frame stacks and masks.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid 2D dimensions.
    ///
    /// Returned when a row or column count is zero.
    #[error("invalid dimensions: {rows}x{cols} ({reason})")]
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Two 2D shapes that must agree do not.
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        got: (usize, usize),
    },

    /// A mask contains a value other than 0 or 1.
    #[error("mask value {value} at ({row}, {col}) is not binary")]
    NotBinary {
        /// Offending row
        row: usize,
        /// Offending column
        col: usize,
        /// Offending value
        value: u8,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(rows: usize, cols: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Returns `true` if this is a shape-related error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. } | Self::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 64, "rows must be positive");
        let msg = err.to_string();
        assert!(msg.contains("0x64"));
        assert!(msg.contains("rows must be positive"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Error::shape_mismatch((100, 100), (200, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x50"));
    }

    #[test]
    fn test_not_binary() {
        let err = Error::NotBinary { row: 1, col: 2, value: 7 };
        assert!(err.to_string().contains("(1, 2)"));
        assert!(!err.is_shape_error());
    }
}
