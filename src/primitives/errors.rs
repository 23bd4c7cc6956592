//! Shared error type for slicekit operations.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! are reserved for *structurally* invalid input that a caller can observe
//! up front: an empty or ragged matrix, or an order-statistic rank outside
//! the element count.
//!
//! ## Design notes
//!
//! * "Not found" outcomes are `Option::None` everywhere, never an error.
//! * Violated sortedness preconditions are documented undefined results, not
//!   detected errors; detecting them would change the complexity class of
//!   the algorithms that assume them.
//! * The enum derives `PartialEq` so tests can assert on exact variants.
//!
//! ## Visibility
//!
//! Re-exported from [`crate::api`]; stable.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error conditions for structurally invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlicekitError {
    /// A matrix operation received a matrix with no rows or no columns.
    EmptyMatrix,

    /// A matrix row does not match the width of the first row.
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width actually found.
        got: usize,
    },

    /// An order-statistic rank k is outside `1..=len`.
    RankOutOfRange {
        /// The requested 1-based rank.
        k: usize,
        /// Total number of elements available.
        len: usize,
    },
}

impl fmt::Display for SlicekitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlicekitError::EmptyMatrix => {
                write!(f, "matrix has no rows or no columns")
            }
            SlicekitError::RaggedMatrix { row, expected, got } => {
                write!(
                    f,
                    "matrix row {} has width {} but the first row has width {}",
                    row, got, expected
                )
            }
            SlicekitError::RankOutOfRange { k, len } => {
                write!(f, "rank k={} is outside 1..={}", k, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SlicekitError {}
