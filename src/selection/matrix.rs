//! Kth smallest element in a row- and column-sorted matrix.
//!
//! ## Purpose
//!
//! Given a matrix whose rows ascend left-to-right and whose columns ascend
//! top-to-bottom (no invariant *across* rows beyond that), find the kth
//! smallest of all its elements without flattening or sorting.
//!
//! ## Key concepts
//!
//! ### Value-range binary search
//!
//! The answer lies in `[matrix[0][0], matrix[rows-1][cols-1]]`. Binary
//! search runs over that *value* range, not over indices: for a candidate
//! value, count how many elements are ≤ it; if fewer than k, the answer is
//! larger. The range collapses onto the smallest value with count ≥ k,
//! which is necessarily present in the matrix.
//!
//! ### Staircase counting
//!
//! Counting elements ≤ candidate walks from the top-right corner: step left
//! while the element exceeds the candidate, then everything at or left of
//! the pointer in this row counts, and the pointer carries over to the next
//! row (it can only move further left as rows grow downward). One count is
//! O(rows + cols), not O(rows · cols).
//!
//! ## Design notes
//!
//! * Degrading this to flatten-and-sort would defeat the point; the binary
//!   search costs O((rows + cols) · log(max − min)).
//! * Elements are [`PrimInt`] because the search needs value midpoints. The
//!   value span may exceed the element type's own range (both extremes of a
//!   signed type are valid contents), so the midpoint is a shift-based floor
//!   average rather than `lo + (hi − lo) / 2`.
//! * Rectangular matrices are accepted; rows must merely be uniform width.
//!
//! ## Edge cases
//!
//! * Empty matrix or empty rows: [`SlicekitError::EmptyMatrix`].
//! * Rows of unequal width: [`SlicekitError::RaggedMatrix`].
//! * `k` outside `1..=rows·cols`: [`SlicekitError::RankOutOfRange`].
//! * Sortedness of rows/columns is an unchecked precondition.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::PrimInt;

use crate::api::Result;
use crate::primitives::errors::SlicekitError;

/// The kth smallest element (1-based) of a row/column sorted matrix.
///
/// ```rust
/// use slicekit::prelude::*;
///
/// let m = vec![
///     vec![1, 5, 9],
///     vec![10, 11, 13],
///     vec![12, 13, 15],
/// ];
/// assert_eq!(kth_smallest(&m, 8), Ok(13));
/// ```
pub fn kth_smallest<T: PrimInt>(matrix: &[Vec<T>], k: usize) -> Result<T> {
    let (rows, cols) = validate(matrix)?;
    let total = rows * cols;
    if k == 0 || k > total {
        return Err(SlicekitError::RankOutOfRange { k, len: total });
    }

    let mut lo = matrix[0][0];
    let mut hi = matrix[rows - 1][cols - 1];

    // Invariant: the answer is always in [lo, hi].
    while lo < hi {
        let mid = midpoint(lo, hi);
        if count_at_most(matrix, cols, mid) < k {
            lo = mid + T::one();
        } else {
            hi = mid;
        }
    }
    Ok(lo)
}

/// Floor average of `lo` and `hi` without forming `hi - lo`, whose span can
/// exceed the signed type's own range. Lands in `[lo, hi)` whenever
/// `lo < hi`.
fn midpoint<T: PrimInt>(lo: T, hi: T) -> T {
    (lo >> 1) + (hi >> 1) + (lo & hi & T::one())
}

/// Count elements ≤ `candidate` by the top-right staircase walk.
fn count_at_most<T: PrimInt>(matrix: &[Vec<T>], cols: usize, candidate: T) -> usize {
    let mut count = 0;
    let mut j = cols; // one past the rightmost element still ≤ candidate
    for row in matrix {
        while j > 0 && row[j - 1] > candidate {
            j -= 1;
        }
        count += j;
    }
    count
}

/// Structural validation; returns `(rows, cols)`.
fn validate<T>(matrix: &[Vec<T>]) -> Result<(usize, usize)> {
    let rows = matrix.len();
    if rows == 0 {
        return Err(SlicekitError::EmptyMatrix);
    }
    let cols = matrix[0].len();
    if cols == 0 {
        return Err(SlicekitError::EmptyMatrix);
    }
    for (i, row) in matrix.iter().enumerate().skip(1) {
        if row.len() != cols {
            return Err(SlicekitError::RaggedMatrix {
                row: i,
                expected: cols,
                got: row.len(),
            });
        }
    }
    Ok((rows, cols))
}
