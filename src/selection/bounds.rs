//! Ceiling and floor of a query value in a sorted slice.
//!
//! ## Purpose
//!
//! For a query that need not be present: the **ceiling** is the smallest
//! element ≥ query, the **floor** the largest element ≤ query. Both are
//! reported as indices so callers keep positional context; an exact match
//! is simultaneously its own ceiling and floor.
//!
//! ## Edge cases
//!
//! * Query below the minimum: no floor. Above the maximum: no ceiling.
//! * Empty slice: neither.
//! * With duplicates the ceiling index is the leftmost qualifying element
//!   and the floor index the rightmost, so `floor ≤ query ≤ ceiling` holds
//!   with the widest index spread.
//!
//! Precondition: sorted ascending (unchecked). Two O(log n) narrowings.

use core::cmp::Ordering;

/// Result of [`ceiling_floor`]: indices into the queried slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeilingFloor {
    /// Index of the smallest element ≥ query, if any.
    pub ceiling: Option<usize>,

    /// Index of the largest element ≤ query, if any.
    pub floor: Option<usize>,
}

/// Locate the ceiling and floor of `query` in a sorted slice.
///
/// ```rust
/// use slicekit::prelude::*;
///
/// let arr = [1, 3, 8, 10, 15];
/// let cf = ceiling_floor(&arr, &7);
/// assert_eq!(cf.ceiling, Some(2)); // 8
/// assert_eq!(cf.floor, Some(1));   // 3
/// ```
pub fn ceiling_floor<T: Ord>(arr: &[T], query: &T) -> CeilingFloor {
    CeilingFloor {
        ceiling: ceiling_index(arr, query),
        floor: floor_index(arr, query),
    }
}

/// Index of the smallest element ≥ `query`, leftmost among equals.
fn ceiling_index<T: Ord>(arr: &[T], query: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();
    let mut best = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(query) {
            Ordering::Less => lo = mid + 1,
            // A candidate; keep narrowing left for a smaller one.
            _ => {
                best = Some(mid);
                hi = mid;
            }
        }
    }
    best
}

/// Index of the largest element ≤ `query`, rightmost among equals.
fn floor_index<T: Ord>(arr: &[T], query: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();
    let mut best = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(query) {
            Ordering::Greater => hi = mid,
            // A candidate; keep narrowing right for a larger one.
            _ => {
                best = Some(mid);
                lo = mid + 1;
            }
        }
    }
    best
}
