//! Ordering helpers shared by the sorting and searching families.
//!
//! ## Purpose
//!
//! Every comparison algorithm in this crate is written against a caller
//! supplied comparator (`FnMut(&T, &T) -> Ordering`), with an `Ord`-based
//! convenience wrapper on top. This module supplies the ready-made
//! comparators and the small predicates the rest of the crate leans on.
//!
//! ## Design notes
//!
//! * `ascending` is the identity comparator (`T::cmp`); `descending` flips
//!   it. Passing either to any `*_sort_by` function changes the direction of
//!   the whole algorithm without touching its body.
//! * `is_sorted_by` exists for tests and debug assertions, not for runtime
//!   precondition checks inside the search family.
//!
//! ## Invariants
//!
//! * Comparators must describe a total order. Sorting under a comparator that
//!   violates transitivity gives an unspecified permutation (it still
//!   terminates and never reads out of bounds).

use core::cmp::Ordering;

// ============================================================================
// Comparators
// ============================================================================

/// Natural ascending order; the default comparator of every sort.
#[inline]
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Reversed natural order.
///
/// ```rust
/// use slicekit::prelude::*;
///
/// let mut v = vec![2, 9, 4];
/// insertion_sort_by(&mut v, descending);
/// assert_eq!(v, vec![9, 4, 2]);
/// ```
#[inline]
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

// ============================================================================
// Predicates
// ============================================================================

/// Returns `true` if the slice is non-decreasing under `cmp`.
pub fn is_sorted_by<T, F>(arr: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    arr.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Returns `true` if the slice is non-decreasing under the natural order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    is_sorted_by(arr, T::cmp)
}

// ============================================================================
// Scans
// ============================================================================

/// Single-pass minimum and maximum of a slice.
///
/// Returns `None` for an empty slice. For a single element both slots hold
/// that element.
pub fn min_max<T: Copy + PartialOrd>(arr: &[T]) -> Option<(T, T)> {
    let mut iter = arr.iter().copied();
    let first = iter.next()?;
    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}
