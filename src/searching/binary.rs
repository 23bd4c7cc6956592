//! Binary search over a sorted slice.
//!
//! ## Purpose
//!
//! Classic half-interval narrowing over a half-open range `[lo, hi)`. The
//! midpoint is computed as `lo + (hi - lo) / 2`, which cannot overflow where
//! `(lo + hi) / 2` can.
//!
//! ## Invariants
//!
//! * Precondition: input sorted ascending under the active comparator
//!   (unchecked; see the module docs of [`crate::searching`]).
//! * O(log n) comparisons, O(1) space.
//!
//! ## Edge cases
//!
//! * Empty slice returns `None` without touching memory.
//! * With duplicate targets the returned index is whichever occurrence the
//!   narrowing lands on first, not necessarily the lowest.

use core::cmp::Ordering;

/// Search a sorted slice for `target` under the natural order.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    binary_search_by(arr, |probe| probe.cmp(target))
}

/// Search a sorted slice, driving the narrowing with `probe_cmp(element)`
/// (`Less` means the element sorts before the target).
pub fn binary_search_by<T, F>(arr: &[T], mut probe_cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = arr.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match probe_cmp(&arr[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
