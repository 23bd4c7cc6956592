//! Exponential search over a sorted slice.
//!
//! Doubles a probe bound until the element there exceeds the target (or the
//! bound leaves the slice), then binary-searches the window
//! `[bound/2, min(bound, n-1)]`. Useful when the target is expected near the
//! front or when the effective length is not cheaply known: the cost is
//! O(log i) where i is the target's position.

use crate::searching::binary::binary_search;

/// Search a sorted slice for `target` by exponential range finding.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n && arr[bound] < *target {
        bound *= 2;
    }

    // The target, if present, lies in [bound/2, min(bound, n-1)].
    let lo = bound / 2;
    let hi = if bound < n { bound + 1 } else { n };
    binary_search(&arr[lo..hi], target).map(|i| lo + i)
}
