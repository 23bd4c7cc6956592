//! Insert and delete maintenance of a sorted vector.
//!
//! ## Purpose
//!
//! Keep a `Vec` sorted across single-element mutations: the insertion point
//! is found by binary narrowing (O(log n)), then `Vec` shifts the tail
//! (O(n) moves). Deletion binary-searches the target and removes it.
//!
//! ## Design notes
//!
//! * `insert_sorted` places new duplicates after existing equal elements,
//!   so repeated insertion is stable with respect to insertion order.
//! * Precondition: the vector is already sorted ascending (unchecked).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;

use crate::searching::binary::binary_search;

/// Insert `value` at its sorted position; returns the index it landed at.
pub fn insert_sorted<T: Ord>(vec: &mut Vec<T>, value: T) -> usize {
    let pos = upper_bound(vec, &value);
    vec.insert(pos, value);
    pos
}

/// Remove one occurrence of `target`; returns it, or `None` if absent.
pub fn remove_sorted<T: Ord>(vec: &mut Vec<T>, target: &T) -> Option<T> {
    let idx = binary_search(vec, target)?;
    Some(vec.remove(idx))
}

/// First index whose element compares greater than `value`.
fn upper_bound<T: Ord>(arr: &[T], value: &T) -> usize {
    let mut lo = 0;
    let mut hi = arr.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid].cmp(value) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
