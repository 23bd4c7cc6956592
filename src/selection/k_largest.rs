//! K largest elements via a bounded min-heap.
//!
//! ## Purpose
//!
//! Select the k largest values of a slice without sorting it. A min-heap
//! capped at k entries keeps the current candidates; each remaining element
//! either displaces the smallest candidate or is dropped. O(n log k) time,
//! O(k) space, versus O(n log n) for sort-and-truncate.
//!
//! ## Key concepts
//!
//! The heap's root is the *weakest* of the k candidates, which is exactly
//! the element a better candidate must beat. A max-heap would bury that
//! information at the leaves.
//!
//! ## Edge cases
//!
//! * `k = 0` returns an empty vector.
//! * `k >= n` returns all elements, still sorted descending.
//! * Duplicates count individually: `k_largest(&[5, 5, 1], 2)` is `[5, 5]`.

#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

use core::cmp::Reverse;

/// The `min(k, n)` largest values of `arr`, sorted descending.
pub fn k_largest<T: Ord + Clone>(arr: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(k + 1);
    for v in arr {
        if heap.len() < k {
            heap.push(Reverse(v.clone()));
        } else if let Some(Reverse(weakest)) = heap.peek() {
            if v > weakest {
                heap.pop();
                heap.push(Reverse(v.clone()));
            }
        }
    }

    // Ascending pop order, reversed into descending output.
    let mut out: Vec<T> = Vec::with_capacity(heap.len());
    while let Some(Reverse(v)) = heap.pop() {
        out.push(v);
    }
    out.reverse();
    out
}
