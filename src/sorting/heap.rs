//! Heap sort.
//!
//! Builds a max-heap over the slice by sifting every internal node down,
//! bottom-up, then repeatedly swaps the root with the last unsorted element
//! and restores the heap over the shrunken prefix.
//!
//! `sift_down` is a loop rather than a recursive call; heap depth is
//! ⌊log₂ n⌋ but the loop keeps the call stack flat regardless.
//!
//! O(n log n) time in every case, O(1) space. Not stable.

use core::cmp::Ordering;

/// Sort in place under the natural order. Not stable.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    heap_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`. Not stable.
pub fn heap_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();

    // Heapify: every leaf is already a heap, so start at the last parent.
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, &mut cmp);
    }

    // Extract: move the max to the end, re-heap the rest.
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0, &mut cmp);
    }
}

/// Restore the max-heap property for the subtree rooted at `root`, within
/// the heap prefix `arr[..n]`.
fn sift_down<T, F>(arr: &mut [T], n: usize, mut root: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < n && cmp(&arr[left], &arr[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < n && cmp(&arr[right], &arr[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}
