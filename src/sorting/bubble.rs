//! Bubble sort.
//!
//! Repeated adjacent-swap passes. Each pass floats the largest remaining
//! element to the end of the unsorted prefix; a pass that performs no swap
//! proves the slice sorted and terminates early, which is what makes the
//! best case O(n) rather than an optimization nicety.
//!
//! Stable. O(n²) worst/average time, O(n) best, O(1) space.

use core::cmp::Ordering;

/// Sort in place under the natural order.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    bubble_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`.
pub fn bubble_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for end in (1..n).rev() {
        let mut swapped = false;
        for j in 0..end {
            if cmp(&arr[j], &arr[j + 1]) == Ordering::Greater {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        // Full pass without a swap: already sorted.
        if !swapped {
            break;
        }
    }
}
