//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time, sliding each new element
//! left through the prefix via adjacent swaps until it meets an element
//! that is not greater. Equal elements are never passed, so the sort is
//! stable by construction.
//!
//! O(n²) worst/average time, O(n) on nearly-sorted input, O(1) space.

use core::cmp::Ordering;

/// Sort in place under the natural order.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`.
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        // Strictly-greater test keeps equal elements in original order.
        while j > 0 && cmp(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
