//! Simple exchange sort, the correctness oracle.
//!
//! Double loop, swap whenever a later element compares less than the pivot
//! position. Nothing clever happens here on purpose: the integration tests
//! cross-check every faster sort against this one, so it stays small enough
//! to verify by eye.
//!
//! O(n²) time always, O(1) space. Not stable.

use core::cmp::Ordering;

/// Sort in place under the natural order.
pub fn simple_sort<T: Ord>(arr: &mut [T]) {
    simple_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`.
pub fn simple_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if cmp(&arr[j], &arr[i]) == Ordering::Less {
                arr.swap(i, j);
            }
        }
    }
}
