//! Selection sort, plain and stable.
//!
//! ## Purpose
//!
//! Both variants repeatedly select the minimum of the unsorted suffix and
//! place it at the sorted boundary. They differ only in how the minimum
//! travels to the boundary, and that difference is exactly what decides
//! stability:
//!
//! * **Plain**: swaps the minimum with the boundary element. The displaced
//!   boundary element jumps over everything between, so equal elements can
//!   change relative order. Not stable.
//! * **Stable**: rotates the window `[boundary..=min]` one step right, which
//!   shifts the in-between elements instead of leapfrogging them. Stable, at
//!   the cost of O(n) moves per placement.
//!
//! ## Design notes
//!
//! * Both are O(n²) comparisons regardless of input; the plain variant does
//!   at most n−1 swaps, which is its classic selling point.
//! * The string specialization of this sort is just the generic body
//!   instantiated at `&str`; lexicographic order is `str`'s `Ord`.
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let mut words = vec!["pear", "apple", "fig"];
//! selection_sort(&mut words);
//! assert_eq!(words, vec!["apple", "fig", "pear"]);
//! ```

use core::cmp::Ordering;

// ============================================================================
// Plain Variant
// ============================================================================

/// Sort in place under the natural order. Not stable.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    selection_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`. Not stable.
pub fn selection_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            if cmp(&arr[j], &arr[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

// ============================================================================
// Stable Variant
// ============================================================================

/// Sort in place under the natural order, preserving the relative order of
/// equal elements.
pub fn selection_sort_stable<T: Ord>(arr: &mut [T]) {
    selection_sort_stable_by(arr, T::cmp);
}

/// Sort in place under `cmp`, preserving the relative order of equal
/// elements.
pub fn selection_sort_stable_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            // Strict less: the earliest of equal minima wins.
            if cmp(&arr[j], &arr[min]) == Ordering::Less {
                min = j;
            }
        }
        // Rotate instead of swap so the elements in between keep their order.
        arr[i..=min].rotate_right(1);
    }
}
