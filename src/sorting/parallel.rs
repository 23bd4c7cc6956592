//! Data-parallel sort variants (extension, `parallel` feature).
//!
//! ## Purpose
//!
//! Opt-in multi-threaded counterparts of merge sort and quicksort. Both
//! recurse via `rayon::join` on disjoint halves obtained from
//! `split_at_mut`, so no two tasks ever touch the same backing storage.
//!
//! ## Design notes
//!
//! * These are outside the core single-threaded contract; results and
//!   stability guarantees match the sequential algorithms exactly.
//! * Below [`SEQUENTIAL_CUTOFF`] elements the sequential implementations
//!   take over; task spawn overhead dominates on small ranges.
//!
//! ## Non-goals
//!
//! * No parallel variants of the O(n²) sorts; there is nothing to win.

use core::cmp::Ordering;

use rayon::join;

use crate::sorting::merge::merge_sort_by;

/// Range length below which the sequential algorithms are used.
const SEQUENTIAL_CUTOFF: usize = 2048;

/// Parallel merge sort by construction. Stable, like its sequential twin.
pub fn par_merge_sort<T>(arr: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    if arr.len() <= SEQUENTIAL_CUTOFF {
        return merge_sort_by(arr, T::cmp);
    }

    let mid = arr.len() / 2;
    let (left, right) = join(|| par_merge_sort(&arr[..mid]), || par_merge_sort(&arr[mid..]));

    // Sequential merge of the two sorted halves; ties take the left run.
    let mut out = Vec::with_capacity(arr.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i].cmp(&right[j]) != Ordering::Greater {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Parallel in-place quicksort (Lomuto partition, last-element pivot).
/// Not stable.
pub fn par_quick_sort<T>(arr: &mut [T])
where
    T: Ord + Send,
{
    if arr.len() <= SEQUENTIAL_CUTOFF {
        crate::sorting::quick::quick_sort(arr);
        return;
    }

    let p = partition(arr);
    let (left, rest) = arr.split_at_mut(p);
    let right = &mut rest[1..];
    join(|| par_quick_sort(left), || par_quick_sort(right));
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut store = 0;
    for j in 0..pivot {
        if arr[j] <= arr[pivot] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    store
}
