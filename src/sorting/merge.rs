//! Merge sort.
//!
//! ## Purpose
//!
//! Top-down merge sort that builds a sorted `Vec` rather than permuting the
//! caller's slice. Halves are sorted independently and merged by repeatedly
//! taking the smaller front element; on ties the left run's element is taken
//! first, which is the whole of the stability argument.
//!
//! ## Design notes
//!
//! * One scratch buffer the size of the input is allocated up front and
//!   reused by every merge level, so auxiliary space is O(n) total rather
//!   than O(n log n) across the recursion.
//! * Recursion depth is ⌈log₂ n⌉, bounded and safe for any input that fits
//!   in memory; this is the one family member that keeps language recursion.
//! * O(n log n) time in every case. Stable.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input.
//! * Equal elements appear in their original relative order.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;

/// Sort by construction under the natural order, returning a new `Vec`.
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    merge_sort_by(arr, T::cmp)
}

/// Sort by construction under `cmp`, returning a new `Vec`.
pub fn merge_sort_by<T, F>(arr: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out: Vec<T> = arr.to_vec();
    if out.len() <= 1 {
        return out;
    }
    let mut scratch: Vec<T> = arr.to_vec();
    sort_range(&mut out, &mut scratch, &mut cmp);
    out
}

fn sort_range<T, F>(arr: &mut [T], scratch: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = arr.split_at_mut(mid);
        let (sl, sr) = scratch.split_at_mut(mid);
        sort_range(left, sl, cmp);
        sort_range(right, sr, cmp);
    }
    merge(arr, mid, scratch, cmp);
}

/// Merge the two sorted runs `arr[..mid]` and `arr[mid..]` through `scratch`.
fn merge<T, F>(arr: &mut [T], mid: usize, scratch: &mut [T], cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch[..arr.len()].clone_from_slice(arr);
    let (left, right) = scratch[..arr.len()].split_at(mid);

    let mut i = 0;
    let mut j = 0;
    for slot in arr.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater, // ties go left
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => unreachable!("merge exhausted both runs early"),
        };
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
