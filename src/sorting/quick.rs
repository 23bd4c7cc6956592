//! Quicksort: Lomuto, three-way, and dual-pivot partitioning.
//!
//! ## Purpose
//!
//! In-place partition-exchange sorting. Three partition schemes are provided
//! because they trade differently on duplicate-heavy input:
//!
//! * **Lomuto** (`quick_sort`): last element as pivot, everything ≤ pivot
//!   ahead of it, everything greater behind. The reference scheme.
//! * **Three-way** (`quick_sort_three_way`): Dutch-national-flag partition
//!   into `< pivot`, `== pivot`, `> pivot`; the equal block is never
//!   recursed into, so runs of duplicates cost O(n) total.
//! * **Dual-pivot** (`quick_sort_dual_pivot`): two pivots, three partitions
//!   per pass.
//!
//! ## Design notes
//!
//! * None of the variants is stable.
//! * Subranges are driven by an explicit work stack, not language recursion,
//!   so call depth stays O(1) even on the adversarial inputs below.
//! * With a fixed last-element pivot, already-sorted (or reverse-sorted)
//!   input degenerates every split and costs O(n²) comparisons. No
//!   randomization is applied. The work stack also grows to O(n) range
//!   entries in that case; average case is O(log n) entries and
//!   O(n log n) time.
//!
//! ## Invariants
//!
//! * Each partition pass leaves the pivot(s) at their final sorted position.
//! * Ranges pushed on the work stack are disjoint and strictly shrinking.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;

// ============================================================================
// Lomuto
// ============================================================================

/// Sort in place under the natural order. Not stable.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, T::cmp);
}

/// Sort in place under `cmp`. Not stable.
pub fn quick_sort_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Half-open (lo, hi) ranges still needing work.
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((0, arr.len()));

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo <= 1 {
            continue;
        }
        let p = partition_lomuto(arr, lo, hi, &mut cmp);
        stack.push((lo, p));
        stack.push((p + 1, hi));
    }
}

/// Partition `arr[lo..hi]` around the last element; returns the pivot's
/// final index.
fn partition_lomuto<T, F>(arr: &mut [T], lo: usize, hi: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = hi - 1;
    let mut store = lo;
    for j in lo..pivot {
        if cmp(&arr[j], &arr[pivot]) != Ordering::Greater {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    store
}

// ============================================================================
// Three-Way (Dutch National Flag)
// ============================================================================

/// Sort in place under the natural order, grouping duplicates of the pivot
/// in a single pass. Not stable.
pub fn quick_sort_three_way<T: Ord>(arr: &mut [T]) {
    quick_sort_three_way_by(arr, T::cmp);
}

/// Three-way quicksort under `cmp`. Not stable.
pub fn quick_sort_three_way_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((0, arr.len()));

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo <= 1 {
            continue;
        }
        let (lt, gt) = partition_three_way(arr, lo, hi, &mut cmp);
        stack.push((lo, lt));
        stack.push((gt, hi));
    }
}

/// Partition `arr[lo..hi]` around the last element into `< == >` blocks.
///
/// Returns `(lt, gt)` such that `arr[lo..lt] < pivot`,
/// `arr[lt..gt] == pivot`, and `arr[gt..hi] > pivot`.
fn partition_three_way<T, F>(arr: &mut [T], lo: usize, hi: usize, cmp: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = hi - 1;
    let mut lt = lo;
    let mut gt = pivot;
    let mut i = lo;
    while i < gt {
        match cmp(&arr[i], &arr[pivot]) {
            Ordering::Less => {
                arr.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    // Fold the pivot itself into the equal block.
    arr.swap(gt, pivot);
    (lt, gt + 1)
}

// ============================================================================
// Dual-Pivot
// ============================================================================

/// Dual-pivot quicksort under the natural order. Not stable.
pub fn quick_sort_dual_pivot<T: Ord>(arr: &mut [T]) {
    quick_sort_dual_pivot_by(arr, T::cmp);
}

/// Dual-pivot quicksort under `cmp`. Not stable.
pub fn quick_sort_dual_pivot_by<T, F>(arr: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((0, arr.len()));

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo <= 1 {
            continue;
        }
        let (p, q) = partition_dual(arr, lo, hi, &mut cmp);
        stack.push((lo, p));
        // Skip the middle range when both pivots compare equal; everything
        // between them already equals the pivot value.
        if cmp(&arr[p], &arr[q]) == Ordering::Less {
            stack.push((p + 1, q));
        }
        stack.push((q + 1, hi));
    }
}

/// Partition `arr[lo..hi]` around the first and last elements (swapped into
/// ascending order first). Returns the final indices `(p, q)` of the two
/// pivots, `p <= q`.
fn partition_dual<T, F>(arr: &mut [T], lo: usize, hi: usize, cmp: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = hi - 1;
    if cmp(&arr[lo], &arr[last]) == Ordering::Greater {
        arr.swap(lo, last);
    }

    // [lo+1..lt)  < p
    // [lt..i)     p ..= q
    // (gt..last)  > q
    let mut lt = lo + 1;
    let mut gt = last.saturating_sub(1).max(lo);
    let mut i = lo + 1;
    while i <= gt {
        if cmp(&arr[i], &arr[lo]) == Ordering::Less {
            arr.swap(i, lt);
            lt += 1;
            i += 1;
        } else if cmp(&arr[i], &arr[last]) == Ordering::Greater {
            while i < gt && cmp(&arr[gt], &arr[last]) == Ordering::Greater {
                gt -= 1;
            }
            arr.swap(i, gt);
            if gt == lo {
                break;
            }
            gt -= 1;
            // The swapped-in element has not been examined yet.
        } else {
            i += 1;
        }
    }

    arr.swap(lo, lt - 1);
    arr.swap(last, gt + 1);
    (lt - 1, gt + 1)
}
