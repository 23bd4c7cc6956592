//! Zero-sum and difference pair/triplet scans.
//!
//! Contract-level routines: sort a working copy where needed, then converge
//! two pointers, nothing deeper.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::sorting::quick::quick_sort;

/// Count distinct value triplets `{a, b, c}` with `a + b + c == 0`.
///
/// Triplets are counted by value, not by index, so `[-1, 0, 1, 2, -1, -4]`
/// has exactly two: `{-1, 0, 1}` and `{-1, -1, 2}`. Sorts a working copy,
/// then converges two pointers per anchor element, skipping duplicate runs
/// on all three positions. O(n²) time, O(n) space.
pub fn zero_sum_triplets(arr: &[i64]) -> usize {
    let n = arr.len();
    if n < 3 {
        return 0;
    }

    let mut sorted: Vec<i64> = arr.to_vec();
    quick_sort(&mut sorted);

    let mut count = 0;
    for i in 0..n - 2 {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue; // same anchor value already counted
        }
        let mut lo = i + 1;
        let mut hi = n - 1;
        while lo < hi {
            // i128: three extreme i64 values exceed an i64 sum.
            let sum = sorted[i] as i128 + sorted[lo] as i128 + sorted[hi] as i128;
            if sum == 0 {
                count += 1;
                let (left, right) = (sorted[lo], sorted[hi]);
                while lo < hi && sorted[lo] == left {
                    lo += 1;
                }
                while lo < hi && sorted[hi] == right {
                    hi -= 1;
                }
            } else if sum < 0 {
                lo += 1;
            } else {
                hi -= 1;
            }
        }
    }
    count
}

/// Find indices `(i, j)`, `i < j`, with `arr[j] - arr[i] == diff` in a
/// sorted slice. Two-pointer walk, O(n).
///
/// `diff` is taken as non-negative magnitude; a negative input is
/// normalized. Returns `None` when no such pair exists (note `diff == 0`
/// requires a duplicate).
pub fn pair_with_difference(sorted: &[i64], diff: i64) -> Option<(usize, usize)> {
    // i128 keeps both the |i64::MIN| magnitude and extreme-span element
    // differences representable.
    let diff = (diff as i128).abs();
    let n = sorted.len();
    let mut i = 0;
    let mut j = 1;
    while j < n {
        if i == j {
            j += 1;
            continue;
        }
        let d = sorted[j] as i128 - sorted[i] as i128;
        if d == diff {
            return Some((i, j));
        }
        if d < diff {
            j += 1;
        } else {
            i += 1;
        }
    }
    None
}

/// The two values (from a copy of `arr`, sorted) whose sum is closest to
/// zero, in ascending order. `None` when fewer than two elements.
///
/// Sort then converge two pointers: a positive sum can only shrink by
/// moving the right pointer, a negative one by moving the left.
/// O(n log n) time, O(n) space for the working copy.
pub fn closest_pair_to_zero(arr: &[i64]) -> Option<(i64, i64)> {
    if arr.len() < 2 {
        return None;
    }

    let mut sorted: Vec<i64> = arr.to_vec();
    quick_sort(&mut sorted);

    let mut left = 0;
    let mut right = sorted.len() - 1;
    let mut best = (sorted[left], sorted[right]);
    let mut best_abs = (sorted[left] as i128 + sorted[right] as i128).unsigned_abs();

    while left < right {
        // i128: the sum of two extreme i64 values exceeds i64.
        let sum = sorted[left] as i128 + sorted[right] as i128;
        if sum.unsigned_abs() < best_abs {
            best_abs = sum.unsigned_abs();
            best = (sorted[left], sorted[right]);
        }
        if sum > 0 {
            right -= 1;
        } else if sum < 0 {
            left += 1;
        } else {
            break; // exact zero cannot be beaten
        }
    }
    Some(best)
}
