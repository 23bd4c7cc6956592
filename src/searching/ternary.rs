//! Ternary search over a sorted slice.
//!
//! Probes two midpoints per iteration, splitting the live range into three
//! parts and keeping whichever third can still contain the target. Used
//! here purely as a membership search; despite the name it is not limited
//! to unimodal optimization.
//!
//! Fewer iterations than binary search but more comparisons per iteration;
//! still O(log n). Iterative narrowing over a half-open range, no
//! recursion.

use core::cmp::Ordering;

/// Search a sorted slice for `target` with two probes per step.
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let third = (hi - lo) / 3;
        let m1 = lo + third;
        let m2 = hi - 1 - third;

        match target.cmp(&arr[m1]) {
            Ordering::Equal => return Some(m1),
            Ordering::Less => {
                hi = m1;
                continue;
            }
            Ordering::Greater => {}
        }
        match target.cmp(&arr[m2]) {
            Ordering::Equal => return Some(m2),
            Ordering::Greater => lo = m2 + 1,
            Ordering::Less => {
                // Middle third: (m1, m2) exclusive on both sides.
                lo = m1 + 1;
                hi = m2;
            }
        }
    }
    None
}
