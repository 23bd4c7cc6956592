//! First repeating element.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::BTreeSet;

/// Index of the first element that occurs again later in the slice.
///
/// Scans right to left with a seen-set: whenever the current element was
/// already seen to its right, it becomes the best-so-far answer. One pass,
/// O(n log n) with the ordered set.
///
/// `first_repeating(&[10, 5, 3, 4, 3, 5, 6])` is `Some(1)` (the 5 at
/// index 1 recurs before the 3 at index 2 does).
pub fn first_repeating<T: Ord>(arr: &[T]) -> Option<usize> {
    let mut seen: BTreeSet<&T> = BTreeSet::new();
    let mut earliest = None;
    for (i, v) in arr.iter().enumerate().rev() {
        if !seen.insert(v) {
            earliest = Some(i);
        }
    }
    earliest
}
