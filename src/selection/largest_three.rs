//! Largest three elements in a single pass.
//!
//! The k-largest specialization for k = 3, tracked in three running slots
//! instead of a heap: O(n) time, O(1) space. Slots that cannot be filled
//! (`n < 3`) stay `None`, so the caller can tell "no third element" apart
//! from any sentinel value.

/// Result of [`largest_three`]: slots in descending order, unfilled slots
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestThree<T> {
    /// The maximum, `None` only for an empty slice.
    pub first: Option<T>,

    /// Second largest; duplicates occupy their own slots.
    pub second: Option<T>,

    /// Third largest.
    pub third: Option<T>,
}

/// Track the three largest values of `arr` in one pass.
pub fn largest_three<T: Ord + Copy>(arr: &[T]) -> LargestThree<T> {
    let mut first: Option<T> = None;
    let mut second: Option<T> = None;
    let mut third: Option<T> = None;

    for &v in arr {
        if first.map_or(true, |f| v > f) {
            third = second;
            second = first;
            first = Some(v);
        } else if second.map_or(true, |s| v > s) {
            third = second;
            second = Some(v);
        } else if third.map_or(true, |t| v > t) {
            third = Some(v);
        }
    }

    LargestThree { first, second, third }
}
