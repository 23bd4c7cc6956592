//! Count of leading `true`s in a monotone binary slice.

/// Count the `true`s in a slice where every `true` precedes every `false`
/// (non-increasing binary sequence).
///
/// Binary search for the last `true`: O(log n) instead of the linear tally.
/// The monotone layout is an unchecked precondition.
pub fn count_ones(arr: &[bool]) -> usize {
    let mut lo = 0;
    let mut hi = arr.len();
    // Narrow onto the first `false`; its index equals the count of `true`s.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
