//! Common elements of three sorted slices.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Values present in all three ascending-sorted slices, in ascending order,
/// each shared value reported once.
///
/// Three-pointer walk advancing whichever slice lags; O(la + lb + lc) time.
/// Sortedness is an unchecked precondition.
pub fn common_elements<T: Ord + Clone>(a: &[T], b: &[T], c: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < a.len() && j < b.len() && k < c.len() {
        if a[i] == b[j] && b[j] == c[k] {
            // Skip duplicate runs so each shared value appears once.
            if out.last() != Some(&a[i]) {
                out.push(a[i].clone());
            }
            i += 1;
            j += 1;
            k += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else if b[j] < c[k] {
            j += 1;
        } else {
            k += 1;
        }
    }
    out
}
