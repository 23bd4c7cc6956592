//! Linear search: plain, sentinel, and bidirectional scans.
//!
//! The only family members with no sortedness precondition. All three are
//! O(n) time, O(1) space except the sentinel variant's scratch copy.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Left-to-right scan. Returns the first matching index.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}

/// Sentinel scan: the target is appended to a scratch copy so the hot loop
/// needs a single equality test and no bounds check, then the hit index is
/// validated against the real length.
///
/// Same contract as [`linear_search`]; exists for parity with the classic
/// formulation (and for benchmarking the loop shape).
pub fn linear_search_sentinel<T: PartialEq + Clone>(arr: &[T], target: &T) -> Option<usize> {
    let mut buf: Vec<T> = Vec::with_capacity(arr.len() + 1);
    buf.extend_from_slice(arr);
    buf.push(target.clone());

    let mut i = 0;
    while buf[i] != *target {
        i += 1;
    }
    // A hit at the sentinel position means the real slice had no match.
    if i < arr.len() {
        Some(i)
    } else {
        None
    }
}

/// Scan from both ends toward the middle, one comparison per end per step.
///
/// Returns whichever end hits first; when both probes match in the same
/// step, the lower index wins.
pub fn linear_search_bidirectional<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let mut front = 0;
    let mut back = arr.len() - 1;
    while front <= back {
        if arr[front] == *target {
            return Some(front);
        }
        if arr[back] == *target {
            return Some(back);
        }
        if back == 0 {
            break;
        }
        front += 1;
        back -= 1;
    }
    None
}
