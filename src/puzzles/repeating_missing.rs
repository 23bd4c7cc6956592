//! Repeating and missing number detection over `1..=n` domains.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Find the repeated and the absent value in a slice that should contain
/// each of `1..=n` exactly once but repeats one value at the expense of
/// another.
///
/// Returns `(repeating, missing)`, or `None` when the input does not match
/// that shape (a value out of `1..=n`, or no repeat at all). Frequency
/// table, O(n) time and space; the arithmetic formulation overflows narrow
/// integers and is not used.
pub fn repeating_and_missing(arr: &[u32]) -> Option<(u32, u32)> {
    let n = arr.len();
    let mut freq: Vec<u8> = vec![0; n];

    for &v in arr {
        if v == 0 || v as usize > n {
            return None;
        }
        let slot = &mut freq[(v - 1) as usize];
        if *slot == 2 {
            // A value seen three times cannot come from a single swap.
            return None;
        }
        *slot += 1;
    }

    let mut repeating = None;
    let mut missing = None;
    for (i, &count) in freq.iter().enumerate() {
        match count {
            0 => missing = Some(i as u32 + 1),
            2 => repeating = Some(i as u32 + 1),
            _ => {}
        }
    }
    match (repeating, missing) {
        (Some(r), Some(m)) => Some((r, m)),
        _ => None,
    }
}

/// The absent value in a slice containing all of `1..=n` except one, where
/// `n = arr.len() + 1`. XOR fold, O(n) time, O(1) space.
pub fn missing_number(arr: &[u64]) -> u64 {
    let n = arr.len() as u64 + 1;
    let full = (1..=n).fold(0, |acc, v| acc ^ v);
    let seen = arr.iter().fold(0, |acc, v| acc ^ v);
    full ^ seen
}
