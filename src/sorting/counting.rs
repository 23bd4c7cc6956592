//! Counting sort for integer slices.
//!
//! ## Purpose
//!
//! Non-comparison sort over a bounded value range. One pass finds
//! `[min, max]`, one pass tallies occurrences, and a final sweep rewrites
//! the slice from the tally. Time is O(n + r) and space O(r) where
//! `r = max - min + 1`.
//!
//! ## Design notes
//!
//! * Generic over [`PrimInt`] so it serves every built-in integer width;
//!   values are rebuilt rather than moved, which is why keys-only data is
//!   the intended use.
//! * The value range must fit in `usize` (and in memory). A range that
//!   overflows the conversion leaves the slice unchanged; callers sorting
//!   sparse extreme values want a comparison sort instead.
//!
//! ## Edge cases
//!
//! * Empty and single-element slices return immediately.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::PrimInt;

use crate::primitives::order::min_max;

/// Sort an integer slice in place by counting occurrences.
pub fn counting_sort<T: PrimInt>(arr: &mut [T]) {
    let (min, max) = match min_max(arr) {
        Some(bounds) => bounds,
        None => return,
    };

    // Width of the value range as usize; bail out if it does not fit.
    // checked_sub also catches spans wider than T itself (e.g. the full
    // range of a signed type).
    let range = match max.checked_sub(&min).and_then(|d| d.to_usize()) {
        Some(r) if r < usize::MAX => r + 1,
        _ => return,
    };

    let mut counts: Vec<usize> = vec![0; range];
    for v in arr.iter() {
        // Offsets are in [0, range) by construction of min/max.
        let offset = (*v - min).to_usize().unwrap_or(0);
        counts[offset] += 1;
    }

    // Rebuild by walking the value incrementally; `min + offset` can exceed
    // T's range as an offset literal even though the sum itself fits.
    let n = arr.len();
    let mut value = min;
    let mut write = 0;
    for &count in counts.iter() {
        if count > 0 {
            for slot in arr[write..write + count].iter_mut() {
                *slot = value;
            }
            write += count;
        }
        if write == n {
            break;
        }
        value = value + T::one();
    }
}
