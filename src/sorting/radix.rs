//! LSD radix sort for unsigned integer slices.
//!
//! ## Purpose
//!
//! Non-comparison sort processing one byte of the key per pass, least
//! significant first. Each pass is a stable counting distribution, which is
//! what lets later passes preserve the order established by earlier ones.
//! Passes stop as soon as no element has a nonzero remaining prefix.
//!
//! ## Design notes
//!
//! * Restricted to `PrimInt + Unsigned`; signed keys would interleave the
//!   negative range after the positive one byte-wise.
//! * O(n · b) time and O(n) space, b = key width in bytes actually used.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::{PrimInt, Unsigned};

const RADIX: usize = 256;

/// Sort an unsigned integer slice in place, one byte per pass.
pub fn radix_sort<T: PrimInt + Unsigned>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }

    let max = arr.iter().copied().fold(T::zero(), |a, b| if b > a { b } else { a });

    let mut scratch: Vec<T> = vec![T::zero(); arr.len()];
    let bits = T::zero().count_zeros() as usize;
    let mut shift = 0usize;
    // The width guard keeps the final `>>` in range for narrow key types.
    while shift < bits && (max >> shift) > T::zero() {
        let mut counts = [0usize; RADIX];
        for v in arr.iter() {
            counts[digit(*v, shift)] += 1;
        }

        // Prefix sums turn counts into write positions.
        let mut total = 0;
        for c in counts.iter_mut() {
            let here = *c;
            *c = total;
            total += here;
        }

        // Stable distribution pass.
        for v in arr.iter() {
            let d = digit(*v, shift);
            scratch[counts[d]] = *v;
            counts[d] += 1;
        }

        arr.copy_from_slice(&scratch);
        shift += 8;
    }
}

#[inline]
fn digit<T: PrimInt>(v: T, shift: usize) -> usize {
    ((v >> shift) & T::from(0xFF).unwrap_or_else(T::zero))
        .to_usize()
        .unwrap_or(0)
}
