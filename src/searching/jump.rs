//! Jump search over a sorted slice.
//!
//! Advances in blocks of ⌊√n⌋, overshoots the target, then linearly scans
//! the block it landed in. O(√n) comparisons, O(1) space; the classic
//! middle ground between linear and binary search when jumping backward
//! is expensive.

use num_traits::Float;

/// Search a sorted slice for `target` in ⌊√n⌋-sized blocks.
pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    let step = (Float::sqrt(n as f64) as usize).max(1);

    // Find the block whose last element is >= target.
    let mut block_end = step;
    let mut block_start = 0;
    while block_end < n && arr[block_end - 1] < *target {
        block_start = block_end;
        block_end += step;
    }

    // Linear scan inside the block.
    for (i, v) in arr[block_start..block_end.min(n)].iter().enumerate() {
        if v == target {
            return Some(block_start + i);
        }
    }
    None
}
