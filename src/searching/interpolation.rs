//! Interpolation search over a sorted integer slice.
//!
//! ## Purpose
//!
//! Instead of probing the midpoint, estimate the target's position from its
//! magnitude relative to the live range:
//!
//! ```text
//! pos ≈ lo + (target - arr[lo]) · (hi - lo) / (arr[hi] - arr[lo])
//! ```
//!
//! On uniformly distributed keys this converges in O(log log n) probes;
//! on adversarial distributions it degrades to O(n).
//!
//! ## Design notes
//!
//! * Integer element types only ([`PrimInt`]); the probe is computed in
//!   `f64` and clamped back into `[lo, hi]`, so precision loss can only
//!   misplace the probe, never break correctness: every probe still shrinks
//!   the live range by at least one.
//! * `arr[hi] == arr[lo]` makes the proportional estimate a division by
//!   zero; that case collapses to a direct comparison against `arr[lo]`.
//!
//! ## Invariants
//!
//! * Precondition: sorted ascending (unchecked).
//! * The live range `[lo, hi]` always contains the target if it is present.

use num_traits::PrimInt;

/// Search a sorted integer slice for `target` by proportional probing.
pub fn interpolation_search<T: PrimInt>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let t = *target;
    let mut lo = 0;
    let mut hi = arr.len() - 1;

    while lo <= hi && t >= arr[lo] && t <= arr[hi] {
        if arr[lo] == arr[hi] {
            // Flat range: proportional estimate is undefined.
            return if arr[lo] == t { Some(lo) } else { None };
        }

        let pos = probe(lo, hi, arr[lo], arr[hi], t);
        if arr[pos] == t {
            return Some(pos);
        }
        if arr[pos] < t {
            lo = pos + 1;
        } else {
            if pos == 0 {
                break;
            }
            hi = pos - 1;
        }
    }
    None
}

/// Proportional probe position, computed in `f64` and clamped to `[lo, hi]`.
fn probe<T: PrimInt>(lo: usize, hi: usize, low_val: T, high_val: T, target: T) -> usize {
    let span = (hi - lo) as f64;
    let num = target.to_f64().unwrap_or(0.0) - low_val.to_f64().unwrap_or(0.0);
    let den = high_val.to_f64().unwrap_or(0.0) - low_val.to_f64().unwrap_or(0.0);
    let est = lo as f64 + num * span / den;
    // NaN or out-of-range estimates fall back to the range edges.
    if est.is_finite() {
        (est as usize).clamp(lo, hi)
    } else {
        lo
    }
}
