//! Layer 3: Array puzzles
//!
//! Single-purpose scans specified by their input/output contract. Nothing
//! here carries a nontrivial invariant beyond one pass with a frequency or
//! seen-set structure (or a binary search where the input's monotonicity
//! hands one over for free).
//!
//! - **repeating_missing**: the duplicated and absent value in a `1..=n`
//!   permutation-with-one-error, plus the plain missing-number fold
//! - **first_repeating**: index of the first element that occurs again
//! - **zero_sum**: zero-sum triplet counting and pair scans
//! - **binary_count**: number of leading `true`s in a monotone binary slice
//! - **common**: intersection walk of three sorted slices

pub mod binary_count;
pub mod common;
pub mod first_repeating;
pub mod repeating_missing;
pub mod zero_sum;
