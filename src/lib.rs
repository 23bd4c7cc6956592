//! # slicekit
//!
//! Classic in-memory algorithms over flat slices: comparison sorts,
//! searches over sorted sequences, and selection/order-statistic queries.
//!
//! ## Modules
//!
//! - `primitives` – comparator helpers and the shared error type
//! - `sorting` – bubble, insertion, selection, merge, quick, heap, simple,
//!   counting, radix (plus optional parallel variants)
//! - `searching` – linear, binary, exponential, interpolation, jump, ternary,
//!   and sorted-vector maintenance
//! - `selection` – k largest, largest three, kth smallest in a sorted matrix,
//!   ceiling/floor lookup
//! - `puzzles` – single-pass array puzzles (repeating/missing number,
//!   zero-sum triplets, and friends)
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: api / prelude
//!   ↓
//! Layer 3: selection, puzzles
//!   ↓
//! Layer 2: sorting, searching
//!   ↓
//! Layer 1: primitives
//! ```
//!
//! ## Contracts
//!
//! * Sorts permute the caller's slice (or build a new `Vec` for merge sort)
//!   into non-decreasing order under the active comparator. Stable variants
//!   additionally preserve the relative order of equal elements.
//! * Searches over sorted input return `Some(index)` of one occurrence of the
//!   target, or `None`. **Sortedness is an unchecked precondition**: feeding
//!   an unsorted slice yields an unspecified result, not an error. Checking
//!   it would cost the complexity the algorithms exist to avoid.
//! * "Not found" is an ordinary `None`, never an error. [`SlicekitError`] is
//!   reserved for structurally invalid input (empty or ragged matrix, rank
//!   out of range).
//!
//! ## Usage Example
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let mut data = vec![5, 3, 3, 1, 4];
//! quick_sort(&mut data);
//! assert_eq!(data, vec![1, 3, 3, 4, 5]);
//! assert_eq!(binary_search(&data, &4), Some(3));
//! assert_eq!(k_largest(&data, 2), vec![5, 4]);
//! ```
//!
//! [`SlicekitError`]: primitives::errors::SlicekitError

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod api;
pub mod primitives;
pub mod puzzles;
pub mod searching;
pub mod selection;
pub mod sorting;

/// Flat re-exports of the most common entry points.
pub mod prelude {
    pub use crate::api::Result;
    pub use crate::primitives::errors::SlicekitError;
    pub use crate::primitives::order::{ascending, descending, is_sorted, is_sorted_by};
    pub use crate::puzzles::binary_count::count_ones;
    pub use crate::puzzles::common::common_elements;
    pub use crate::puzzles::first_repeating::first_repeating;
    pub use crate::puzzles::repeating_missing::{missing_number, repeating_and_missing};
    pub use crate::puzzles::zero_sum::{
        closest_pair_to_zero, pair_with_difference, zero_sum_triplets,
    };
    pub use crate::searching::binary::{binary_search, binary_search_by};
    pub use crate::searching::exponential::exponential_search;
    pub use crate::searching::interpolation::interpolation_search;
    pub use crate::searching::jump::jump_search;
    pub use crate::searching::linear::{
        linear_search, linear_search_bidirectional, linear_search_sentinel,
    };
    pub use crate::searching::sorted_vec::{insert_sorted, remove_sorted};
    pub use crate::searching::ternary::ternary_search;
    pub use crate::selection::bounds::{ceiling_floor, CeilingFloor};
    pub use crate::selection::k_largest::k_largest;
    pub use crate::selection::largest_three::{largest_three, LargestThree};
    pub use crate::selection::matrix::kth_smallest;
    pub use crate::sorting::bubble::{bubble_sort, bubble_sort_by};
    pub use crate::sorting::counting::counting_sort;
    pub use crate::sorting::heap::{heap_sort, heap_sort_by};
    pub use crate::sorting::insertion::{insertion_sort, insertion_sort_by};
    pub use crate::sorting::merge::{merge_sort, merge_sort_by};
    pub use crate::sorting::quick::{
        quick_sort, quick_sort_by, quick_sort_dual_pivot, quick_sort_three_way,
    };
    pub use crate::sorting::radix::radix_sort;
    pub use crate::sorting::selection::{
        selection_sort, selection_sort_by, selection_sort_stable, selection_sort_stable_by,
    };
    pub use crate::sorting::simple::{simple_sort, simple_sort_by};

    #[cfg(feature = "parallel")]
    pub use crate::sorting::parallel::{par_merge_sort, par_quick_sort};
}
