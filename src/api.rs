//! Stable public surface for slicekit.
//!
//! ## Purpose
//!
//! This module re-exports the public types and entry points of the crate and
//! defines the crate-wide [`Result`] alias. Everything re-exported here is
//! considered stable; module paths underneath may shift between releases.
//!
//! ## Visibility
//!
//! Prefer importing from here (or from [`crate::prelude`]) rather than from
//! the layer modules directly.

use core::result;

pub use crate::primitives::errors::SlicekitError;
pub use crate::primitives::order::{ascending, descending, is_sorted, is_sorted_by, min_max};

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

pub use crate::puzzles::binary_count::count_ones;
pub use crate::puzzles::common::common_elements;
pub use crate::puzzles::first_repeating::first_repeating;
pub use crate::puzzles::repeating_missing::{missing_number, repeating_and_missing};
pub use crate::puzzles::zero_sum::{
    closest_pair_to_zero, pair_with_difference, zero_sum_triplets,
};

#[cfg(feature = "parallel")]
pub use crate::sorting::parallel::{par_merge_sort, par_quick_sort};

/// Result type alias for slicekit operations.
pub type Result<T> = result::Result<T, SlicekitError>;
