//! Layer 2: Sorting
//!
//! Comparison sorts over mutable slices, plus the two classic
//! non-comparison integer sorts.
//!
//! Every comparison sort comes as a pair: `xxx_sort` for `T: Ord` and
//! `xxx_sort_by` taking an explicit comparator. The `_by` form is the real
//! implementation; the plain form delegates with `T::cmp`. All of them:
//!
//! * are total over any slice, including `n = 0`, `n = 1`, and duplicates;
//! * sort in place, except merge sort which builds a new `Vec`;
//! * replace unbounded language recursion with loops or explicit work
//!   stacks, so recursion depth never scales with input length.
//!
//! Stability per algorithm:
//!
//! | algorithm            | stable | notes                                   |
//! |----------------------|--------|-----------------------------------------|
//! | bubble               | yes    | adjacent swaps only                     |
//! | insertion            | yes    | shift-and-insert                        |
//! | selection (plain)    | no     | long-range swap breaks equal runs       |
//! | selection (stable)   | yes    | rotates instead of swapping             |
//! | merge                | yes    | left run wins ties                      |
//! | quick (all pivots)   | no     |                                         |
//! | heap                 | no     |                                         |
//! | simple               | no     | baseline oracle                         |
//! | counting             | n/a    | value rebuild, keys only                |
//! | radix                | yes    | stable digit passes                     |

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod simple;
