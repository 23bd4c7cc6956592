//! Layer 3: Selection and order-statistic queries
//!
//! Routines built on top of the sorting and searching primitives:
//!
//! - **k_largest**: the k largest values, descending
//! - **largest_three**: the top three in one pass, O(1) space
//! - **matrix**: kth smallest in a row- and column-sorted matrix
//! - **bounds**: ceiling and floor of a query value in a sorted slice
//!
//! These are the only routines in the crate that can return
//! [`crate::primitives::errors::SlicekitError`], and only for structurally
//! invalid input; sortedness preconditions remain unchecked throughout.

pub mod bounds;
pub mod k_largest;
pub mod largest_three;
pub mod matrix;
