//! Layer 2: Searching
//!
//! Lookup algorithms over slices. Everything except the linear variants
//! requires the input to be sorted ascending under the element's order;
//! that precondition is **not** checked at runtime. Feeding an unsorted
//! slice yields an unspecified index or `None`, never a panic or an
//! out-of-bounds read.
//!
//! All searches return `Option<usize>`: `Some(i)` with `arr[i] == target`
//! for one occurrence of the target (which occurrence is unspecified when
//! duplicates exist), or `None`.

pub mod binary;
pub mod exponential;
pub mod interpolation;
pub mod jump;
pub mod linear;
pub mod sorted_vec;
pub mod ternary;
