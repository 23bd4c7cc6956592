//! Layer 1: Primitives
//!
//! Core building blocks shared by every algorithm family.
//!
//! This layer has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error type ([`errors::SlicekitError`])
//! - **order**: Comparator helpers and sortedness predicates
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Selection, Puzzles
//!   ↓
//! Layer 2: Sorting, Searching
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error type.
///
/// Provides:
/// - Unified `SlicekitError` enum
/// - `Display` formatting for every variant
pub mod errors;

/// Ordering helpers.
///
/// Provides:
/// - Ready-made ascending/descending comparators
/// - Sortedness predicates
/// - A single-pass min/max scan
pub mod order;
