//! Assertion utilities for validating published tables.
//!
//! Tables travel between component and host as serialized data packets; these
//! helpers inspect that serialized form directly.

mod table;

// Re-export all assertion helpers for easy access
pub use table::*;
