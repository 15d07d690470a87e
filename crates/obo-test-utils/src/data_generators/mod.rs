//! Test data generators for the OBO Reader.
//!
//! This module provides sample ontology documents and helpers that write them
//! to temporary files with the extension the loader expects.

mod obo;

// Re-export all data generators for easy access
pub use obo::*;
