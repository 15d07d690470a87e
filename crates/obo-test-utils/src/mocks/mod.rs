//! Mock implementations of the component runtime interfaces.

pub mod runtime;

pub use runtime::*;
