//! Testing utilities for the OBO Reader.
//!
//! This crate provides mocks of the component runtime, OBO fixture
//! generators and assertion helpers for the tables a component publishes.

pub mod assertions;
pub mod data_generators;
pub mod mocks;

/// Re-export commonly used types for convenience
pub use mockall;

pub use data_generators::write_obo_fixture;
pub use mocks::{create_mock_component_runtime_api, MockComponentRuntimeApi};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test tracing
/// This function sets up tracing for tests with a consistent format
pub fn init_test_tracing() {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("obo_graph=debug,obo_stdlib=debug")),
        )
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
