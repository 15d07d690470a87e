//!
//! OBO Core - component runtime contract for the OBO Reader
//!
//! This crate defines the interfaces a component uses to talk to the
//! workflow host that drives it: configuration lookup, output slots,
//! logging and metrics. It also ships an in-process host runtime for
//! running components outside a flow engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Application layer - host-side runtimes
pub mod application;

/// Core types and traits
pub mod types;

/// Error types
pub mod error;

// Re-export key types
pub use application::local_runtime::{LocalComponentRuntime, RecordedMetric};
pub use error::CoreError;
pub use types::DataPacket;
pub use types::LogLevel;

/// Result of component execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Execution completed successfully
    Success,
    /// Execution failed with an error
    Failure(CoreError),
}

impl ExecutionResult {
    /// Convert into a plain `Result`, for callers that want `?`
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            ExecutionResult::Success => Ok(()),
            ExecutionResult::Failure(err) => Err(err),
        }
    }
}

/// Non-async base trait for component executors
/// This trait is object-safe and used as a marker trait
pub trait ComponentExecutorBase: Send + Sync {
    /// Get the component name
    fn component_type(&self) -> &str;
}

/// A component that can be executed by the host
#[async_trait]
pub trait ComponentExecutor: ComponentExecutorBase {
    /// Execute the component
    async fn execute(&self, api: Arc<dyn ComponentRuntimeApi>) -> ExecutionResult;
}

/// Non-async base trait for component runtime
/// This trait is object-safe and used as a marker trait
pub trait ComponentRuntimeApiBase: Send + Sync {
    /// Log information with the specified level
    fn log(&self, level: tracing::Level, message: &str);
}

/// Runtime API provided to components during execution
#[async_trait]
pub trait ComponentRuntimeApi: ComponentRuntimeApiBase {
    /// Get configuration for the component by name
    async fn get_config(&self, name: &str) -> Result<serde_json::Value, CoreError>;

    /// Publish a set of named outputs as one step.
    ///
    /// Either every output in `outputs` becomes visible to the host, in the
    /// given order, or none does and an error is returned.
    async fn set_outputs(&self, outputs: Vec<(String, DataPacket)>) -> Result<(), CoreError>;

    /// Log message with specified log level
    async fn log(&self, level: LogLevel, message: &str) -> Result<(), CoreError>;

    /// Emit a metric with labels
    async fn emit_metric(
        &self,
        name: &str,
        value: f64,
        labels: HashMap<String, String>,
    ) -> Result<(), CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Writes its configured label to `result`; the label is required
    #[derive(Debug)]
    struct Labeler;

    impl ComponentExecutorBase for Labeler {
        fn component_type(&self) -> &str {
            "Labeler"
        }
    }

    #[async_trait]
    impl ComponentExecutor for Labeler {
        async fn execute(&self, api: Arc<dyn ComponentRuntimeApi>) -> ExecutionResult {
            let label = match api.get_config("label").await {
                Ok(value) => value.as_str().unwrap_or("none").to_string(),
                Err(e) => return ExecutionResult::Failure(e),
            };

            let _ = ComponentRuntimeApi::log(&*api, LogLevel::Info, &format!("Labelling {}", label)).await;

            let output = DataPacket::new(json!({ "label": label }));
            if let Err(e) = api.set_outputs(vec![("result".to_string(), output)]).await {
                return ExecutionResult::Failure(e);
            }

            ExecutionResult::Success
        }
    }

    #[tokio::test]
    async fn test_component_runs_against_local_runtime() {
        let runtime = Arc::new(LocalComponentRuntime::new().with_config("label", json!("numbers")));

        let result = Labeler.execute(runtime.clone()).await;
        assert_eq!(result, ExecutionResult::Success);

        let output = runtime.output("result").await.unwrap();
        assert_eq!(output.as_value()["label"], "numbers");

        let logs = runtime.log_messages().await;
        assert!(logs
            .iter()
            .any(|(level, msg)| *level == LogLevel::Info && msg == "Labelling numbers"));
    }

    #[tokio::test]
    async fn test_missing_config_fails() {
        let runtime = Arc::new(LocalComponentRuntime::new());

        let result = Labeler.execute(runtime.clone()).await;
        assert!(matches!(result, ExecutionResult::Failure(CoreError::ConfigurationError(_))));
        assert!(runtime.output("result").await.is_none());
    }

    #[test]
    fn test_execution_result_into_result() {
        assert!(ExecutionResult::Success.into_result().is_ok());

        let err = ExecutionResult::Failure(CoreError::InvalidInput("x".to_string()))
            .into_result()
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidInput("x".to_string()));
    }

    #[test]
    fn test_component_type() {
        assert_eq!(Labeler.component_type(), "Labeler");
    }
}
