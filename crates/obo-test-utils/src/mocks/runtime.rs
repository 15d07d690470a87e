//! Mock implementation of the ComponentRuntimeApi trait.

use async_trait::async_trait;
use mockall::mock;
use obo_core::{ComponentRuntimeApiBase, CoreError, DataPacket, LogLevel};
use serde_json::Value;
use std::collections::HashMap;

// Generate the mock implementation
mock! {
    #[derive(Debug)]
    pub ComponentRuntimeApi {}

    #[async_trait]
    impl obo_core::ComponentRuntimeApi for ComponentRuntimeApi {
        async fn get_config(&self, name: &str) -> Result<Value, CoreError>;
        async fn set_outputs(&self, outputs: Vec<(String, DataPacket)>) -> Result<(), CoreError>;
        async fn log(&self, level: LogLevel, message: &str) -> Result<(), CoreError>;
        async fn emit_metric(&self, name: &str, value: f64, labels: HashMap<String, String>) -> Result<(), CoreError>;
    }
}

impl ComponentRuntimeApiBase for MockComponentRuntimeApi {
    fn log(&self, _level: tracing::Level, _message: &str) {
        // No-op for testing
    }
}

/// Creates a mock runtime that answers `get_config` from a JSON object.
///
/// Keys absent from `config` yield a `ConfigurationError`, like a host that
/// was given no value. Logging and metrics succeed silently; `set_outputs`
/// has no default so each test states what it expects to be written.
pub fn create_mock_component_runtime_api(config: Value) -> MockComponentRuntimeApi {
    let mut mock = MockComponentRuntimeApi::new();

    mock.expect_get_config().returning(move |name| {
        config
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::ConfigurationError(format!("Config not found: {}", name)))
    });

    mock.expect_log().returning(|_, _| Ok(()));

    mock.expect_emit_metric().returning(|_, _, _| Ok(()));

    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use obo_core::ComponentRuntimeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_runtime_default_behavior() {
        let mock = create_mock_component_runtime_api(json!({"obo_file": "go.obo"}));

        assert_eq!(mock.get_config("obo_file").await.unwrap(), json!("go.obo"));
        assert!(matches!(
            mock.get_config("columns_str").await,
            Err(CoreError::ConfigurationError(_))
        ));
        assert!(ComponentRuntimeApi::log(&mock, LogLevel::Info, "hello").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_runtime_custom_behavior() {
        let mut mock = create_mock_component_runtime_api(json!({}));

        mock.expect_set_outputs()
            .withf(|outputs| outputs.len() == 1 && outputs[0].0 == "nodes")
            .times(1)
            .returning(|_| Ok(()));

        assert!(mock
            .set_outputs(vec![("nodes".to_string(), DataPacket::null())])
            .await
            .is_ok());
    }
}
