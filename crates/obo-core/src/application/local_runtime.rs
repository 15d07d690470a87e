//! In-process implementation of [`ComponentRuntimeApi`].
//!
//! The runtime holds a fixed configuration map, captures every
//! output slot a component writes, and forwards log lines to `tracing`
//! while keeping a copy for inspection.

use crate::{ComponentRuntimeApi, ComponentRuntimeApiBase, CoreError, DataPacket, LogLevel};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// A metric emitted by a component
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMetric {
    /// Metric name
    pub name: String,
    /// Metric value
    pub value: f64,
    /// Metric labels
    pub labels: HashMap<String, String>,
}

/// Host runtime that drives one component execution in the current process
#[derive(Debug, Default)]
pub struct LocalComponentRuntime {
    config: HashMap<String, serde_json::Value>,
    outputs: Mutex<HashMap<String, DataPacket>>,
    log_messages: Mutex<Vec<(LogLevel, String)>>,
    metrics: Mutex<Vec<RecordedMetric>>,
}

impl LocalComponentRuntime {
    /// Create an empty runtime
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration entry
    pub fn with_config(mut self, name: &str, value: serde_json::Value) -> Self {
        self.config.insert(name.to_string(), value);
        self
    }

    /// Add every entry of a JSON object as configuration
    ///
    /// Non-object values are ignored.
    pub fn with_config_object(mut self, object: serde_json::Value) -> Self {
        if let serde_json::Value::Object(map) = object {
            self.config.extend(map);
        }
        self
    }

    /// Get a written output by name
    pub async fn output(&self, name: &str) -> Option<DataPacket> {
        self.outputs.lock().await.get(name).cloned()
    }

    /// Take all written outputs, leaving the runtime empty
    pub async fn take_outputs(&self) -> HashMap<String, DataPacket> {
        std::mem::take(&mut *self.outputs.lock().await)
    }

    /// Get all logged messages in order
    pub async fn log_messages(&self) -> Vec<(LogLevel, String)> {
        self.log_messages.lock().await.clone()
    }

    /// Get all emitted metrics in order
    pub async fn metrics(&self) -> Vec<RecordedMetric> {
        self.metrics.lock().await.clone()
    }
}

impl ComponentRuntimeApiBase for LocalComponentRuntime {
    fn log(&self, level: tracing::Level, message: &str) {
        match level {
            tracing::Level::ERROR => tracing::error!("{}", message),
            tracing::Level::WARN => tracing::warn!("{}", message),
            tracing::Level::INFO => tracing::info!("{}", message),
            tracing::Level::DEBUG => tracing::debug!("{}", message),
            tracing::Level::TRACE => tracing::trace!("{}", message),
        }
    }
}

#[async_trait]
impl ComponentRuntimeApi for LocalComponentRuntime {
    async fn get_config(&self, name: &str) -> Result<serde_json::Value, CoreError> {
        self.config
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::ConfigurationError(format!("Config not found: {}", name)))
    }

    async fn set_outputs(&self, outputs: Vec<(String, DataPacket)>) -> Result<(), CoreError> {
        // one lock for the whole batch
        self.outputs.lock().await.extend(outputs);
        Ok(())
    }

    async fn log(&self, level: LogLevel, message: &str) -> Result<(), CoreError> {
        ComponentRuntimeApiBase::log(self, level.into(), message);
        self.log_messages
            .lock()
            .await
            .push((level, message.to_string()));
        Ok(())
    }

    async fn emit_metric(
        &self,
        name: &str,
        value: f64,
        labels: HashMap<String, String>,
    ) -> Result<(), CoreError> {
        tracing::debug!(metric = name, value, "Metric emitted");
        self.metrics.lock().await.push(RecordedMetric {
            name: name.to_string(),
            value,
            labels,
        });
        Ok(())
    }
}
