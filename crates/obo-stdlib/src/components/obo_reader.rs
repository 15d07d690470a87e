use crate::config::{ColumnDetection, OboReaderConfig};
use crate::error::to_core_error;
use crate::tables::{build_output_tables, OutputTables};
use async_trait::async_trait;
use obo_core::types::DataPacket;
use obo_core::{
    ComponentExecutor, ComponentExecutorBase, ComponentRuntimeApi, CoreError, ExecutionResult,
    LogLevel,
};
use obo_graph::read_obo;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Output slot holding the nodes table
pub const NODES_OUTPUT: &str = "nodes";
/// Output slot holding the edges table
pub const EDGES_OUTPUT: &str = "edges";

/// OBO Reader component
///
/// Reads an ontology in OBO format and publishes it as a nodes table and an
/// edges table. Both tables are built and serialized first, then handed to
/// the host in a single `set_outputs` call, so a failed run leaves the host
/// without partial outputs.
#[derive(Debug, Default)]
pub struct OboReader {}

impl OboReader {
    /// Create a new OBO Reader component
    pub fn new() -> Self {
        Self {}
    }

    /// Load the configured file and build both tables
    pub fn run(&self, config: &OboReaderConfig) -> Result<OutputTables, CoreError> {
        let graph = read_obo(&config.obo_file, &config.parse_options()).map_err(to_core_error)?;
        info!(
            path = %config.obo_file.display(),
            ontology = graph.name().unwrap_or("unnamed"),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Loaded OBO graph"
        );

        Ok(build_output_tables(&graph, &config.column_policy()))
    }
}

/// A config value, or `None` when the host has no entry for `name`.
///
/// Any other host error is passed on.
async fn optional_config(
    api: &dyn ComponentRuntimeApi,
    name: &str,
) -> Result<Option<serde_json::Value>, CoreError> {
    match api.get_config(name).await {
        Ok(value) => Ok(Some(value)),
        Err(CoreError::ConfigurationError(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Collect the component configuration one key at a time, falling back to the
/// default for every key the host does not supply
async fn read_config(api: &dyn ComponentRuntimeApi) -> Result<OboReaderConfig, CoreError> {
    let mut config = OboReaderConfig::default();

    if let Some(value) = optional_config(api, "obo_file").await? {
        let path = value.as_str().ok_or_else(|| {
            CoreError::ConfigurationError("obo_file must be a string".to_string())
        })?;
        config.obo_file = PathBuf::from(path);
    }

    if let Some(value) = optional_config(api, "column_detection").await? {
        let mode = value.as_str().ok_or_else(|| {
            CoreError::ConfigurationError("column_detection must be a string".to_string())
        })?;
        config.column_detection = mode.parse()?;
    }

    if let Some(value) = optional_config(api, "columns_str").await? {
        let columns = value.as_str().ok_or_else(|| {
            CoreError::ConfigurationError("columns_str must be a string".to_string())
        })?;
        config.columns_str = columns.to_string();
        if config.column_detection == ColumnDetection::Automatic {
            let _ = ComponentRuntimeApi::log(
                api,
                LogLevel::Debug,
                "columns_str is ignored in Automatic column detection",
            )
            .await;
        }
    }

    if let Some(value) = optional_config(api, "ignore_obsolete").await? {
        config.ignore_obsolete = value.as_bool().ok_or_else(|| {
            CoreError::ConfigurationError("ignore_obsolete must be a boolean".to_string())
        })?;
    }

    Ok(config)
}

async fn fail(api: &dyn ComponentRuntimeApi, err: CoreError) -> ExecutionResult {
    let _ = ComponentRuntimeApi::log(api, LogLevel::Error, &format!("OBO Reader failed: {}", err)).await;
    ExecutionResult::Failure(err)
}

impl ComponentExecutorBase for OboReader {
    fn component_type(&self) -> &str {
        "OboReader"
    }
}

#[async_trait]
impl ComponentExecutor for OboReader {
    async fn execute(&self, api: Arc<dyn ComponentRuntimeApi>) -> ExecutionResult {
        let config = match read_config(&*api).await {
            Ok(config) => config,
            Err(e) => return fail(&*api, e).await,
        };

        let _ = ComponentRuntimeApi::log(
            &*api,
            LogLevel::Info,
            &format!(
                "Reading {} ({} column detection)",
                config.obo_file.display(),
                config.column_detection
            ),
        )
        .await;

        let tables = match self.run(&config) {
            Ok(tables) => tables,
            Err(e) => return fail(&*api, e).await,
        };

        // Serialize both before touching the output slots
        let nodes = match DataPacket::from(&tables.nodes) {
            Ok(packet) => packet,
            Err(e) => return fail(&*api, e.into()).await,
        };
        let edges = match DataPacket::from(&tables.edges) {
            Ok(packet) => packet,
            Err(e) => return fail(&*api, e.into()).await,
        };

        let outputs = vec![
            (NODES_OUTPUT.to_string(), nodes),
            (EDGES_OUTPUT.to_string(), edges),
        ];
        if let Err(e) = api.set_outputs(outputs).await {
            return fail(&*api, e).await;
        }

        let mut labels = HashMap::new();
        labels.insert("component".to_string(), "OboReader".to_string());
        labels.insert("column_detection".to_string(), config.column_detection.to_string());
        let _ = api
            .emit_metric("obo_reader_nodes", tables.nodes.row_count() as f64, labels.clone())
            .await;
        let _ = api
            .emit_metric("obo_reader_edges", tables.edges.row_count() as f64, labels)
            .await;

        let _ = ComponentRuntimeApi::log(
            &*api,
            LogLevel::Info,
            &format!(
                "Read {} nodes and {} edges",
                tables.nodes.row_count(),
                tables.edges.row_count()
            ),
        )
        .await;

        ExecutionResult::Success
    }
}
