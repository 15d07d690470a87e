//! OBO Reader command line
//!
//! Runs the `OboReader` component in-process and writes its two output tables
//! as JSON files.
//!
//! Usage:
//!   obo-reader --obo-file go.obo
//!   obo-reader --obo-file go.obo --column-detection manual --columns name,xref
//!   obo-reader --config reader.yaml --output-dir out/

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use obo_core::{ComponentExecutor, DataPacket, LocalComponentRuntime};
use obo_stdlib::components::obo_reader::{EDGES_OUTPUT, NODES_OUTPUT};
use obo_stdlib::{OboReader, Table};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn write_table(dir: &Path, name: &str, packet: &DataPacket) -> Result<usize> {
    let table: Table = packet
        .to()
        .with_context(|| format!("Output '{}' is not a table", name))?;
    let path = dir.join(format!("{}.json", name));
    let json = serde_json::to_string_pretty(packet.as_value())?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = table.row_count(), "Wrote table");
    Ok(table.row_count())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.reader_config()?;

    let runtime = Arc::new(
        LocalComponentRuntime::new().with_config_object(serde_json::to_value(&config)?),
    );
    OboReader::new()
        .execute(runtime.clone())
        .await
        .into_result()
        .with_context(|| format!("Failed to read {}", config.obo_file.display()))?;

    let mut outputs = runtime.take_outputs().await;
    let nodes = outputs
        .remove(NODES_OUTPUT)
        .context("Component produced no nodes table")?;
    let edges = outputs
        .remove(EDGES_OUTPUT)
        .context("Component produced no edges table")?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create {}", cli.output_dir.display()))?;
    let node_count = write_table(&cli.output_dir, NODES_OUTPUT, &nodes)?;
    let edge_count = write_table(&cli.output_dir, EDGES_OUTPUT, &edges)?;

    println!(
        "Read {} nodes and {} edges from {}",
        node_count,
        edge_count,
        config.obo_file.display()
    );
    Ok(())
}
