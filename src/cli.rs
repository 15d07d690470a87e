//! Command line arguments and their mapping onto the component configuration.

use anyhow::{Context, Result};
use clap::Parser;
use obo_stdlib::OboReaderConfig;
use std::fs;
use std::path::PathBuf;

/// Read an OBO ontology into nodes and edges tables
#[derive(Parser, Debug)]
#[command(name = "obo-reader", author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the .obo file to read
    #[arg(long, value_name = "PATH")]
    pub obo_file: Option<PathBuf>,

    /// Column detection mode for the nodes table: automatic or manual
    #[arg(long, value_name = "MODE")]
    pub column_detection: Option<String>,

    /// Comma-separated node columns, used in manual mode
    #[arg(long, value_name = "LIST")]
    pub columns: Option<String>,

    /// Keep terms marked obsolete
    #[arg(long)]
    pub keep_obsolete: bool,

    /// YAML file with the component configuration
    #[arg(long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Directory that receives nodes.json and edges.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Build the component configuration: the YAML file first, then flags
    pub fn reader_config(&self) -> Result<OboReaderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => OboReaderConfig::default(),
        };

        if let Some(path) = &self.obo_file {
            config.obo_file = path.clone();
        }
        if let Some(mode) = &self.column_detection {
            config.column_detection = mode.parse()?;
        }
        if let Some(columns) = &self.columns {
            config.columns_str = columns.clone();
        }
        if self.keep_obsolete {
            config.ignore_obsolete = false;
        }

        Ok(config)
    }
}
