//! Configuration for the OBO Reader component.

use crate::tables::nodes::DEFAULT_MANUAL_COLUMNS;
use crate::tables::ColumnSelectionPolicy;
use obo_core::CoreError;
use obo_graph::ParseOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How node table columns are chosen
///
/// Deserialization goes through [`FromStr`], so config files accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ColumnDetection {
    /// Every attribute found in the file
    #[default]
    Automatic,
    /// The columns listed in `columns_str`
    Manual,
}

impl TryFrom<String> for ColumnDetection {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ColumnDetection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Ok(ColumnDetection::Automatic),
            "manual" => Ok(ColumnDetection::Manual),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown column detection mode '{}', expected Automatic or Manual",
                other
            ))),
        }
    }
}

impl fmt::Display for ColumnDetection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnDetection::Automatic => write!(f, "Automatic"),
            ColumnDetection::Manual => write!(f, "Manual"),
        }
    }
}

/// OBO Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OboReaderConfig {
    /// Path of the `.obo` file to read
    #[serde(default)]
    pub obo_file: PathBuf,

    /// Column detection mode
    #[serde(default)]
    pub column_detection: ColumnDetection,

    /// Comma-separated column list, only used in manual mode
    #[serde(default = "default_columns_str")]
    pub columns_str: String,

    /// Skip terms marked obsolete
    #[serde(default = "default_ignore_obsolete")]
    pub ignore_obsolete: bool,
}

fn default_columns_str() -> String {
    DEFAULT_MANUAL_COLUMNS.to_string()
}

fn default_ignore_obsolete() -> bool {
    true
}

impl Default for OboReaderConfig {
    fn default() -> Self {
        Self {
            obo_file: PathBuf::new(),
            column_detection: ColumnDetection::default(),
            columns_str: default_columns_str(),
            ignore_obsolete: default_ignore_obsolete(),
        }
    }
}

impl OboReaderConfig {
    /// Configuration for `obo_file` with every other setting at its default
    pub fn new(obo_file: impl Into<PathBuf>) -> Self {
        Self {
            obo_file: obo_file.into(),
            ..Self::default()
        }
    }

    /// Deserialize from a JSON object of configuration values
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value)
            .map_err(|e| CoreError::ConfigurationError(format!("Invalid OBO Reader configuration: {}", e)))
    }

    /// The column policy this configuration selects.
    ///
    /// `columns_str` is ignored unless the mode is manual.
    pub fn column_policy(&self) -> ColumnSelectionPolicy {
        match self.column_detection {
            ColumnDetection::Automatic => ColumnSelectionPolicy::Automatic,
            ColumnDetection::Manual => ColumnSelectionPolicy::manual_from_list(&self.columns_str),
        }
    }

    /// Loader options this configuration selects
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            ignore_obsolete: self.ignore_obsolete,
        }
    }
}
