//! Assertion utilities for serialized tables.

use obo_core::DataPacket;
use serde_json::Value;
use thiserror::Error;

/// Error type for table validation failures
#[derive(Debug, Error)]
pub enum TableValidationError {
    #[error("Packet is not a serialized table")]
    NotATable,

    #[error("Column mismatch: expected {expected:?}, got {actual:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
}

fn columns(packet: &DataPacket) -> Result<&Vec<Value>, TableValidationError> {
    packet
        .as_value()
        .get("columns")
        .and_then(Value::as_array)
        .ok_or(TableValidationError::NotATable)
}

/// Column names of a serialized table, in order
pub fn column_names(packet: &DataPacket) -> Result<Vec<String>, TableValidationError> {
    columns(packet)?
        .iter()
        .map(|column| {
            column
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(TableValidationError::NotATable)
        })
        .collect()
}

/// Cells of one column of a serialized table
pub fn column_values(
    packet: &DataPacket,
    name: &str,
) -> Result<Vec<Option<String>>, TableValidationError> {
    let column = columns(packet)?
        .iter()
        .find(|column| column.get("name").and_then(Value::as_str) == Some(name))
        .ok_or_else(|| TableValidationError::MissingColumn(name.to_string()))?;

    let values = column
        .get("values")
        .and_then(Value::as_array)
        .ok_or(TableValidationError::NotATable)?;

    Ok(values
        .iter()
        .map(|cell| cell.as_str().map(str::to_string))
        .collect())
}

/// Asserts that a serialized table has exactly `expected` columns, in order.
///
/// # Returns
///
/// * `Ok(())` - If the column names match
/// * `Err(TableValidationError)` - If they do not, or the packet is not a table
pub fn assert_table_columns(
    packet: &DataPacket,
    expected: &[&str],
) -> Result<(), TableValidationError> {
    let actual = column_names(packet)?;
    if actual != expected {
        return Err(TableValidationError::ColumnMismatch {
            expected: expected.iter().map(|s| s.to_string()).collect(),
            actual,
        });
    }
    Ok(())
}

/// Asserts that every column of a serialized table has the same length.
///
/// Returns the row count on success.
pub fn assert_table_rectangular(packet: &DataPacket) -> Result<usize, TableValidationError> {
    let mut rows = None;
    for name in column_names(packet)? {
        let len = column_values(packet, &name)?.len();
        match rows {
            None => rows = Some(len),
            Some(expected) if expected != len => {
                return Err(TableValidationError::RaggedColumn {
                    column: name,
                    expected,
                    actual: len,
                })
            }
            Some(_) => {}
        }
    }
    Ok(rows.unwrap_or(0))
}
