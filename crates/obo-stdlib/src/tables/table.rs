use serde::{Deserialize, Serialize};

/// A named column of optional string cells; `None` is the missing marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// One cell per row
    pub values: Vec<Option<String>>,
}

impl Column {
    /// Create a column from its cells
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column-oriented table
///
/// Tables built by this crate are rectangular: every column has one cell per
/// row. Serialized as `{"columns": [{"name": .., "values": [..]}, ..]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Assemble a table from columns of equal length
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let table = Self { columns };
        debug_assert!(table.is_rectangular(), "columns must have equal length");
        table
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Whether every column has the same number of cells
    pub fn is_rectangular(&self) -> bool {
        let rows = self.row_count();
        self.columns.iter().all(|c| c.values.len() == rows)
    }

    /// The cells of row `index`, in column order
    pub fn row(&self, index: usize) -> Option<Vec<Option<&str>>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values.get(index).and_then(|v| v.as_deref()))
                .collect(),
        )
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&str>>> + '_ {
        (0..self.row_count()).filter_map(move |index| self.row(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new("id", vec![Some("A:1".to_string()), Some("A:2".to_string())]),
            Column::new("name", vec![Some("alpha".to_string()), None]),
        ])
    }

    #[test]
    fn test_shape() {
        let table = sample();
        assert_eq!(table.column_names(), vec!["id", "name"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert!(table.is_rectangular());
        assert_eq!(Table::default().row_count(), 0);
    }

    #[test]
    fn test_rows() {
        let table = sample();
        assert_eq!(table.row(1), Some(vec![Some("A:2"), None]));
        assert_eq!(table.row(2), None);
        assert_eq!(table.rows().count(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "columns": [
                    {"name": "id", "values": ["A:1", "A:2"]},
                    {"name": "name", "values": ["alpha", null]}
                ]
            })
        );

        let back: Table = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }
}
