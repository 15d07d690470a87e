use super::normalize::normalize_column;
use super::table::{Column, Table};
use obo_graph::{AttributeValue, ParsedGraph};
use std::collections::HashSet;
use tracing::debug;

/// Edge source column
pub const SOURCE_COLUMN: &str = "source";
/// Edge target column
pub const TARGET_COLUMN: &str = "target";
/// Edge type column
pub const TYPE_COLUMN: &str = "type";

const RESERVED_COLUMNS: [&str; 3] = [SOURCE_COLUMN, TARGET_COLUMN, TYPE_COLUMN];

/// Flatten the graph's edges into a table, one row per edge in edge order.
///
/// Columns are `source`, `target`, `type`, then every other edge attribute in
/// the order first seen. An edge without one of those attributes gets a
/// missing cell for it.
pub fn build_edges_table(graph: &ParsedGraph) -> Table {
    let mut seen: HashSet<&str> = RESERVED_COLUMNS.into_iter().collect();
    let mut extra_columns = Vec::new();
    for edge in graph.edges() {
        for key in edge.attributes.keys() {
            if seen.insert(key) {
                extra_columns.push(key);
            }
        }
    }

    let mut sources = Vec::with_capacity(graph.edge_count());
    let mut targets = Vec::with_capacity(graph.edge_count());
    let mut types = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        sources.push(Some(edge.source.to_string()));
        targets.push(Some(edge.target.to_string()));
        types.push(Some(edge.edge_type.to_string()));
    }

    let mut columns = vec![
        Column::new(SOURCE_COLUMN, sources),
        Column::new(TARGET_COLUMN, targets),
        Column::new(TYPE_COLUMN, types),
    ];

    for key in extra_columns {
        let cells = graph
            .edges()
            .map(|edge| {
                edge.attributes
                    .get(key)
                    .cloned()
                    .unwrap_or(AttributeValue::Missing)
            })
            .collect();
        columns.push(Column::new(key, normalize_column(cells)));
    }

    let table = Table::from_columns(columns);
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Built edges table"
    );
    table
}
