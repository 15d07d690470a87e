use super::normalize::normalize_column;
use super::table::{Column, Table};
use obo_graph::{AttributeValue, ParsedGraph};
use std::collections::HashSet;
use tracing::debug;

/// Name of the synthetic node identifier column
pub const ID_COLUMN: &str = "id";

/// Default column list for manual selection
pub const DEFAULT_MANUAL_COLUMNS: &str = "id,name,synonym,xref";

/// Which node attributes become table columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSelectionPolicy {
    /// `id`, then every attribute key in the order it is first seen
    #[default]
    Automatic,
    /// Exactly these columns; `id` is added first when missing
    Manual(Vec<String>),
}

impl ColumnSelectionPolicy {
    /// Manual selection from a comma-separated column list
    pub fn manual_from_list(list: &str) -> Self {
        ColumnSelectionPolicy::Manual(parse_column_list(list))
    }
}

/// Parse a comma-separated column list.
///
/// Names are trimmed; empty names and repeats are dropped. `id` is inserted
/// at the front unless it is already listed.
pub fn parse_column_list(list: &str) -> Vec<String> {
    resolve_columns(list.split(','))
}

fn resolve_columns<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns: Vec<String> = names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect();

    if !columns.iter().any(|c| c == ID_COLUMN) {
        columns.insert(0, ID_COLUMN.to_string());
    }
    columns
}

fn discover_columns(graph: &ParsedGraph) -> Vec<String> {
    let mut seen = HashSet::new();
    seen.insert(ID_COLUMN.to_string());

    let mut columns = vec![ID_COLUMN.to_string()];
    for node in graph.nodes() {
        for key in node.attributes.keys() {
            if seen.insert(key.to_string()) {
                columns.push(key.to_string());
            }
        }
    }
    columns
}

fn node_cells(graph: &ParsedGraph, column: &str) -> Vec<AttributeValue> {
    graph
        .nodes()
        .iter()
        .map(|node| {
            if column == ID_COLUMN {
                AttributeValue::Scalar(node.id.clone())
            } else {
                node.attributes
                    .get(column)
                    .cloned()
                    .unwrap_or(AttributeValue::Missing)
            }
        })
        .collect()
}

/// Flatten the graph's nodes into a table, one row per node in node order.
///
/// Requested columns that no node carries are emitted with a missing cell in
/// every row. List-valued columns are flattened to `"; "`-joined strings.
pub fn build_nodes_table(graph: &ParsedGraph, policy: &ColumnSelectionPolicy) -> Table {
    let columns = match policy {
        ColumnSelectionPolicy::Automatic => discover_columns(graph),
        ColumnSelectionPolicy::Manual(requested) => {
            let columns = resolve_columns(requested.iter().map(String::as_str));
            let synthesized: Vec<&str> = columns
                .iter()
                .filter(|c| c.as_str() != ID_COLUMN)
                .filter(|c| !graph.nodes().iter().any(|n| n.attributes.contains_key(c)))
                .map(String::as_str)
                .collect();
            if !synthesized.is_empty() {
                debug!(columns = ?synthesized, "Requested columns absent from every node");
            }
            columns
        }
    };

    let table = Table::from_columns(
        columns
            .into_iter()
            .map(|name| {
                let values = normalize_column(node_cells(graph, &name));
                Column::new(name, values)
            })
            .collect(),
    );

    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Built nodes table"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use obo_graph::Attributes;
    use pretty_assertions::assert_eq;

    fn sample_graph() -> ParsedGraph {
        let mut graph = ParsedGraph::new();
        graph.add_node(
            "GO:1",
            vec![
                ("name", AttributeValue::from("root")),
                ("synonym", AttributeValue::from(vec!["a", "b", "c"])),
            ]
            .into_iter()
            .collect(),
        );
        graph.add_node(
            "GO:2",
            vec![
                ("name", AttributeValue::from("child")),
                ("xref", AttributeValue::from(vec!["Wikipedia:Child"])),
                ("namespace", AttributeValue::from("biological_process")),
            ]
            .into_iter()
            .collect(),
        );
        graph.add_node("GO:3", Attributes::new());
        graph
    }

    fn cells<'a>(table: &'a Table, column: &str) -> Vec<Option<&'a str>> {
        table
            .column(column)
            .unwrap()
            .values
            .iter()
            .map(|v| v.as_deref())
            .collect()
    }

    #[test]
    fn test_parse_column_list() {
        assert_eq!(parse_column_list("name, xref"), vec!["id", "name", "xref"]);
        assert_eq!(parse_column_list("name,id,xref"), vec!["name", "id", "xref"]);
        assert_eq!(parse_column_list(" name,,name , xref,"), vec!["id", "name", "xref"]);
        assert_eq!(parse_column_list(""), vec!["id"]);
    }

    #[test]
    fn test_automatic_columns_in_first_seen_order() {
        let table = build_nodes_table(&sample_graph(), &ColumnSelectionPolicy::Automatic);
        assert_eq!(table.column_names(), vec!["id", "name", "synonym", "xref", "namespace"]);
        assert_eq!(table.row_count(), 3);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_list_columns_are_flattened() {
        let table = build_nodes_table(&sample_graph(), &ColumnSelectionPolicy::Automatic);
        assert_eq!(cells(&table, "synonym"), vec![Some("a; b; c"), Some(""), Some("")]);
        assert_eq!(cells(&table, "xref"), vec![Some(""), Some("Wikipedia:Child"), Some("")]);
    }

    #[test]
    fn test_scalar_columns_keep_missing_cells() {
        let table = build_nodes_table(&sample_graph(), &ColumnSelectionPolicy::Automatic);
        assert_eq!(cells(&table, "name"), vec![Some("root"), Some("child"), None]);
        assert_eq!(cells(&table, "id"), vec![Some("GO:1"), Some("GO:2"), Some("GO:3")]);
    }

    #[test]
    fn test_manual_selects_and_orders() {
        let policy = ColumnSelectionPolicy::manual_from_list("xref,name");
        let table = build_nodes_table(&sample_graph(), &policy);
        assert_eq!(table.column_names(), vec!["id", "xref", "name"]);
    }

    #[test]
    fn test_manual_synthesizes_absent_columns() {
        let policy = ColumnSelectionPolicy::manual_from_list("id,nonexistent_field");
        let table = build_nodes_table(&sample_graph(), &policy);
        assert_eq!(table.column_names(), vec!["id", "nonexistent_field"]);
        assert_eq!(cells(&table, "nonexistent_field"), vec![None, None, None]);
    }

    #[test]
    fn test_manual_policy_built_directly_still_gets_id() {
        let policy = ColumnSelectionPolicy::Manual(vec!["name".to_string()]);
        let table = build_nodes_table(&sample_graph(), &policy);
        assert_eq!(table.column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_empty_graph() {
        let table = build_nodes_table(&ParsedGraph::new(), &ColumnSelectionPolicy::Automatic);
        assert_eq!(table.column_names(), vec!["id"]);
        assert_eq!(table.row_count(), 0);
    }
}
