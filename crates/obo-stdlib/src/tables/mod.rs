//! Graph-to-table flattening for the OBO Reader outputs.

pub mod edges;
pub mod nodes;
pub mod normalize;
pub mod table;

pub use edges::build_edges_table;
pub use nodes::{build_nodes_table, parse_column_list, ColumnSelectionPolicy};
pub use table::{Column, Table};

use obo_graph::ParsedGraph;

/// The two finished tables handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTables {
    /// One row per node
    pub nodes: Table,
    /// One row per edge
    pub edges: Table,
}

/// Build both output tables from one parsed graph
pub fn build_output_tables(graph: &ParsedGraph, policy: &ColumnSelectionPolicy) -> OutputTables {
    OutputTables {
        nodes: build_nodes_table(graph, policy),
        edges: build_edges_table(graph),
    }
}
