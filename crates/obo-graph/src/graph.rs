//! In-memory attributed directed multigraph built from one OBO file.

use crate::value::{AttributeValue, Attributes};
use std::collections::HashMap;

/// A graph node: an identifier plus its attribute map
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Term identifier, e.g. `GO:0008150`
    pub id: String,
    /// Attributes from the term stanza
    pub attributes: Attributes,
}

/// Borrowed view of one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a> {
    /// Source node id
    pub source: &'a str,
    /// Target node id
    pub target: &'a str,
    /// Relationship type, e.g. `is_a` or `part_of`
    pub edge_type: &'a str,
    /// Attributes other than the type
    pub attributes: &'a Attributes,
}

#[derive(Debug, Clone)]
struct Neighbor {
    target: String,
    // keyed by edge type, in insertion order
    edges: Vec<(String, Attributes)>,
}

/// Result of parsing one OBO file
///
/// Nodes keep insertion order. Edges are keyed by (source, target, type), so
/// adding the same triple twice keeps one edge. Adding an edge whose endpoint
/// is unknown adds that node with no attributes.
#[derive(Debug, Clone, Default)]
pub struct ParsedGraph {
    name: Option<String>,
    header: Attributes,
    typedefs: Vec<Attributes>,
    instances: Vec<Attributes>,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    // parallel to `nodes`
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl ParsedGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or merge `attributes` into an existing node with the same id
    pub fn add_node(&mut self, id: impl Into<String>, attributes: Attributes) {
        let id = id.into();
        match self.index.get(&id) {
            Some(&position) => self.nodes[position].attributes.merge(attributes),
            None => {
                self.index.insert(id.clone(), self.nodes.len());
                self.nodes.push(Node { id, attributes });
                self.adjacency.push(Vec::new());
            }
        }
    }

    fn ensure_node(&mut self, id: &str) -> usize {
        if let Some(&position) = self.index.get(id) {
            return position;
        }
        self.add_node(id, Attributes::new());
        self.nodes.len() - 1
    }

    /// Add a typed edge; returns `false` if the (source, target, type) edge
    /// already existed, in which case its attributes are merged
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        edge_type: &str,
        attributes: Attributes,
    ) -> bool {
        let source_position = self.ensure_node(source);
        self.ensure_node(target);

        let neighbors = &mut self.adjacency[source_position];
        let neighbor = match neighbors.iter().position(|n| n.target == target) {
            Some(position) => &mut neighbors[position],
            None => {
                neighbors.push(Neighbor {
                    target: target.to_string(),
                    edges: Vec::new(),
                });
                let last = neighbors.len() - 1;
                &mut neighbors[last]
            }
        };

        match neighbor.edges.iter_mut().find(|(t, _)| t == edge_type) {
            Some((_, existing)) => {
                existing.merge(attributes);
                false
            }
            None => {
                neighbor.edges.push((edge_type.to_string(), attributes));
                self.edge_count += 1;
                true
            }
        }
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, grouped by source in node order, then by target in the
    /// order it was first linked, then by type in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.nodes
            .iter()
            .zip(self.adjacency.iter())
            .flat_map(|(node, neighbors)| {
                neighbors.iter().flat_map(move |neighbor| {
                    neighbor.edges.iter().map(move |(edge_type, attributes)| EdgeRef {
                        source: &node.id,
                        target: &neighbor.target,
                        edge_type,
                        attributes,
                    })
                })
            })
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Ontology name: the header `name` tag, falling back to `ontology`
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Header tags
    pub fn header(&self) -> &Attributes {
        &self.header
    }

    /// `[Typedef]` stanzas in file order
    pub fn typedefs(&self) -> &[Attributes] {
        &self.typedefs
    }

    /// `[Instance]` stanzas in file order
    pub fn instances(&self) -> &[Attributes] {
        &self.instances
    }

    pub(crate) fn set_header(&mut self, header: Attributes) {
        self.name = header
            .get("name")
            .or_else(|| header.get("ontology"))
            .and_then(AttributeValue::as_scalar)
            .map(str::to_string);
        self.header = header;
    }

    pub(crate) fn push_typedef(&mut self, typedef: Attributes) {
        self.typedefs.push(typedef);
    }

    pub(crate) fn push_instance(&mut self, instance: Attributes) {
        self.instances.push(instance);
    }
}
