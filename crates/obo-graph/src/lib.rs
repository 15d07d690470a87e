//! # OBO Graph
//!
//! Loads ontology files in the OBO flat-file format into an attributed
//! directed multigraph.
//!
//! * `[Term]` stanzas become nodes keyed by their `id`
//! * `is_a` and `relationship` tags become typed edges
//! * every attribute value is tagged as scalar or list when it is parsed,
//!   based on the cardinality of its tag
//!
//! ## Example
//!
//! ```
//! use obo_graph::{parse_obo_str, ParseOptions};
//!
//! let obo = r#"
//! format-version: 1.2
//! ontology: demo
//!
//! [Term]
//! id: D:1
//! name: root
//!
//! [Term]
//! id: D:2
//! name: child
//! is_a: D:1 ! root
//! "#;
//!
//! let graph = parse_obo_str(obo, &ParseOptions::default()).unwrap();
//! assert_eq!(graph.name(), Some("demo"));
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod error;
mod graph;
mod parser;
mod tags;
mod validation;
mod value;

pub use error::OboError;
pub use graph::{EdgeRef, Node, ParsedGraph};
pub use parser::{parse_obo_reader, parse_obo_str, parse_tag_line, ParseOptions, TagLine};
pub use tags::StanzaKind;
pub use validation::{has_obo_extension, validate_obo_path, OBO_EXTENSION};
pub use value::{AttributeValue, Attributes};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Validate `path` and parse the OBO file it names.
///
/// Path problems are reported as [`OboError::InvalidInput`] before the file is
/// opened. The file handle lives only for the duration of the parse.
///
/// # Errors
///
/// * `InvalidInput` - empty path, wrong extension, or no such file
/// * `Parse` - malformed content
/// * `Io` - the file could not be read
pub fn read_obo(path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParsedGraph, OboError> {
    let path = path.as_ref();
    validate_obo_path(path)?;

    debug!(path = %path.display(), "Opening OBO file");
    let graph = {
        let file = File::open(path)?;
        parse_obo_reader(BufReader::new(file), options)?
    };

    Ok(graph)
}
