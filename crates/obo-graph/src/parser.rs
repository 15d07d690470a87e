use crate::error::OboError;
use crate::graph::ParsedGraph;
use crate::tags::StanzaKind;
use crate::value::{AttributeValue, Attributes};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, ErrorKind};
use tracing::debug;

lazy_static! {
    // tag is everything up to the first colon
    static ref TAG_LINE_REGEX: Regex = Regex::new(r"^(?P<tag>[^:]+):\s*(?P<rest>.*)$").unwrap();
}

/// Options controlling how terms are turned into graph nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip terms tagged `is_obsolete: true`
    pub ignore_obsolete: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_obsolete: true,
        }
    }
}

/// One parsed `tag: value {modifier} ! comment` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    /// The tag name
    pub tag: String,
    /// The value with modifiers and comment removed
    pub value: String,
    /// Trailing modifier contents, without braces
    pub modifier: Option<String>,
    /// Trailing comment, without the `!`
    pub comment: Option<String>,
}

/// Parse a single tag-value line.
///
/// The comment starts at the first `!` that is neither escaped nor inside a
/// quoted string. A trailing `{...}` block before the comment is the modifier.
/// A line without a tag, or whose value is empty once the modifier and
/// comment are removed, is an error.
pub fn parse_tag_line(line: &str, line_number: usize) -> Result<TagLine, OboError> {
    let captures = TAG_LINE_REGEX
        .captures(line)
        .ok_or_else(|| OboError::parse(line_number, format!("expected 'tag: value', got '{}'", line)))?;

    let tag = captures["tag"].trim();
    if tag.is_empty() {
        return Err(OboError::parse(line_number, "empty tag"));
    }

    let (body, comment) = split_comment(captures.name("rest").map_or("", |m| m.as_str()));
    let (value, modifier) = split_modifier(body);

    if value.is_empty() {
        return Err(OboError::parse(line_number, format!("missing value for tag '{}'", tag)));
    }

    Ok(TagLine {
        tag: tag.to_string(),
        value: value.to_string(),
        modifier: modifier.map(str::to_string),
        comment: comment.map(str::to_string),
    })
}

fn split_comment(rest: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            '!' if !in_quotes => return (&rest[..i], Some(rest[i + 1..].trim())),
            _ => {}
        }
    }
    (rest, None)
}

fn split_modifier(body: &str) -> (&str, Option<&str>) {
    let body = body.trim();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut open = None;
    let mut close = None;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            '{' if !in_quotes => open = Some(i),
            '}' if !in_quotes => close = Some(i),
            _ => {}
        }
    }

    match (open, close) {
        (Some(start), Some(end)) if end == body.len() - 1 && start < end => {
            (body[..start].trim_end(), Some(body[start + 1..end].trim()))
        }
        _ => (body, None),
    }
}

struct Stanza {
    kind: StanzaKind,
    line: usize,
    attributes: Attributes,
}

impl Stanza {
    fn new(kind: StanzaKind, line: usize) -> Self {
        Self {
            kind,
            line,
            attributes: Attributes::new(),
        }
    }

    fn add(&mut self, tag: String, value: String) {
        if self.kind.is_singular(&tag) {
            self.attributes.insert(tag, value);
        } else {
            self.attributes.append(tag, value);
        }
    }
}

#[derive(Default)]
struct GraphBuilder {
    graph: ParsedGraph,
    terms: Vec<Stanza>,
}

impl GraphBuilder {
    fn finish_stanza(&mut self, stanza: Stanza) {
        match stanza.kind {
            StanzaKind::Header => self.graph.set_header(stanza.attributes),
            StanzaKind::Term => self.terms.push(stanza),
            StanzaKind::Typedef => self.graph.push_typedef(stanza.attributes),
            StanzaKind::Instance => self.graph.push_instance(stanza.attributes),
        }
    }

    fn build(mut self, options: &ParseOptions) -> Result<ParsedGraph, OboError> {
        let mut edges = Vec::new();
        let mut skipped = 0usize;

        for term in self.terms {
            let mut attributes = term.attributes;

            let is_obsolete = attributes.get("is_obsolete").and_then(AttributeValue::as_scalar) == Some("true");
            if options.ignore_obsolete && is_obsolete {
                skipped += 1;
                continue;
            }

            let id = match attributes.remove("id") {
                Some(AttributeValue::Scalar(id)) => id,
                _ => return Err(OboError::parse(term.line, "[Term] stanza has no id")),
            };

            if let Some(targets) = attributes.get("is_a").and_then(AttributeValue::as_list) {
                for target in targets {
                    edges.push((id.clone(), "is_a".to_string(), target.clone()));
                }
            }

            if let Some(relationships) = attributes.get("relationship").and_then(AttributeValue::as_list) {
                for relationship in relationships {
                    let parts: Vec<&str> = relationship.split_whitespace().collect();
                    match parts.as_slice() {
                        [edge_type, target] => {
                            edges.push((id.clone(), edge_type.to_string(), target.to_string()))
                        }
                        _ => {
                            return Err(OboError::parse(
                                term.line,
                                format!("relationship '{}' of {} is not '<type> <target>'", relationship, id),
                            ))
                        }
                    }
                }
            }

            self.graph.add_node(id, attributes);
        }

        if skipped > 0 {
            debug!(skipped, "Skipped obsolete terms");
        }

        for (source, edge_type, target) in edges {
            self.graph.add_edge(&source, &target, &edge_type, Attributes::new());
        }

        Ok(self.graph)
    }
}

/// Parse OBO content from any buffered reader.
///
/// Lines before the first stanza header form the header stanza. Stanzas of an
/// unsupported kind are skipped with their lines. Edges are added after all
/// terms, so nodes that only appear as edge targets come after declared terms.
pub fn parse_obo_reader<R: BufRead>(reader: R, options: &ParseOptions) -> Result<ParsedGraph, OboError> {
    let mut builder = GraphBuilder::default();
    let mut current = Some(Stanza::new(StanzaKind::Header, 0));

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => OboError::parse(line_number, "invalid UTF-8"),
            _ => OboError::Io(e),
        })?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('!') {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Some(stanza) = current.take() {
                builder.finish_stanza(stanza);
            }
            let name = &trimmed[1..trimmed.len() - 1];
            current = StanzaKind::from_header(name).map(|kind| Stanza::new(kind, line_number));
            if current.is_none() {
                debug!(line = line_number, stanza = name, "Skipping unsupported stanza");
            }
            continue;
        }

        if let Some(stanza) = current.as_mut() {
            let tag_line = parse_tag_line(trimmed, line_number)?;
            stanza.add(tag_line.tag, tag_line.value);
        }
    }

    if let Some(stanza) = current.take() {
        builder.finish_stanza(stanza);
    }

    let graph = builder.build(options)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        typedefs = graph.typedefs().len(),
        "Parsed OBO content"
    );
    Ok(graph)
}

/// Parse OBO content held in a string
pub fn parse_obo_str(input: &str, options: &ParseOptions) -> Result<ParsedGraph, OboError> {
    parse_obo_reader(input.as_bytes(), options)
}
