use obo_graph::{read_obo, AttributeValue, OboError, ParseOptions};
use pretty_assertions::assert_eq;
use std::io::Write;

const GO_SAMPLE: &str = r#"format-version: 1.2
data-version: releases/2024-01-17
ontology: go
subsetdef: goslim_generic "Generic GO slim"
subsetdef: goslim_yeast "Yeast GO slim"

[Term]
id: GO:0000001
name: mitochondrion inheritance
namespace: biological_process
def: "The distribution of mitochondria into daughter cells." [GOC:mcc, PMID:10873824]
synonym: "mitochondrial inheritance" EXACT []
is_a: GO:0048308 ! organelle inheritance
is_a: GO:0048311 ! mitochondrion distribution

[Term]
id: GO:0048308
name: organelle inheritance
namespace: biological_process
xref: Wikipedia:Organelle_inheritance
relationship: part_of GO:0048311 ! mitochondrion distribution

[Term]
id: GO:0000005
name: obsolete ribosomal chaperone activity
is_obsolete: true

[Typedef]
id: part_of
name: part of
is_transitive: true
"#;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("go-sample")
        .suffix(".obo")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_go_sample() {
    let file = write_fixture(GO_SAMPLE);
    let graph = read_obo(file.path(), &ParseOptions::default()).unwrap();

    assert_eq!(graph.name(), Some("go"));
    assert_eq!(
        graph.header().get("subsetdef").and_then(AttributeValue::as_list).map(|l| l.len()),
        Some(2)
    );
    assert_eq!(graph.typedefs().len(), 1);
    assert_eq!(
        graph.typedefs()[0].get("is_transitive"),
        Some(&AttributeValue::from("true"))
    );

    // GO:0048311 is only referenced, so it is appended after the declared terms
    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["GO:0000001", "GO:0048308", "GO:0048311"]);
    assert!(graph.node("GO:0048311").unwrap().attributes.is_empty());

    let edges: Vec<(&str, &str, &str)> = graph
        .edges()
        .map(|e| (e.source, e.target, e.edge_type))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("GO:0000001", "GO:0048308", "is_a"),
            ("GO:0000001", "GO:0048311", "is_a"),
            ("GO:0048308", "GO:0048311", "part_of"),
        ]
    );

    let term = graph.node("GO:0000001").unwrap();
    assert_eq!(
        term.attributes.get("is_a"),
        Some(&AttributeValue::from(vec!["GO:0048308", "GO:0048311"]))
    );
    assert_eq!(
        term.attributes.get("def").and_then(AttributeValue::as_scalar),
        Some("\"The distribution of mitochondria into daughter cells.\" [GOC:mcc, PMID:10873824]")
    );
}

#[test]
fn test_read_keeps_obsolete_when_asked() {
    let file = write_fixture(GO_SAMPLE);
    let graph = read_obo(file.path(), &ParseOptions { ignore_obsolete: false }).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert!(graph.node("GO:0000005").is_some());
}

#[test]
fn test_read_rejects_wrong_extension() {
    match read_obo("ontology.txt", &ParseOptions::default()) {
        Err(OboError::InvalidInput(msg)) => assert!(msg.contains("ontology.txt")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_read_rejects_missing_file() {
    match read_obo("missing.obo", &ParseOptions::default()) {
        Err(OboError::InvalidInput(msg)) => assert!(msg.contains("missing.obo")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_read_reports_parse_failure_line() {
    let file = write_fixture("format-version: 1.2\n\n[Term]\nid: X:1\nthis is not a tag line\n");
    match read_obo(file.path(), &ParseOptions::default()) {
        Err(OboError::Parse { line, .. }) => assert_eq!(line, 5),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}
