//! Generators for OBO documents and fixture files.

use std::io::Write;
use tempfile::NamedTempFile;

/// A small Gene Ontology excerpt.
///
/// Contains three live terms, one obsolete term, a `part_of` relationship to
/// a term that has no stanza of its own, and a `[Typedef]`.
pub fn sample_go_obo() -> String {
    r#"format-version: 1.2
data-version: releases/2024-01-17
ontology: go
subsetdef: goslim_generic "Generic GO slim"

[Term]
id: GO:0008150
name: biological_process
namespace: biological_process
xref: Wikipedia:Biological_process

[Term]
id: GO:0009987
name: cellular process
namespace: biological_process
synonym: "cell growth and/or maintenance" NARROW []
synonym: "cell physiology" EXACT []
is_a: GO:0008150 ! biological_process

[Term]
id: GO:0006915
name: apoptotic process
namespace: biological_process
def: "A programmed cell death process." [GOC:cjm]
is_a: GO:0009987 ! cellular process
relationship: part_of GO:0012501 ! programmed cell death

[Term]
id: GO:0000005
name: obsolete ribosomal chaperone activity
namespace: molecular_function
is_obsolete: true

[Typedef]
id: part_of
name: part of
is_transitive: true
"#
    .to_string()
}

/// The smallest document with one term and no edges
pub fn minimal_obo() -> String {
    "format-version: 1.2\n\n[Term]\nid: X:1\nname: only\n".to_string()
}

/// A document whose second stanza has no `id`
pub fn malformed_obo() -> String {
    "format-version: 1.2\n\n[Term]\nid: X:1\n\n[Term]\nname: nameless\n".to_string()
}

/// Write `content` to a temporary file ending in `.obo`.
///
/// The file is removed when the returned handle is dropped.
pub fn write_obo_fixture(content: &str) -> NamedTempFile {
    write_fixture_with_suffix(content, ".obo")
}

/// Write `content` to a temporary file with the given suffix
pub fn write_fixture_with_suffix(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("fixture")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create fixture file");
    file.write_all(content.as_bytes())
        .expect("Failed to write fixture file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_obo_extension() {
        let file = write_obo_fixture(&minimal_obo());
        assert_eq!(file.path().extension().and_then(|e| e.to_str()), Some("obo"));
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), minimal_obo());
    }
}
