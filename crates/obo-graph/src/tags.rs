//! Stanza kinds and tag cardinality.
//!
//! Whether a tag is single-valued decides, once at parse time, whether its
//! value is stored as a scalar or a list. Tags not listed are multi-valued.

/// The kind of stanza a tag-value pair belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanzaKind {
    /// Lines before the first stanza header
    Header,
    /// `[Term]`
    Term,
    /// `[Typedef]`
    Typedef,
    /// `[Instance]`
    Instance,
}

impl StanzaKind {
    /// Resolve a stanza header name (the text between the brackets)
    pub fn from_header(name: &str) -> Option<Self> {
        match name.trim() {
            "Term" => Some(StanzaKind::Term),
            "Typedef" => Some(StanzaKind::Typedef),
            "Instance" => Some(StanzaKind::Instance),
            _ => None,
        }
    }

    /// Whether `tag` holds at most one value in this kind of stanza
    pub fn is_singular(self, tag: &str) -> bool {
        match self {
            StanzaKind::Header => matches!(
                tag,
                "format-version"
                    | "data-version"
                    | "date"
                    | "saved-by"
                    | "auto-generated-by"
                    | "default-namespace"
                    | "namespace-id-rule"
                    | "ontology"
                    | "name"
            ),
            StanzaKind::Term => matches!(
                tag,
                "id" | "is_anonymous"
                    | "name"
                    | "namespace"
                    | "def"
                    | "comment"
                    | "builtin"
                    | "created_by"
                    | "creation_date"
                    | "is_obsolete"
            ),
            StanzaKind::Typedef => matches!(
                tag,
                "id" | "is_anonymous"
                    | "name"
                    | "namespace"
                    | "def"
                    | "comment"
                    | "domain"
                    | "range"
                    | "builtin"
                    | "is_anti_symmetric"
                    | "is_cyclic"
                    | "is_reflexive"
                    | "is_symmetric"
                    | "is_transitive"
                    | "is_functional"
                    | "is_inverse_functional"
                    | "inverse_of"
                    | "created_by"
                    | "creation_date"
                    | "is_obsolete"
                    | "is_metadata_tag"
                    | "is_class_level"
            ),
            StanzaKind::Instance => matches!(
                tag,
                "id" | "is_anonymous"
                    | "name"
                    | "namespace"
                    | "comment"
                    | "instance_of"
                    | "created_by"
                    | "creation_date"
                    | "is_obsolete"
            ),
        }
    }
}
