//! Tagged attribute values and insertion-ordered attribute maps.

/// An attribute value, tagged once when the graph is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A single-valued tag
    Scalar(String),
    /// A multi-valued tag, in file order
    List(Vec<String>),
    /// Explicitly absent
    Missing,
}

impl AttributeValue {
    /// Whether this value is list-valued
    pub fn is_list(&self) -> bool {
        matches!(self, AttributeValue::List(_))
    }

    /// Whether this value is absent
    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeValue::Missing)
    }

    /// The scalar string, if this is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The list elements, if this is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Scalar(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Scalar(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        AttributeValue::List(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        AttributeValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Attribute map that remembers the order keys were first inserted
///
/// Maps here are small (a handful of tags per stanza), so lookups are linear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace a value; a replaced key keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append one element to a list value, creating the list if needed
    ///
    /// An existing scalar is promoted to a list holding both values.
    pub fn append(&mut self, key: impl Into<String>, element: impl Into<String>) {
        let key = key.into();
        let element = element.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, AttributeValue::List(values))) => values.push(element),
            Some((_, existing)) => {
                let promoted = match std::mem::replace(existing, AttributeValue::Missing) {
                    AttributeValue::Scalar(first) => vec![first, element],
                    _ => vec![element],
                };
                *existing = AttributeValue::List(promoted);
            }
            None => self.entries.push((key, AttributeValue::List(vec![element]))),
        }
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Insert every entry of `other`, replacing values for keys already present
    pub fn merge(&mut self, other: Attributes) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}
