//! API description document model.
//!
//! Mirrors the JSON input:
//!
//! ```json
//! {
//!   "macros": { "abc": "ABC" },
//!   "types": { "i32": "Signed 32-bit integer" },
//!   "endpoints": [{
//!     "method": "GET",
//!     "path": "/a/b/c",
//!     "desc": "lorem ${abc}",
//!     "req-params": { "name": { "type": "type", "desc": "desc", "default": "x" } },
//!     "req-body": { "type": "i32", "desc": "description" },
//!     "resp-body": null
//!   }]
//! }
//! ```
//!
//! Object-valued fields keep the order in which the document defines them.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::macros::MacroTable;

/// Error returned when the input document cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Invalid JSON or missing required keys.
    #[error("Invalid API description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Insertion-ordered string-keyed map.
///
/// Backed by a list of entries; lookups are linear, which is fine for the
/// handful of entries an API description holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an entry.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, key: String, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Parsed API description.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSpecDocument {
    /// Macros available to every text field of this document.
    #[serde(default)]
    pub macros: MacroTable,
    /// Data type name to explanation.
    #[serde(default)]
    pub types: OrderedMap<String>,
    /// Documented endpoints.
    pub endpoints: Vec<Endpoint>,
}

impl ApiSpecDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] on invalid JSON or missing required keys.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One documented API operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// HTTP method, not validated.
    pub method: String,
    /// Request path. Used verbatim as the HTML anchor id.
    pub path: String,
    pub desc: String,
    #[serde(rename = "req-params", default)]
    pub req_params: OrderedMap<Param>,
    #[serde(rename = "req-body", default)]
    pub req_body: Option<BodySpec>,
    #[serde(rename = "resp-body", default)]
    pub resp_body: Option<BodySpec>,
}

/// Request parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    #[serde(rename = "type")]
    pub ty: String,
    pub desc: String,
    #[serde(default)]
    pub default: Option<String>,
}

impl Param {
    /// Default value, treating an empty string as absent.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

/// Request or response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BodySpec {
    #[serde(rename = "type")]
    pub ty: String,
    pub desc: String,
}
