//! Type definitions for the ChatGPT `conversations.json` export, plus the loader.
//!
//! Only the fields the exporter reads are modelled. Everything is optional:
//! system placeholder nodes carry `"message": null`, older exports omit `parts`,
//! and unknown fields are ignored.
//!
//! Shape:
//! ```json
//! [
//!   {
//!     "title": "Trip planning",
//!     "mapping": {
//!       "aaa-1": { "message": null },
//!       "aaa-2": { "message": { "content": { "parts": ["Hi", {"asset": "x"}] } } }
//!     }
//!   }
//! ]
//! ```
use std::fmt;
use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and parse the archive, returning its conversation records undecoded.
///
/// Fails before anything is written: the caller only creates the output
/// directory once this returns `Ok`.
pub fn load_archive(path: &Path) -> std::result::Result<Vec<Value>, ExportError> {
    let raw = fs::read(path).map_err(|e| ExportError::not_found(path, e))?;
    let value: Value = serde_json::from_slice(&raw).map_err(|e| ExportError::parse(path, e))?;

    match value {
        Value::Array(records) => {
            tracing::info!(count = records.len(), path = %path.display(), "loaded archive");
            Ok(records)
        }
        other => {
            tracing::debug!(kind = json_kind(&other), "archive root is not a list");
            Err(ExportError::InvalidShape)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// One exported chat session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Conversation {
    /// Usually a string; kept as raw JSON so non-string titles can be coerced.
    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub mapping: Option<Mapping>,
}

impl Conversation {
    /// Decode the record at 1-based position `index` of the archive.
    pub fn from_value(value: Value, index: usize) -> Result<Self> {
        serde_json::from_value(value)
            .wrap_err_with(|| format!("Conversation {index} has an unexpected shape"))
    }

    /// The heading text: the `title` field, or `Conversation_<padded>` when absent.
    ///
    /// Numbers and booleans are written as their JSON text; objects and arrays
    /// as compact JSON.
    pub fn display_title(&self, padded_number: &str) -> String {
        match &self.title {
            None => format!("Conversation_{padded_number}"),
            Some(Value::String(title)) => title.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Nodes in the order they appear in the document.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.mapping.iter().flat_map(|m| m.iter())
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Node id → node, in document order.
///
/// The export carries parent/children links, but fragment order follows the
/// order the entries were written in, so this is a list rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping(Vec<(String, Node)>);

impl Mapping {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = Mapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of node ids to nodes")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Mapping, A::Error> {
                let mut nodes = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // Entries that are not objects (`null`, numbers, ...) carry no content.
                while let Some((id, value)) = access.next_entry::<String, Value>()? {
                    match serde_json::from_value::<Node>(value) {
                        Ok(node) => nodes.push((id, node)),
                        Err(e) => tracing::debug!(node_id = %id, error = %e, "skipping malformed node"),
                    }
                }
                Ok(Mapping(nodes))
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

// ---------------------------------------------------------------------------
// Nodes and messages
// ---------------------------------------------------------------------------

// A field of the wrong JSON type inside a node reads as absent, so one odd
// node never fails its conversation.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "lenient")]
    pub parts: Option<Vec<Part>>,
}

/// Decode through `Value`, mapping `null` or a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Node {
    /// The node's parts, or an empty slice when any level is missing.
    pub fn parts(&self) -> &[Part] {
        self.message
            .as_ref()
            .and_then(|m| m.content.as_ref())
            .and_then(|c| c.parts.as_deref())
            .unwrap_or_default()
    }
}

/// One element of `content.parts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text, used verbatim.
    Text(String),

    /// Anything else (image pointers, tool payloads, ...), rendered as pretty JSON.
    Structured(Value),
}
