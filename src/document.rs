//! # Document Model
//!
//! This module defines the in-memory representation of the YAML documents the
//! engine reconciles. A document is an ordered sequence of [`Item`]s; each
//! item is an opaque YAML mapping identified by its `name` field (with `slug`
//! accepted as a read-side alias). All other fields are carried through
//! add/remove operations verbatim.
//!
//! ## Shape normalization
//!
//! Persisted documents come in two historical shapes: a bare sequence of
//! items, or a mapping wrapping the sequence under a single `customModes`
//! key. [`DocumentShape::classify`] sniffs the parsed value once, and
//! [`normalize`] collapses either shape to a plain sequence so the rest of
//! the engine never deals with the polymorphism again. Anything else loads
//! as an empty document.

use log::warn;
use serde_yaml::{Mapping, Value};

/// Container field under which the selection document is persisted.
pub const CONTAINER_FIELD: &str = "customModes";

/// A single named entry in a document.
///
/// Wraps the raw YAML mapping so that arbitrary extra fields survive a round
/// trip untouched. Field insertion order is preserved by `serde_yaml`'s
/// `Mapping`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    mapping: Mapping,
}

/// An ordered sequence of items; the unit the reconciler operates on.
pub type Document = Vec<Item>;

impl Item {
    pub fn new(mapping: Mapping) -> Self {
        Self { mapping }
    }

    /// The identity key of this item: the `name` field, falling back to
    /// `slug` for documents written by older revisions.
    pub fn name(&self) -> Option<&str> {
        self.field_str("name").or_else(|| self.field_str("slug"))
    }

    /// The raw `modes` field, if any.
    pub fn modes(&self) -> Option<&Value> {
        self.mapping.get("modes")
    }

    /// Whether this item is a group: it carries a `modes` field that can
    /// contribute an expansion. An absent or null `modes`, or an empty
    /// string, marks a plain item; an empty sequence still counts as a
    /// group (one that expands to nothing).
    pub fn is_group(&self) -> bool {
        match self.modes() {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.mapping)
    }

    fn field_str(&self, field: &str) -> Option<&str> {
        match self.mapping.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

/// The persisted shape of a document, sniffed once right after parse.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentShape {
    /// A bare sequence of items.
    Bare(Vec<Value>),
    /// A mapping wrapping the sequence under [`CONTAINER_FIELD`].
    Wrapped(Vec<Value>),
    /// Anything else; loads as an empty document.
    Unrecognized,
}

impl DocumentShape {
    /// Classify a parsed YAML value into one of the recognized shapes.
    ///
    /// A wrapped document whose container field is not itself a sequence is
    /// treated as wrapping an empty sequence rather than rejected.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Sequence(seq) => DocumentShape::Bare(seq.clone()),
            Value::Mapping(map) => match map.get(CONTAINER_FIELD) {
                Some(Value::Sequence(seq)) => DocumentShape::Wrapped(seq.clone()),
                Some(_) => DocumentShape::Wrapped(Vec::new()),
                None => DocumentShape::Unrecognized,
            },
            _ => DocumentShape::Unrecognized,
        }
    }

    /// The item sequence carried by this shape.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            DocumentShape::Bare(seq) | DocumentShape::Wrapped(seq) => seq,
            DocumentShape::Unrecognized => Vec::new(),
        }
    }
}

/// Collapse a parsed YAML value to a plain [`Document`].
///
/// Non-mapping elements inside the sequence are dropped with a warning;
/// the engine only ever reconciles named mappings.
pub fn normalize(value: Value) -> Document {
    DocumentShape::classify(&value)
        .into_items()
        .into_iter()
        .filter_map(|element| match element {
            Value::Mapping(map) => Some(Item::new(map)),
            other => {
                warn!("Skipping non-mapping document element: {:?}", other);
                None
            }
        })
        .collect()
}

/// Parse a `modes` field into an ordered list of member names.
///
/// A string splits on commas with surrounding whitespace trimmed; a
/// sequence contributes its string elements as-is. Any other value yields
/// an empty expansion.
pub fn parse_modes(modes: &Value) -> Vec<String> {
    match modes {
        Value::String(s) => s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        Value::Sequence(seq) => seq
            .iter()
            .filter_map(|element| match element {
                Value::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Find an item by identity key.
pub fn find_by_name<'a>(document: &'a [Item], name: &str) -> Option<&'a Item> {
    document.iter().find(|item| item.name() == Some(name))
}

/// Whether an item with the given identity key exists in the document.
pub fn contains_name(document: &[Item], name: &str) -> bool {
    find_by_name(document, name).is_some()
}

/// Convert a document back to a sequence of raw YAML values for writing.
pub fn to_values(document: &[Item]) -> Vec<Value> {
    document
        .iter()
        .map(|item| Value::Mapping(item.as_mapping().clone()))
        .collect()
}
