//! Declared element kinds for typed lists.
//!
//! A list's kind is chosen when the list is created and never changes. The
//! ingestion dispatcher matches exhaustively over this enum, so adding a kind
//! forces every dispatch site to handle it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared element kind of a [`TypedList`](crate::TypedList).
///
/// The scalar kinds map one-to-one onto the storage sink's append methods.
/// The integer family (byte through long) is widened to a single `Int` kind
/// stored as `i64`. `Object` is the structured kind: lists of that kind exist
/// in the data model but cannot be filled by scalar ingestion, which fails
/// with [`IngestError::UnsupportedElementKind`](crate::IngestError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Boolean elements
    Bool,
    /// 64-bit integer elements (the widened integer family)
    Int,
    /// Single-precision float elements
    Float,
    /// Double-precision float elements
    Double,
    /// UTF-8 text elements
    Text,
    /// Binary blob elements, hex-encoded in JSON
    Binary,
    /// Timestamp elements, epoch-millisecond numbers or ISO-8601 strings in JSON
    Timestamp,
    /// Structured elements; not ingestible from a scalar array
    Object,
}

impl ElementKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::Int => "int",
            ElementKind::Float => "float",
            ElementKind::Double => "double",
            ElementKind::Text => "text",
            ElementKind::Binary => "binary",
            ElementKind::Timestamp => "timestamp",
            ElementKind::Object => "object",
        }
    }

    /// Whether ingestion turns a JSON `null` element into a null marker for this kind.
    ///
    /// Text and Binary elements are read through the string accessor with no
    /// null pre-check, so a `null` element under those kinds surfaces as a
    /// type mismatch instead.
    pub fn accepts_null_elements(&self) -> bool {
        matches!(
            self,
            ElementKind::Bool
                | ElementKind::Int
                | ElementKind::Float
                | ElementKind::Double
                | ElementKind::Timestamp
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
