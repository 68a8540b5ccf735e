//! The runtime representation of a single list element.
//!
//! `Element` is what the in-memory sink stores and what tests assert
//! against. Every variant matches one append method on
//! [`StorageSink`](super::StorageSink), plus the explicit null marker.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single element of a typed list.
///
/// `Null` is an explicit "no value" marker, distinct from the element being
/// absent: a list of length three may hold `[Int(1), Null, Int(3)]`.
///
/// # Direct Accessors
///
/// ```
/// # use lodelist::Element;
/// let n = Element::Int(42);
/// assert_eq!(n.as_int(), Some(42));
/// assert_eq!(n.as_text(), None);
/// assert!(!n.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// Explicit null marker
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Single-precision float value
    Float(f32),
    /// Double-precision float value
    Double(f64),
    /// Text value
    Text(String),
    /// Binary value
    Binary(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Timestamp value
    Timestamp(DateTime<Utc>),
}

impl Element {
    /// Returns true if this element is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    /// Returns the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Null => "null",
            Element::Bool(_) => "bool",
            Element::Int(_) => "int",
            Element::Float(_) => "float",
            Element::Double(_) => "double",
            Element::Text(_) => "text",
            Element::Binary(_) => "binary",
            Element::Timestamp(_) => "timestamp",
        }
    }

    /// Attempts to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a single-precision float.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Element::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a double-precision float.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Element::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a byte slice.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Element::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to convert to a timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Element::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<f32> for Element {
    fn from(value: f32) -> Self {
        Element::Float(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Double(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl From<Vec<u8>> for Element {
    fn from(value: Vec<u8>) -> Self {
        Element::Binary(value)
    }
}

impl From<DateTime<Utc>> for Element {
    fn from(value: DateTime<Utc>) -> Self {
        Element::Timestamp(value)
    }
}
