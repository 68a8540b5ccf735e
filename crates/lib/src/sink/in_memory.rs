//! In-memory storage sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sink::{Element, StorageSink};

/// A simple in-memory sink backed by a `Vec<Element>`.
///
/// This sink is suitable for testing, development, or callers that want to
/// materialize a list before handing it to a persistent store. It applies no
/// nullability policy: null markers are stored for any declared kind, and it
/// is the persistent storage layer's job to reject them where the column
/// forbids nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryList {
    elements: Vec<Element>,
}

impl MemoryList {
    /// Creates an empty in-memory list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored elements in append order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Returns the number of stored elements, counting null markers.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl StorageSink for MemoryList {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn append_null(&mut self) {
        self.elements.push(Element::Null);
    }

    fn append_bool(&mut self, value: bool) {
        self.elements.push(Element::Bool(value));
    }

    fn append_int(&mut self, value: i64) {
        self.elements.push(Element::Int(value));
    }

    fn append_float(&mut self, value: f32) {
        self.elements.push(Element::Float(value));
    }

    fn append_double(&mut self, value: f64) {
        self.elements.push(Element::Double(value));
    }

    fn append_text(&mut self, value: &str) {
        self.elements.push(Element::Text(value.to_string()));
    }

    fn append_binary(&mut self, value: &[u8]) {
        self.elements.push(Element::Binary(value.to_vec()));
    }

    fn append_timestamp(&mut self, value: DateTime<Utc>) {
        self.elements.push(Element::Timestamp(value));
    }
}
