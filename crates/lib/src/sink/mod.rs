//! Storage sink abstraction for typed lists.
//!
//! The sink is the append-only collaborator that physically persists list
//! elements. Ingestion never inspects what a sink did with an element; it
//! only guarantees one append call per input element, in input order.

use chrono::{DateTime, Utc};

mod element;
pub use element::Element;

mod in_memory;
pub use in_memory::MemoryList;

/// The append-only destination for typed list elements.
///
/// Implementations persist elements in append-call order. The trait carries
/// no error channel: failure handling, durability, and enforcement of column
/// nullability all belong to the storage layer behind the implementation.
/// Callers must provide whatever write exclusion the storage layer requires;
/// neither this trait nor ingestion performs any locking.
pub trait StorageSink {
    /// Removes every element from the list.
    fn clear(&mut self);

    /// Appends an explicit null marker.
    fn append_null(&mut self);

    /// Appends a boolean element.
    fn append_bool(&mut self, value: bool);

    /// Appends an integer element.
    fn append_int(&mut self, value: i64);

    /// Appends a single-precision float element.
    fn append_float(&mut self, value: f32);

    /// Appends a double-precision float element.
    fn append_double(&mut self, value: f64);

    /// Appends a text element.
    fn append_text(&mut self, value: &str);

    /// Appends a binary element.
    fn append_binary(&mut self, value: &[u8]);

    /// Appends a timestamp element.
    fn append_timestamp(&mut self, value: DateTime<Utc>);
}
