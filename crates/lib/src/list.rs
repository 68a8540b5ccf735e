//! The typed list handle.

use crate::kind::ElementKind;
use crate::sink::{MemoryList, StorageSink};

/// An ordered, mutable collection of one fixed element kind.
///
/// `TypedList` pairs a declared [`ElementKind`] — immutable for the list's
/// lifetime — with the storage sink that persists its elements. The list
/// itself holds no element data; reads and durability are the sink's
/// concern.
///
/// Lists are filled through the ingestion entry points,
/// [`load_document`](TypedList::load_document) and
/// [`load_stream`](TypedList::load_stream), both of which replace the
/// list's prior contents wholesale.
///
/// # Examples
///
/// ```
/// use lodelist::{ElementKind, TypedList};
///
/// let mut list = TypedList::in_memory(ElementKind::Int);
/// let object = serde_json::json!({ "scores": [1, null, 3] });
/// list.load_document(object.as_object().unwrap(), "scores").unwrap();
/// assert_eq!(list.sink().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TypedList<S> {
    kind: ElementKind,
    sink: S,
}

impl<S: StorageSink> TypedList<S> {
    /// Creates a typed list over an existing sink.
    ///
    /// The sink's current contents are left untouched until an ingestion
    /// call replaces them.
    pub fn new(kind: ElementKind, sink: S) -> Self {
        Self { kind, sink }
    }

    /// Returns the declared element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the list, returning the underlying sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.sink.clear();
    }
}

impl TypedList<MemoryList> {
    /// Creates an empty typed list backed by an in-memory sink.
    pub fn in_memory(kind: ElementKind) -> Self {
        Self::new(kind, MemoryList::new())
    }
}
