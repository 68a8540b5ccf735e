//!
//! Lodelist: typed list ingestion from JSON documents and token streams.
//! This library fills an ordered, typed collection from a JSON array, whether
//! the array arrives as a parsed tree or as a forward-only token cursor.
//!
//! ## Core Concepts
//!
//! * **Typed Lists (`list::TypedList`)**: An ordered collection whose element kind is fixed
//!   for its lifetime, backed by an append-only storage sink.
//! * **Element Kinds (`kind::ElementKind`)**: The closed set of declared element kinds
//!   (boolean, integer, float, double, text, binary, timestamp), plus the structured kind
//!   that scalar ingestion rejects.
//! * **Storage Sinks (`sink::StorageSink`)**: A pluggable append/clear destination for list
//!   elements. `sink::MemoryList` is the in-memory implementation.
//! * **Token Sources (`stream::TokenSource`)**: A pull-based cursor over JSON tokens.
//!   `stream::ValueCursor` walks an already-parsed `serde_json::Value` as a token sequence.
//! * **Ingestion (`ingest`)**: The document and stream entry points
//!   (`TypedList::load_document`, `TypedList::load_stream`) and the kind-directed dispatch
//!   they share. Ingestion always replaces the list's prior contents.

pub mod ingest;
pub mod kind;
pub mod list;
pub mod sink;
pub mod stream;

pub use ingest::IngestError;
pub use kind::ElementKind;
pub use list::TypedList;
pub use sink::{Element, MemoryList, StorageSink};
pub use stream::{StreamError, TokenKind, TokenSource, ValueCursor};

/// Result type used throughout the Lodelist library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Lodelist library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured ingestion errors from the ingest module
    #[error(transparent)]
    Ingest(ingest::IngestError),

    /// Structured token cursor errors from the stream module
    #[error(transparent)]
    Stream(stream::StreamError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Ingest(_) => "ingest",
            Error::Stream(_) => "stream",
        }
    }

    /// Check if this error indicates a value that could not be coerced to the declared kind.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Ingest(ingest_err) => ingest_err.is_type_mismatch(),
            Error::Stream(stream_err) => stream_err.is_unexpected_token(),
            _ => false,
        }
    }

    /// Check if this error indicates a declared kind outside the ingestible set.
    pub fn is_unsupported_kind(&self) -> bool {
        match self {
            Error::Ingest(ingest_err) => ingest_err.is_unsupported_kind(),
            _ => false,
        }
    }

    /// Check if this error indicates structurally invalid input (not a JSON array).
    pub fn is_malformed(&self) -> bool {
        match self {
            Error::Ingest(ingest_err) => ingest_err.is_malformed(),
            Error::Stream(stream_err) => stream_err.is_malformed(),
            _ => false,
        }
    }
}
