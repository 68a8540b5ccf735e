//! Error types for ingestion operations.

use thiserror::Error;

/// Structured error types for typed list ingestion.
///
/// None of these are retried internally, and there is no rollback: ingestion
/// clears the list before traversal begins, so an error partway through
/// leaves the list truncated at the point of failure.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum IngestError {
    /// The list's declared kind is outside the ingestible set
    #[error("Element kind '{kind}' is not handled")]
    UnsupportedElementKind { kind: String },

    /// An element could not be coerced to the declared kind
    #[error("Type mismatch at element {index}: expected {expected}, found {actual}")]
    TypeMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// The document field exists but is neither an array nor null
    #[error("Malformed document field '{field}': {reason}")]
    MalformedDocument { field: String, reason: String },

    /// The token stream is not a well-formed array
    #[error("Malformed token stream: {reason}")]
    MalformedStream { reason: String },
}

impl IngestError {
    /// Check if this error indicates a declared kind outside the ingestible set
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self, IngestError::UnsupportedElementKind { .. })
    }

    /// Check if this error indicates an element that could not be coerced
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, IngestError::TypeMismatch { .. })
    }

    /// Check if this error indicates structurally invalid input
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            IngestError::MalformedDocument { .. } | IngestError::MalformedStream { .. }
        )
    }

    /// Get the element index if this is a coercion error
    pub fn element_index(&self) -> Option<usize> {
        match self {
            IngestError::TypeMismatch { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Get the field name if this is a document error
    pub fn field(&self) -> Option<&str> {
        match self {
            IngestError::MalformedDocument { field, .. } => Some(field),
            _ => None,
        }
    }
}

// Conversion from IngestError to the main Error type
impl From<IngestError> for crate::Error {
    fn from(err: IngestError) -> Self {
        crate::Error::Ingest(err)
    }
}
