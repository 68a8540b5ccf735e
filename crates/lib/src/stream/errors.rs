//! Error types for token cursor operations.

use thiserror::Error;

/// Structured error types for token cursors.
///
/// These surface from [`TokenSource`](super::TokenSource) implementations
/// when the token sequence does not match what the caller asked for, or when
/// the sequence itself is structurally broken.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StreamError {
    /// The cursor was positioned on a token of a different shape
    #[error("Unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// The token sequence ended while a value was still expected
    #[error("Unexpected end of token stream")]
    UnexpectedEnd,

    /// The token sequence is not well-formed
    #[error("Malformed token stream: {reason}")]
    Malformed { reason: String },
}

impl StreamError {
    pub(crate) fn unexpected(expected: &str, found: &str) -> Self {
        StreamError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Check if this error is a token shape mismatch
    pub fn is_unexpected_token(&self) -> bool {
        matches!(self, StreamError::UnexpectedToken { .. })
    }

    /// Check if this error indicates a structurally broken token sequence
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            StreamError::Malformed { .. } | StreamError::UnexpectedEnd
        )
    }

    /// Get the expected token shape if this is a mismatch error
    pub fn expected(&self) -> Option<&str> {
        match self {
            StreamError::UnexpectedToken { expected, .. } => Some(expected),
            _ => None,
        }
    }
}

// Conversion from StreamError to the main Error type
impl From<StreamError> for crate::Error {
    fn from(err: StreamError) -> Self {
        crate::Error::Stream(err)
    }
}
