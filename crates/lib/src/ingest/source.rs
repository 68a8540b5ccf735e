//! The shared "next element" capability behind both ingestion modes.
//!
//! Document mode walks the slots of a parsed array; stream mode pulls tokens
//! from a cursor. [`ElementSource`] is the one abstraction the dispatcher is
//! written against, so the kind-directed decode logic exists exactly once.

use serde_json::Value;

use crate::ingest::errors::IngestError;
use crate::stream::{StreamError, TokenKind, TokenSource};

/// Token-level view of the element a source is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementToken {
    Null,
    Bool,
    Number,
    Text,
    /// A nested array or object; never decodable as a scalar
    Composite,
    /// The array is exhausted
    End,
}

/// One array's worth of elements, readable front to back.
///
/// `next_*` calls consume the current element. Null detection differs per
/// mode (tree null check vs. token kind), which is exactly what `peek`
/// abstracts over.
pub(crate) trait ElementSource {
    /// The token shape of the current element, or [`ElementToken::End`].
    fn peek(&mut self) -> Result<ElementToken, IngestError>;

    /// True while elements remain.
    fn has_next(&mut self) -> Result<bool, IngestError> {
        Ok(self.peek()? != ElementToken::End)
    }

    /// Consumes a null element.
    fn skip_null(&mut self) -> Result<(), IngestError>;

    /// Consumes the current element as a boolean.
    fn next_bool(&mut self) -> Result<bool, IngestError>;

    /// Consumes the current element as an integer, accepting any JSON number.
    fn next_i64(&mut self) -> Result<i64, IngestError>;

    /// Consumes the current element as a double.
    fn next_f64(&mut self) -> Result<f64, IngestError>;

    /// Consumes the current element as a string.
    fn next_text(&mut self) -> Result<String, IngestError>;

    /// Zero-based index of the current element.
    fn position(&self) -> usize;
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(index: usize, expected: &str, value: &Value) -> IngestError {
    IngestError::TypeMismatch {
        index,
        expected: expected.to_string(),
        actual: json_type_name(value).to_string(),
    }
}

/// Element source over the slots of a parsed JSON array.
pub(crate) struct DocElements<'a> {
    slots: &'a [Value],
    pos: usize,
}

impl<'a> DocElements<'a> {
    pub(crate) fn new(slots: &'a [Value]) -> Self {
        Self { slots, pos: 0 }
    }

    fn advance(&mut self, expected: &str) -> Result<(usize, &'a Value), IngestError> {
        let index = self.pos;
        match self.slots.get(index) {
            Some(value) => {
                self.pos += 1;
                Ok((index, value))
            }
            None => Err(IngestError::TypeMismatch {
                index,
                expected: expected.to_string(),
                actual: "end of array".to_string(),
            }),
        }
    }
}

impl ElementSource for DocElements<'_> {
    fn peek(&mut self) -> Result<ElementToken, IngestError> {
        let token = match self.slots.get(self.pos) {
            None => ElementToken::End,
            Some(Value::Null) => ElementToken::Null,
            Some(Value::Bool(_)) => ElementToken::Bool,
            Some(Value::Number(_)) => ElementToken::Number,
            Some(Value::String(_)) => ElementToken::Text,
            Some(Value::Array(_) | Value::Object(_)) => ElementToken::Composite,
        };
        Ok(token)
    }

    fn skip_null(&mut self) -> Result<(), IngestError> {
        let (index, value) = self.advance("null")?;
        if value.is_null() {
            Ok(())
        } else {
            Err(mismatch(index, "null", value))
        }
    }

    fn next_bool(&mut self) -> Result<bool, IngestError> {
        let (index, value) = self.advance("bool")?;
        value.as_bool().ok_or_else(|| mismatch(index, "bool", value))
    }

    fn next_i64(&mut self) -> Result<i64, IngestError> {
        let (index, value) = self.advance("number")?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
            .ok_or_else(|| mismatch(index, "number", value))
    }

    fn next_f64(&mut self) -> Result<f64, IngestError> {
        let (index, value) = self.advance("number")?;
        value.as_f64().ok_or_else(|| mismatch(index, "number", value))
    }

    fn next_text(&mut self) -> Result<String, IngestError> {
        let (index, value) = self.advance("string")?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(index, "string", value))
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// Element source over a positioned token cursor.
pub(crate) struct StreamElements<'a, T: TokenSource> {
    source: &'a mut T,
    pos: usize,
}

impl<'a, T: TokenSource> StreamElements<'a, T> {
    pub(crate) fn new(source: &'a mut T) -> Self {
        Self { source, pos: 0 }
    }

    /// Maps a cursor failure at element `index` into an ingestion error.
    ///
    /// Token shape mismatches become [`IngestError::TypeMismatch`];
    /// structural failures become [`IngestError::MalformedStream`].
    fn coerce(index: usize, err: StreamError) -> IngestError {
        match err {
            StreamError::UnexpectedToken { expected, found } => IngestError::TypeMismatch {
                index,
                expected,
                actual: found,
            },
            other => IngestError::MalformedStream {
                reason: other.to_string(),
            },
        }
    }
}

impl<T: TokenSource> ElementSource for StreamElements<'_, T> {
    fn peek(&mut self) -> Result<ElementToken, IngestError> {
        let index = self.pos;
        let kind = self.source.peek().map_err(|e| Self::coerce(index, e))?;
        let token = match kind {
            TokenKind::Null => ElementToken::Null,
            TokenKind::Bool => ElementToken::Bool,
            TokenKind::Number => ElementToken::Number,
            TokenKind::Text => ElementToken::Text,
            TokenKind::BeginArray | TokenKind::BeginObject => ElementToken::Composite,
            TokenKind::EndArray | TokenKind::Eof => ElementToken::End,
            TokenKind::EndObject => {
                return Err(IngestError::MalformedStream {
                    reason: "unexpected end of object inside array".to_string(),
                });
            }
        };
        Ok(token)
    }

    fn skip_null(&mut self) -> Result<(), IngestError> {
        let index = self.pos;
        self.source
            .skip_value()
            .map_err(|e| Self::coerce(index, e))?;
        self.pos += 1;
        Ok(())
    }

    fn next_bool(&mut self) -> Result<bool, IngestError> {
        let index = self.pos;
        let value = self.source.next_bool().map_err(|e| Self::coerce(index, e))?;
        self.pos += 1;
        Ok(value)
    }

    fn next_i64(&mut self) -> Result<i64, IngestError> {
        let index = self.pos;
        let value = self.source.next_i64().map_err(|e| Self::coerce(index, e))?;
        self.pos += 1;
        Ok(value)
    }

    fn next_f64(&mut self) -> Result<f64, IngestError> {
        let index = self.pos;
        let value = self.source.next_f64().map_err(|e| Self::coerce(index, e))?;
        self.pos += 1;
        Ok(value)
    }

    fn next_text(&mut self) -> Result<String, IngestError> {
        let index = self.pos;
        let value = self
            .source
            .next_string()
            .map_err(|e| Self::coerce(index, e))?;
        self.pos += 1;
        Ok(value)
    }

    fn position(&self) -> usize {
        self.pos
    }
}
