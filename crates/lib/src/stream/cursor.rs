//! A token cursor over an already-parsed JSON tree.

use serde_json::Value;

use crate::stream::{StreamError, TokenKind, TokenSource};

/// A [`TokenSource`] that walks a `serde_json::Value` as a forward-only
/// token sequence.
///
/// The cursor descends into arrays via
/// [`begin_array`](TokenSource::begin_array); objects are treated as opaque
/// values that can be peeked at and skipped but not entered. Once a value is
/// consumed it cannot be revisited, matching the contract of a real
/// tokenizer-backed cursor.
///
/// # Examples
///
/// ```
/// use lodelist::{TokenKind, TokenSource, ValueCursor};
///
/// let value = serde_json::json!([1, null, 3]);
/// let mut cursor = ValueCursor::new(&value);
///
/// cursor.begin_array().unwrap();
/// assert_eq!(cursor.next_i64().unwrap(), 1);
/// assert_eq!(cursor.peek().unwrap(), TokenKind::Null);
/// cursor.skip_value().unwrap();
/// assert_eq!(cursor.next_i64().unwrap(), 3);
/// assert!(!cursor.has_next().unwrap());
/// cursor.end_array().unwrap();
/// ```
pub struct ValueCursor<'a> {
    root: Option<&'a Value>,
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    iter: std::slice::Iter<'a, Value>,
    peeked: Option<&'a Value>,
}

impl<'a> Frame<'a> {
    fn front(&mut self) -> Option<&'a Value> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked
    }
}

fn token_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn token_kind(value: &Value) -> TokenKind {
    match value {
        Value::Null => TokenKind::Null,
        Value::Bool(_) => TokenKind::Bool,
        Value::Number(_) => TokenKind::Number,
        Value::String(_) => TokenKind::Text,
        Value::Array(_) => TokenKind::BeginArray,
        Value::Object(_) => TokenKind::BeginObject,
    }
}

impl<'a> ValueCursor<'a> {
    /// Creates a cursor positioned at the start of `value`.
    pub fn new(value: &'a Value) -> Self {
        Self {
            root: Some(value),
            stack: Vec::new(),
        }
    }

    /// The value the next consuming call would take, if any.
    fn front(&mut self) -> Option<&'a Value> {
        match self.stack.last_mut() {
            Some(frame) => frame.front(),
            None => self.root,
        }
    }

    /// Consumes and returns the value the cursor is positioned on.
    fn take_value(&mut self) -> Option<&'a Value> {
        match self.stack.last_mut() {
            Some(frame) => {
                frame.front();
                frame.peeked.take()
            }
            None => self.root.take(),
        }
    }
}

impl TokenSource for ValueCursor<'_> {
    fn peek(&mut self) -> Result<TokenKind, StreamError> {
        let kind = match self.front() {
            Some(value) => token_kind(value),
            None if self.stack.is_empty() => TokenKind::Eof,
            None => TokenKind::EndArray,
        };
        Ok(kind)
    }

    fn has_next(&mut self) -> Result<bool, StreamError> {
        if self.stack.is_empty() {
            return Err(StreamError::Malformed {
                reason: "has_next called outside of an array".to_string(),
            });
        }
        Ok(self.peek()? != TokenKind::EndArray)
    }

    fn begin_array(&mut self) -> Result<(), StreamError> {
        match self.take_value() {
            Some(Value::Array(items)) => {
                self.stack.push(Frame {
                    iter: items.iter(),
                    peeked: None,
                });
                Ok(())
            }
            Some(value) => Err(StreamError::unexpected("array", token_name(value))),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    fn end_array(&mut self) -> Result<(), StreamError> {
        let Some(frame) = self.stack.last_mut() else {
            return Err(StreamError::Malformed {
                reason: "end_array called outside of an array".to_string(),
            });
        };
        match frame.front() {
            None => {
                self.stack.pop();
                Ok(())
            }
            Some(value) => Err(StreamError::unexpected("end of array", token_name(value))),
        }
    }

    fn next_bool(&mut self) -> Result<bool, StreamError> {
        match self.take_value() {
            Some(Value::Bool(b)) => Ok(*b),
            Some(value) => Err(StreamError::unexpected("boolean", token_name(value))),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    fn next_i64(&mut self) -> Result<i64, StreamError> {
        match self.take_value() {
            Some(Value::Number(n)) => Ok(n
                .as_i64()
                .unwrap_or_else(|| n.as_f64().unwrap_or_default() as i64)),
            Some(value) => Err(StreamError::unexpected("number", token_name(value))),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    fn next_f64(&mut self) -> Result<f64, StreamError> {
        match self.take_value() {
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or_default()),
            Some(value) => Err(StreamError::unexpected("number", token_name(value))),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    fn next_string(&mut self) -> Result<String, StreamError> {
        match self.take_value() {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(value) => Err(StreamError::unexpected("string", token_name(value))),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    fn skip_value(&mut self) -> Result<(), StreamError> {
        match self.take_value() {
            Some(_) => Ok(()),
            None => Err(StreamError::UnexpectedEnd),
        }
    }
}
