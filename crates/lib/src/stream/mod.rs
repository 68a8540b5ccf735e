//! Forward-only token cursor interface for stream-mode ingestion.
//!
//! Stream mode consumes JSON one token at a time instead of materializing a
//! tree. The tokenizer itself lives outside this crate; [`TokenSource`] is
//! the pull-cursor contract it must satisfy. [`ValueCursor`] implements the
//! contract on top of an already-parsed `serde_json::Value`, which keeps
//! stream mode exercisable anywhere a tree is available.

mod errors;
pub use errors::StreamError;

mod cursor;
pub use cursor::ValueCursor;

/// The kind of the token a cursor is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A JSON `null` literal
    Null,
    /// A JSON boolean literal
    Bool,
    /// A JSON number
    Number,
    /// A JSON string
    Text,
    /// The opening `[` of an array
    BeginArray,
    /// The closing `]` of an array
    EndArray,
    /// The opening `{` of an object
    BeginObject,
    /// The closing `}` of an object
    EndObject,
    /// End of the token sequence
    Eof,
}

/// A pull-based cursor over a JSON token sequence.
///
/// The cursor is forward-only: every `next_*` call consumes the value it is
/// positioned on, and there is no way back. [`peek`](TokenSource::peek) is
/// the only non-consuming operation.
///
/// Scalar reads fail with [`StreamError::UnexpectedToken`] when the cursor
/// is positioned on a token of a different shape. `next_i64` accepts any
/// JSON number, truncating fractional values toward zero.
pub trait TokenSource {
    /// Returns the kind of the next token without consuming it.
    fn peek(&mut self) -> Result<TokenKind, StreamError>;

    /// Returns true while the innermost open array has elements left.
    ///
    /// Fails if no array is open.
    fn has_next(&mut self) -> Result<bool, StreamError>;

    /// Consumes the opening token of an array and descends into it.
    fn begin_array(&mut self) -> Result<(), StreamError>;

    /// Consumes the closing token of the innermost open array.
    fn end_array(&mut self) -> Result<(), StreamError>;

    /// Consumes a boolean token.
    fn next_bool(&mut self) -> Result<bool, StreamError>;

    /// Consumes a number token as an integer, truncating fractional values.
    fn next_i64(&mut self) -> Result<i64, StreamError>;

    /// Consumes a number token as a double.
    fn next_f64(&mut self) -> Result<f64, StreamError>;

    /// Consumes a string token.
    fn next_string(&mut self) -> Result<String, StreamError>;

    /// Consumes and discards the next value, containers included.
    fn skip_value(&mut self) -> Result<(), StreamError>;
}
