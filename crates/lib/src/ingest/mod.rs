//! Typed list ingestion from JSON arrays.
//!
//! Two entry points share one kind-directed dispatcher:
//! [`TypedList::load_document`] consumes a field of a parsed JSON object,
//! and [`TypedList::load_stream`] consumes a positioned token cursor. Both
//! replace the list's prior contents wholesale, and both produce identical
//! list contents for equivalent inputs.
//!
//! Ingestion is not transactional. The list is cleared before traversal
//! begins, so an error partway through leaves it truncated at the point of
//! failure; callers needing atomicity must wrap the call in an external
//! transactional boundary.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, trace};

mod errors;
pub use errors::IngestError;

mod source;
use source::{DocElements, ElementSource, ElementToken, StreamElements, json_type_name};

use crate::kind::ElementKind;
use crate::list::TypedList;
use crate::sink::StorageSink;
use crate::stream::{StreamError, TokenKind, TokenSource};

impl<S: StorageSink> TypedList<S> {
    /// Replaces the list's contents from a field of a parsed JSON object.
    ///
    /// Field presence is three-valued:
    /// * absent — the list is left untouched (partial update semantics);
    /// * present and `null` — the list is cleared;
    /// * present and an array — the list is cleared, then every element is
    ///   decoded per the declared kind and appended in order.
    ///
    /// Anything else fails with [`IngestError::MalformedDocument`]. Elements
    /// that cannot be coerced to the declared kind fail with
    /// [`IngestError::TypeMismatch`], stopping the traversal at that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodelist::{Element, ElementKind, TypedList};
    ///
    /// let object = serde_json::json!({ "flags": [true, null, false] });
    /// let mut list = TypedList::in_memory(ElementKind::Bool);
    /// list.load_document(object.as_object().unwrap(), "flags").unwrap();
    /// assert_eq!(list.sink().get(1), Some(&Element::Null));
    /// ```
    pub fn load_document(
        &mut self,
        object: &Map<String, Value>,
        field: &str,
    ) -> crate::Result<()> {
        let Some(value) = object.get(field) else {
            trace!(field, "Field absent, typed list left untouched");
            return Ok(());
        };

        if value.is_null() {
            debug!(field, kind = %self.kind(), "Field is null, clearing typed list");
            self.clear();
            return Ok(());
        }

        let Some(slots) = value.as_array() else {
            return Err(IngestError::MalformedDocument {
                field: field.to_string(),
                reason: format!("expected an array, found {}", json_type_name(value)),
            }
            .into());
        };

        debug!(field, kind = %self.kind(), slots = slots.len(), "Replacing typed list from document array");
        self.clear();

        let kind = self.kind();
        let mut elements = DocElements::new(slots);
        let appended = load_elements(kind, &mut elements, self.sink_mut())?;
        trace!(field, appended, "Document ingestion complete");
        Ok(())
    }

    /// Replaces the list's contents from a positioned token cursor.
    ///
    /// The cursor must be positioned at the value of an already-resolved
    /// field: a `null` token there clears the list; an array is traversed to
    /// its closing token, decoding every element per the declared kind. Any
    /// other token fails with [`IngestError::MalformedStream`].
    ///
    /// Null elements are detected by token kind, and timestamps are
    /// disambiguated the same way (a number token is epoch milliseconds,
    /// everything else is read as an ISO-8601 string), so the resulting list
    /// matches [`load_document`](TypedList::load_document) for an equivalent
    /// token sequence.
    pub fn load_stream<T: TokenSource>(&mut self, source: &mut T) -> crate::Result<()> {
        if source.peek().map_err(malformed_stream)? == TokenKind::Null {
            debug!(kind = %self.kind(), "Stream value is null, clearing typed list");
            source.skip_value().map_err(malformed_stream)?;
            self.clear();
            return Ok(());
        }

        source.begin_array().map_err(malformed_stream)?;
        debug!(kind = %self.kind(), "Replacing typed list from token stream");
        self.clear();

        let kind = self.kind();
        let appended = {
            let mut elements = StreamElements::new(source);
            load_elements(kind, &mut elements, self.sink_mut())?
        };
        source.end_array().map_err(malformed_stream)?;
        trace!(appended, "Stream ingestion complete");
        Ok(())
    }
}

fn malformed_stream(err: StreamError) -> IngestError {
    IngestError::MalformedStream {
        reason: err.to_string(),
    }
}

/// Decodes every remaining element of `source` per `kind`, appending to
/// `sink` in input order. Returns the number of appends.
///
/// One exhaustive match over the declared kind selects the decode strategy;
/// each non-fatal branch makes exactly one sink call per element. Text and
/// Binary read the slot directly with no null pre-check, so a null element
/// under those kinds surfaces as a type mismatch.
fn load_elements<E: ElementSource, S: StorageSink>(
    kind: ElementKind,
    source: &mut E,
    sink: &mut S,
) -> Result<usize, IngestError> {
    let mut appended = 0;
    match kind {
        ElementKind::Bool => {
            while source.has_next()? {
                if source.peek()? == ElementToken::Null {
                    source.skip_null()?;
                    sink.append_null();
                } else {
                    sink.append_bool(source.next_bool()?);
                }
                appended += 1;
            }
        }
        ElementKind::Int => {
            while source.has_next()? {
                if source.peek()? == ElementToken::Null {
                    source.skip_null()?;
                    sink.append_null();
                } else {
                    sink.append_int(source.next_i64()?);
                }
                appended += 1;
            }
        }
        ElementKind::Float => {
            while source.has_next()? {
                if source.peek()? == ElementToken::Null {
                    source.skip_null()?;
                    sink.append_null();
                } else {
                    sink.append_float(source.next_f64()? as f32);
                }
                appended += 1;
            }
        }
        ElementKind::Double => {
            while source.has_next()? {
                if source.peek()? == ElementToken::Null {
                    source.skip_null()?;
                    sink.append_null();
                } else {
                    sink.append_double(source.next_f64()?);
                }
                appended += 1;
            }
        }
        ElementKind::Text => {
            while source.has_next()? {
                let text = source.next_text()?;
                sink.append_text(&text);
                appended += 1;
            }
        }
        ElementKind::Binary => {
            while source.has_next()? {
                let index = source.position();
                let text = source.next_text()?;
                sink.append_binary(&decode_hex(index, &text)?);
                appended += 1;
            }
        }
        ElementKind::Timestamp => {
            while source.has_next()? {
                match source.peek()? {
                    ElementToken::Null => {
                        source.skip_null()?;
                        sink.append_null();
                    }
                    ElementToken::Number => {
                        let index = source.position();
                        let millis = source.next_i64()?;
                        sink.append_timestamp(timestamp_from_millis(index, millis)?);
                    }
                    _ => {
                        let index = source.position();
                        let text = source.next_text()?;
                        sink.append_timestamp(parse_timestamp(index, &text)?);
                    }
                }
                appended += 1;
            }
        }
        ElementKind::Object => {
            return Err(IngestError::UnsupportedElementKind {
                kind: kind.as_str().to_string(),
            });
        }
    }
    Ok(appended)
}

fn decode_hex(index: usize, text: &str) -> Result<Vec<u8>, IngestError> {
    hex::decode(text).map_err(|e| IngestError::TypeMismatch {
        index,
        expected: "hex-encoded binary".to_string(),
        actual: format!("'{text}' ({e})"),
    })
}

fn timestamp_from_millis(index: usize, millis: i64) -> Result<DateTime<Utc>, IngestError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| IngestError::TypeMismatch {
        index,
        expected: "epoch-millisecond timestamp".to_string(),
        actual: millis.to_string(),
    })
}

fn parse_timestamp(index: usize, text: &str) -> Result<DateTime<Utc>, IngestError> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| IngestError::TypeMismatch {
            index,
            expected: "ISO-8601 timestamp".to_string(),
            actual: format!("'{text}' ({e})"),
        })
}
