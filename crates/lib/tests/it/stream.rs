use crate::helpers::*;
use lodelist::{Element, ElementKind, Error, StorageSink, TokenSource, TypedList, ValueCursor};
use serde_json::json;

#[test]
fn test_null_stream_value_clears_list() {
    let mut list = TypedList::in_memory(ElementKind::Int);
    list.sink_mut().append_int(7);

    let value = json!(null);
    let mut cursor = ValueCursor::new(&value);
    list.load_stream(&mut cursor).unwrap();

    assert!(list.sink().is_empty());
}

#[test]
fn test_scalar_stream_value_is_malformed() {
    let value = json!(5);
    let mut list = TypedList::in_memory(ElementKind::Int);
    let mut cursor = ValueCursor::new(&value);

    let err = list.load_stream(&mut cursor).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.module(), "ingest");
}

#[test]
fn test_nullable_elements_detected_by_token_kind() {
    let list = load_stream(ElementKind::Int, json!([1, null, 3])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Int(1), Element::Null, Element::Int(3)]
    );
}

#[test]
fn test_timestamp_token_disambiguation() {
    let list = load_stream(
        ElementKind::Timestamp,
        json!([1_700_000_000_000i64, "2023-11-14T22:13:20Z", null]),
    )
    .unwrap();

    let elements = list.sink().elements();
    assert_eq!(elements[0], elements[1]);
    assert_eq!(elements[2], Element::Null);
}

#[test]
fn test_binary_elements_from_stream() {
    let list = load_stream(ElementKind::Binary, json!(["48656c6c6f"])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Binary(b"Hello".to_vec())]
    );
}

#[test]
fn test_null_text_element_is_type_mismatch() {
    let err = load_stream(ElementKind::Text, json!([null])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_composite_element_is_type_mismatch() {
    let err = load_stream(ElementKind::Int, json!([[1, 2]])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_unsupported_kind_leaves_list_cleared() {
    let mut list = TypedList::in_memory(ElementKind::Object);
    list.sink_mut().append_int(9);

    let value = json!([1]);
    let mut cursor = ValueCursor::new(&value);
    let err = list.load_stream(&mut cursor).unwrap_err();

    assert!(err.is_unsupported_kind());
    assert!(list.sink().is_empty());
}

#[test]
fn test_mismatch_truncates_at_point_of_failure() {
    let value = json!([1, true, 3]);
    let mut list = TypedList::in_memory(ElementKind::Int);
    let mut cursor = ValueCursor::new(&value);

    let err = list.load_stream(&mut cursor).unwrap_err();
    assert!(err.is_type_mismatch());
    match err {
        Error::Ingest(ingest_err) => assert_eq!(ingest_err.element_index(), Some(1)),
        other => panic!("expected ingest error, got {other:?}"),
    }
    assert_eq!(list.sink().elements(), &[Element::Int(1)]);
}

#[test]
fn test_cursor_is_fully_consumed() {
    let value = json!([true, false]);
    let mut list = TypedList::in_memory(ElementKind::Bool);
    let mut cursor = ValueCursor::new(&value);

    list.load_stream(&mut cursor).unwrap();

    // The closing token was consumed; nothing is left in the sequence.
    assert_eq!(cursor.peek().unwrap(), lodelist::TokenKind::Eof);
}
