use crate::helpers::*;
use lodelist::{Element, ElementKind, Error, StorageSink, TypedList};
use serde_json::json;

#[test]
fn test_absent_field_leaves_list_untouched() {
    let mut list = TypedList::in_memory(ElementKind::Int);
    list.sink_mut().append_int(7);

    let object = object_with("other", json!([1, 2]));
    list.load_document(&object, "scores").unwrap();

    // No clear, no append
    assert_eq!(list.sink().elements(), &[Element::Int(7)]);
}

#[test]
fn test_null_field_clears_list() {
    let mut list = TypedList::in_memory(ElementKind::Int);
    list.sink_mut().append_int(7);

    let object = object_with("scores", json!(null));
    list.load_document(&object, "scores").unwrap();

    assert!(list.sink().is_empty());
}

#[test]
fn test_non_array_field_is_malformed() {
    for wrong in [json!(42), json!("nope"), json!({ "a": 1 })] {
        let mut list = TypedList::in_memory(ElementKind::Int);
        let object = object_with("scores", wrong);

        let err = list.load_document(&object, "scores").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.module(), "ingest");
        match err {
            Error::Ingest(ingest_err) => assert_eq!(ingest_err.field(), Some("scores")),
            other => panic!("expected ingest error, got {other:?}"),
        }
    }
}

#[test]
fn test_bool_elements() {
    let list = load_document(ElementKind::Bool, json!([true, null, false])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Bool(true), Element::Null, Element::Bool(false)]
    );
}

#[test]
fn test_integer_family_widens_to_i64() {
    // Any JSON number is accepted; fractional values truncate undetected.
    let list = load_document(ElementKind::Int, json!([1, -2, 3.9])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Int(1), Element::Int(-2), Element::Int(3)]
    );
}

#[test]
fn test_float_narrows_from_double() {
    let list = load_document(ElementKind::Float, json!([1.5, null])).unwrap();
    assert_eq!(list.sink().elements(), &[Element::Float(1.5), Element::Null]);
}

#[test]
fn test_double_elements() {
    let list = load_document(ElementKind::Double, json!([2.5, null, -0.25])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Double(2.5), Element::Null, Element::Double(-0.25)]
    );
}

#[test]
fn test_text_elements() {
    let list = load_document(ElementKind::Text, json!(["a", "b"])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Text("a".into()), Element::Text("b".into())]
    );
}

#[test]
fn test_null_text_element_is_type_mismatch() {
    // Text elements are read with no null pre-check; a null slot fails
    // instead of appending a null marker.
    let err = load_document(ElementKind::Text, json!(["a", null])).unwrap_err();
    assert!(err.is_type_mismatch());
    match err {
        Error::Ingest(ingest_err) => assert_eq!(ingest_err.element_index(), Some(1)),
        other => panic!("expected ingest error, got {other:?}"),
    }
}

#[test]
fn test_binary_decodes_hex() {
    let list = load_document(ElementKind::Binary, json!(["48656c6c6f"])).unwrap();
    assert_eq!(
        list.sink().elements(),
        &[Element::Binary(b"Hello".to_vec())]
    );
}

#[test]
fn test_binary_rejects_bad_hex() {
    let err = load_document(ElementKind::Binary, json!(["zz"])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_timestamp_number_and_text_decode_identically() {
    let list = load_document(
        ElementKind::Timestamp,
        json!([1_700_000_000_000i64, "2023-11-14T22:13:20Z"]),
    )
    .unwrap();

    let elements = list.sink().elements();
    assert_eq!(elements[0], elements[1]);
    let ts = elements[0].as_timestamp().unwrap();
    assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
}

#[test]
fn test_timestamp_offset_text_normalizes_to_utc() {
    let list = load_document(
        ElementKind::Timestamp,
        json!(["2023-11-15T00:13:20+02:00"]),
    )
    .unwrap();

    let ts = list.sink().get(0).unwrap().as_timestamp().unwrap();
    assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
}

#[test]
fn test_timestamp_rejects_unparseable_text() {
    let err = load_document(ElementKind::Timestamp, json!(["yesterday"])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_nullable_integer_scenario() {
    let list = load_document(ElementKind::Int, json!([1, null, 3])).unwrap();
    assert_eq!(list.sink().len(), 3);
    assert_eq!(
        list.sink().elements(),
        &[Element::Int(1), Element::Null, Element::Int(3)]
    );
}

#[test]
fn test_unsupported_kind_leaves_list_cleared() {
    let mut list = TypedList::in_memory(ElementKind::Object);
    list.sink_mut().append_int(9);

    let object = object_with("links", json!([1, 2, 3]));
    let err = list.load_document(&object, "links").unwrap_err();

    assert!(err.is_unsupported_kind());
    assert_eq!(err.to_string(), "Element kind 'object' is not handled");
    assert!(list.sink().is_empty());
}

#[test]
fn test_unsupported_kind_fails_even_for_empty_array() {
    let mut list = TypedList::in_memory(ElementKind::Object);
    let object = object_with("links", json!([]));

    let err = list.load_document(&object, "links").unwrap_err();
    assert!(err.is_unsupported_kind());
}

#[test]
fn test_mismatch_truncates_at_point_of_failure() {
    let mut list = TypedList::in_memory(ElementKind::Int);
    list.sink_mut().append_int(99);

    let object = object_with("scores", json!([1, true, 3]));
    let err = list.load_document(&object, "scores").unwrap_err();

    // No rollback: the prior contents are gone and traversal stopped after
    // the first element.
    assert!(err.is_type_mismatch());
    assert_eq!(list.sink().elements(), &[Element::Int(1)]);
}

#[test]
fn test_reloading_same_array_is_idempotent() {
    let object = object_with("scores", json!([1, null, 3]));
    let mut list = TypedList::in_memory(ElementKind::Int);

    list.load_document(&object, "scores").unwrap();
    let first = list.sink().elements().to_vec();

    list.load_document(&object, "scores").unwrap();
    assert_eq!(list.sink().elements(), &first[..]);
}

#[test]
fn test_empty_array_empties_list() {
    let mut list = TypedList::in_memory(ElementKind::Text);
    list.sink_mut().append_text("stale");

    let object = object_with("tags", json!([]));
    list.load_document(&object, "tags").unwrap();

    assert!(list.sink().is_empty());
}
