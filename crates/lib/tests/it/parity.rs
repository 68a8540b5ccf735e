use crate::helpers::*;
use lodelist::ElementKind;
use serde_json::{Value, json};

fn assert_both_modes_agree(kind: ElementKind, array: Value) {
    let doc = load_document(kind, array.clone()).unwrap();
    let stream = load_stream(kind, array.clone()).unwrap();
    assert_eq!(
        doc.sink().elements(),
        stream.sink().elements(),
        "document and stream contents diverged for kind {kind} on {array}"
    );
}

#[test]
fn test_document_and_stream_agree_per_kind() {
    assert_both_modes_agree(ElementKind::Bool, json!([true, null, false]));
    assert_both_modes_agree(ElementKind::Int, json!([1, null, -3, 4.5]));
    assert_both_modes_agree(ElementKind::Float, json!([1.5, null, -0.5]));
    assert_both_modes_agree(ElementKind::Double, json!([2.5, null, 1e10]));
    assert_both_modes_agree(ElementKind::Text, json!(["a", "b", ""]));
    assert_both_modes_agree(ElementKind::Binary, json!(["00", "ff", "48656c6c6f"]));
    assert_both_modes_agree(
        ElementKind::Timestamp,
        json!([1_700_000_000_000i64, "2023-11-14T22:13:20Z", null, 0]),
    );
}

#[test]
fn test_empty_array_agrees() {
    for kind in [
        ElementKind::Bool,
        ElementKind::Int,
        ElementKind::Float,
        ElementKind::Double,
        ElementKind::Text,
        ElementKind::Binary,
        ElementKind::Timestamp,
    ] {
        let doc = load_document(kind, json!([])).unwrap();
        let stream = load_stream(kind, json!([])).unwrap();
        assert!(doc.sink().is_empty());
        assert!(stream.sink().is_empty());
    }
}

#[test]
fn test_both_modes_are_idempotent() {
    let array = json!([1, null, 3]);

    let mut doc = load_document(ElementKind::Int, array.clone()).unwrap();
    let first = doc.sink().elements().to_vec();
    let object = object_with("items", array.clone());
    doc.load_document(&object, "items").unwrap();
    assert_eq!(doc.sink().elements(), &first[..]);

    let mut stream = load_stream(ElementKind::Int, array.clone()).unwrap();
    let mut cursor = lodelist::ValueCursor::new(&array);
    stream.load_stream(&mut cursor).unwrap();
    assert_eq!(stream.sink().elements(), &first[..]);
}
