#![cfg(feature = "json")]

use precond::{
    is_integer, is_null_or_undefined, is_null_undefined_or_whitespace, is_one_of_types,
    is_positive, verify_not_null_undefined_or_empty, TypeName, Value,
};
use serde_json::json;

#[test]
fn json_documents_convert_into_values() {
    let doc = json!({ "name": "  ", "count": 3, "ratio": 0.5, "tags": ["a", null], "owner": null });

    assert!(is_null_undefined_or_whitespace(&doc["name"]));
    assert!(is_positive(&doc["count"]));
    assert!(is_integer(&doc["count"]));
    assert!(!is_integer(&doc["ratio"]));
    assert!(is_null_or_undefined(&doc["owner"]));
    assert!(is_one_of_types(&doc["tags"], &[TypeName::Object]));
    assert!(is_one_of_types(&doc, &[TypeName::Object]));
    assert_eq!(Value::from(&doc["tags"]).to_string(), "a,");
}

#[test]
fn json_numbers_are_fixed_precision() {
    assert_eq!(Value::from(json!(7)), Value::Number(7.0));
    assert!(!is_one_of_types(json!(7), &[TypeName::BigInt]));
}

#[test]
fn missing_json_fields_fail_verification() {
    let doc = json!({ "name": "" });
    let err = verify_not_null_undefined_or_empty(&doc["name"], None).unwrap_err();
    assert_eq!(err.message(), "Condition failed - Value is <empty string>");
    let err = verify_not_null_undefined_or_empty(&doc["missing"], None).unwrap_err();
    assert_eq!(err.message(), "Condition failed - Value is <not a string>");
}

#[test]
fn values_serialize_with_type_tags() {
    let encoded = serde_json::to_value(Value::from("x")).expect("serialize");
    assert_eq!(encoded, json!({ "type": "string", "value": "x" }));
    let encoded = serde_json::to_value(Value::Null).expect("serialize");
    assert_eq!(encoded, json!({ "type": "null" }));
}
