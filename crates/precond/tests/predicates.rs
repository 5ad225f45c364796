use std::collections::BTreeMap;

use precond::{
    is_between_exclusive, is_between_inclusive, is_integer, is_negative, is_not_negative,
    is_not_positive, is_null_or_undefined, is_null_undefined_or_empty,
    is_null_undefined_or_whitespace, is_one_of_types, is_positive, TypeName, Value,
};

fn non_strings() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Undefined,
        Value::from(true),
        Value::from(0),
        Value::from(12i64),
        Value::from(vec!["a"]),
        Value::Object(BTreeMap::new()),
    ]
}

#[test]
fn absent_forms_are_null_or_undefined() {
    assert!(is_null_or_undefined(Value::Null));
    assert!(is_null_or_undefined(Value::Undefined));
    assert!(is_null_or_undefined(None::<&str>));
    assert!(!is_null_or_undefined(""));
    assert!(!is_null_or_undefined(0));
    assert!(!is_null_or_undefined(false));
}

#[test]
fn empty_means_zero_length_only() {
    assert!(is_null_undefined_or_empty(""));
    assert!(!is_null_undefined_or_empty(" \t\r\n"));
    assert!(!is_null_undefined_or_empty("Test"));
    for value in non_strings() {
        assert!(is_null_undefined_or_empty(&value), "{value:?}");
    }
}

#[test]
fn whitespace_only_counts_as_blank() {
    assert!(is_null_undefined_or_whitespace(""));
    assert!(is_null_undefined_or_whitespace(" \t\r\n"));
    assert!(is_null_undefined_or_whitespace("\u{a0}\u{feff}"));
    assert!(!is_null_undefined_or_whitespace(" x "));
    for value in non_strings() {
        assert!(is_null_undefined_or_whitespace(&value), "{value:?}");
    }
}

#[test]
fn sign_checks_on_numbers_and_bigints() {
    assert!(is_positive(1));
    assert!(is_positive(0.5));
    assert!(is_positive(7i64));
    assert!(!is_positive(0));
    assert!(!is_positive(-3i64));

    assert!(is_not_positive(0));
    assert!(is_not_positive(-0.0));
    assert!(is_not_positive(-2i128));
    assert!(!is_not_positive(2));

    assert!(is_negative(-1));
    assert!(is_negative(-1i64));
    assert!(!is_negative(0));

    assert!(is_not_negative(0));
    assert!(is_not_negative(0u64));
    assert!(!is_not_negative(-0.1));
}

#[test]
fn sign_checks_reject_non_numerics() {
    for value in [
        Value::Null,
        Value::Undefined,
        Value::from("1"),
        Value::from(true),
        Value::Number(f64::NAN),
    ] {
        assert!(!is_positive(&value), "{value:?}");
        assert!(!is_not_positive(&value), "{value:?}");
        assert!(!is_negative(&value), "{value:?}");
        assert!(!is_not_negative(&value), "{value:?}");
    }
}

#[test]
fn between_ignores_bound_order() {
    assert!(is_between_inclusive(5, 1, 10));
    assert!(is_between_inclusive(5, 10, 1));
    assert!(is_between_exclusive(5, 10, 1));
    assert!(!is_between_inclusive(11, 10, 1));
    assert!(!is_between_exclusive(0, 1, 10));
}

#[test]
fn between_bounds_are_inclusive_or_exclusive() {
    assert!(is_between_inclusive(1, 1, 10));
    assert!(is_between_inclusive(10, 1, 10));
    assert!(!is_between_exclusive(1, 1, 10));
    assert!(!is_between_exclusive(10, 10, 1));
    assert!(is_between_inclusive(3, 3, 3));
    assert!(!is_between_exclusive(3, 3, 3));
}

#[test]
fn between_mixes_numbers_and_bigints() {
    assert!(is_between_inclusive(2.5, 2i64, 3i64));
    assert!(is_between_exclusive(5i64, 4.5, 5.5));
    assert!(!is_between_exclusive(5i64, 5.0, 9i64));
}

#[test]
fn between_requires_numeric_operands() {
    assert!(!is_between_inclusive("5", 1, 10));
    assert!(!is_between_inclusive(5, Value::Null, 10));
    assert!(!is_between_inclusive(5, 1, "10"));
    assert!(!is_between_exclusive(Value::Undefined, 1, 10));
    assert!(!is_between_inclusive(5, f64::NAN, 10));
}

#[test]
fn integer_check() {
    assert!(is_integer(4));
    assert!(is_integer(4.0));
    assert!(is_integer(-9i64));
    assert!(is_integer(i128::MAX));
    assert!(!is_integer(4.5));
    assert!(!is_integer("4"));
    assert!(!is_integer(Value::Null));
    assert!(!is_integer(Value::Undefined));
}

#[test]
fn type_membership() {
    assert!(is_one_of_types(1, &[TypeName::Number]));
    assert!(is_one_of_types(1i64, &[TypeName::Number, TypeName::BigInt]));
    assert!(is_one_of_types("a", &[TypeName::String]));
    assert!(is_one_of_types(vec![1], &[TypeName::Object]));
    assert!(is_one_of_types(Value::Object(BTreeMap::new()), &[TypeName::Object]));
    assert!(!is_one_of_types(1, &[TypeName::String]));
    assert!(!is_one_of_types(1, &[]));
    assert!(!is_one_of_types(Value::Null, &[TypeName::Object]));
    assert!(!is_one_of_types(Value::Undefined, &[TypeName::Object]));
}

#[test]
fn value_methods_match_free_functions() {
    let value = Value::from(-4);
    assert!(value.is_negative());
    assert!(value.is_integer());
    assert!(value.is_between_inclusive(&Value::from(0), &Value::from(-4)));
    assert!(!value.is_one_of_types(&[TypeName::BigInt]));
}
