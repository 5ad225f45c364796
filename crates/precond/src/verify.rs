//! Fail-fast `verify_*` assertions.
//!
//! Each assertion returns `Ok(())` when its predicate holds. Otherwise it
//! fails with the caller's [`ErrorOrMsg`], or with a generic
//! [`CheckError::Precondition`] carrying the default message when none is
//! given.

use tracing::debug;

use crate::errors::{CheckError, ErrorInfo, ErrorOrMsg};
use crate::value::{trim_whitespace, TypeName, Value};

const CONDITION_FAILED: &str = "Condition failed";
const NOT_A_STRING: &str = "<not a string>";
const EMPTY_STRING: &str = "<empty string>";
const WHITESPACE: &str = "<whitespace>";

/// Fails if `condition` is false.
///
/// ```
/// use precond::{verify, ErrorOrMsg};
///
/// assert!(verify(2 == 2, None).is_ok());
/// let err = verify(2 == 3, Some(ErrorOrMsg::from("custom"))).unwrap_err();
/// assert_eq!(err.message(), "custom");
/// ```
pub fn verify(condition: bool, error_or_msg: Option<ErrorOrMsg>) -> Result<(), CheckError> {
    if condition {
        return Ok(());
    }
    Err(raise("verify", error_or_msg, || ErrorInfo::new(CONDITION_FAILED)))
}

/// Fails if the value is `null` or `undefined`.
pub fn verify_not_null_or_undefined(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if !value.is_null_or_undefined() {
        return Ok(());
    }
    Err(raise("verify_not_null_or_undefined", error_or_msg, || {
        value_message(None, value.to_string())
    }))
}

/// Fails if the value is absent, not a string, or the empty string.
pub fn verify_not_null_undefined_or_empty(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if !value.is_null_undefined_or_empty() {
        return Ok(());
    }
    Err(raise("verify_not_null_undefined_or_empty", error_or_msg, || {
        let shown = match value.as_str() {
            None => NOT_A_STRING.to_owned(),
            Some("") => EMPTY_STRING.to_owned(),
            Some(text) => text.to_owned(),
        };
        value_message(None, shown)
    }))
}

/// Fails if the value is absent, not a string, or only whitespace.
pub fn verify_not_null_undefined_or_whitespace(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if !value.is_null_undefined_or_whitespace() {
        return Ok(());
    }
    Err(raise("verify_not_null_undefined_or_whitespace", error_or_msg, || {
        let shown = match value.as_str() {
            None => NOT_A_STRING.to_owned(),
            Some(text) if trim_whitespace(text).is_empty() => WHITESPACE.to_owned(),
            Some(text) => text.to_owned(),
        };
        value_message(None, shown)
    }))
}

/// Fails unless the value is a `number` or `bigint` above zero.
pub fn verify_positive(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_positive() {
        return Ok(());
    }
    Err(raise("verify_positive", error_or_msg, || {
        value_message(Some("positive"), value.to_string())
    }))
}

/// Fails unless the value is a `number` or `bigint` at or below zero.
pub fn verify_not_positive(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_not_positive() {
        return Ok(());
    }
    Err(raise("verify_not_positive", error_or_msg, || {
        value_message(Some("not positive"), value.to_string())
    }))
}

/// Fails unless the value is a `number` or `bigint` below zero.
pub fn verify_negative(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_negative() {
        return Ok(());
    }
    Err(raise("verify_negative", error_or_msg, || {
        value_message(Some("negative"), value.to_string())
    }))
}

/// Fails unless the value is a `number` or `bigint` at or above zero.
pub fn verify_not_negative(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_not_negative() {
        return Ok(());
    }
    Err(raise("verify_not_negative", error_or_msg, || {
        value_message(Some("not negative"), value.to_string())
    }))
}

/// Fails unless the value is a `bigint` or a whole `number`.
pub fn verify_integer(
    value: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_integer() {
        return Ok(());
    }
    Err(raise("verify_integer", error_or_msg, || {
        value_message(Some("integer"), value.to_string())
    }))
}

/// Fails unless the value lies between the bounds, bounds included.
pub fn verify_between_inclusive(
    value: impl Into<Value>,
    bound1: impl Into<Value>,
    bound2: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let (value, bound1, bound2) = (value.into(), bound1.into(), bound2.into());
    if value.is_between_inclusive(&bound1, &bound2) {
        return Ok(());
    }
    Err(raise("verify_between_inclusive", error_or_msg, || {
        let range = range_label(&bound1, &bound2, "inclusive");
        value_message(Some(&range), value.to_string())
    }))
}

/// Fails unless the value lies strictly between the bounds.
pub fn verify_between_exclusive(
    value: impl Into<Value>,
    bound1: impl Into<Value>,
    bound2: impl Into<Value>,
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let (value, bound1, bound2) = (value.into(), bound1.into(), bound2.into());
    if value.is_between_exclusive(&bound1, &bound2) {
        return Ok(());
    }
    Err(raise("verify_between_exclusive", error_or_msg, || {
        let range = range_label(&bound1, &bound2, "exclusive");
        value_message(Some(&range), value.to_string())
    }))
}

/// Fails unless the value is present and its runtime type is listed.
pub fn verify_one_of_types(
    value: impl Into<Value>,
    types: &[TypeName],
    error_or_msg: Option<ErrorOrMsg>,
) -> Result<(), CheckError> {
    let value = value.into();
    if value.is_one_of_types(types) {
        return Ok(());
    }
    Err(raise("verify_one_of_types", error_or_msg, || {
        let names: Vec<&str> = types.iter().map(TypeName::as_str).collect();
        let expected = format!("one of [{}]", names.join(", "));
        value_message(Some(&expected), value.to_string())
    }))
}

/// Builds the failure returned by [`verify!`](crate::verify!).
#[doc(hidden)]
pub fn __macro_failure(message: String) -> CheckError {
    raise("verify!", Some(ErrorOrMsg::Message(message)), || {
        ErrorInfo::new(CONDITION_FAILED)
    })
}

/// Resolves the failure signal shared by every assertion.
///
/// An empty caller message counts as no message and falls back to the default.
fn raise<F>(check: &'static str, error_or_msg: Option<ErrorOrMsg>, default: F) -> CheckError
where
    F: FnOnce() -> ErrorInfo,
{
    let info = match error_or_msg {
        Some(ErrorOrMsg::Cause(cause)) => {
            debug!(check, "precondition failed, returning caller error");
            return CheckError::Cause(cause);
        }
        Some(ErrorOrMsg::Message(message)) if !message.is_empty() => ErrorInfo::new(message),
        _ => default(),
    };
    let info = info.with_context("check", check);
    debug!(check, message = %info.message, "precondition failed");
    CheckError::Precondition(info)
}

fn value_message(expected: Option<&str>, shown: String) -> ErrorInfo {
    let message = match expected {
        Some(expected) => format!("{CONDITION_FAILED} - Expected {expected} - Value is {shown}"),
        None => format!("{CONDITION_FAILED} - Value is {shown}"),
    };
    ErrorInfo::new(message).with_context("value", shown)
}

fn range_label(bound1: &Value, bound2: &Value, kind: &str) -> String {
    let swap = match (bound1.numeric(), bound2.numeric()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    };
    let (lower, upper) = if swap { (bound2, bound1) } else { (bound1, bound2) };
    format!("between {lower} and {upper} ({kind})")
}
