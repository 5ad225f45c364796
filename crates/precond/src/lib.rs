#![deny(missing_docs)]
#![doc = "Precondition checks: `is_*` predicates that classify a value and `verify_*` assertions that fail fast with a structured error."]

pub mod errors;
mod macros;
pub mod numeric;
pub mod predicates;
mod value;
pub mod verify;

#[cfg(feature = "json")]
mod json;

pub use errors::{CheckError, ErrorInfo, ErrorOrMsg, SharedError, PRECONDITION_FAILED};
pub use numeric::Numeric;
pub use predicates::{
    is_between_exclusive, is_between_inclusive, is_integer, is_negative, is_not_negative,
    is_not_positive, is_null_or_undefined, is_null_undefined_or_empty,
    is_null_undefined_or_whitespace, is_one_of_types, is_positive, NUMERIC_TYPES,
};
pub use value::{TypeName, Value};
pub use verify::{
    verify, verify_between_exclusive, verify_between_inclusive, verify_integer, verify_negative,
    verify_not_negative, verify_not_null_or_undefined, verify_not_null_undefined_or_empty,
    verify_not_null_undefined_or_whitespace, verify_not_positive, verify_one_of_types,
    verify_positive,
};
