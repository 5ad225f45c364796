//! Side-effect free `is_*` checks.
//!
//! Every predicate is total: absent or mistyped input yields `false` (or
//! `true` for the "null, undefined or ..." family) and never panics.

use crate::numeric::Numeric;
use crate::value::{trim_whitespace, TypeName, Value};

/// Type names treated as numeric by the sign and range checks.
pub const NUMERIC_TYPES: [TypeName; 2] = [TypeName::Number, TypeName::BigInt];

impl Value {
    /// See [`is_null_or_undefined`].
    pub fn is_null_or_undefined(&self) -> bool {
        self.is_absent()
    }

    /// See [`is_null_undefined_or_empty`].
    pub fn is_null_undefined_or_empty(&self) -> bool {
        self.as_str().map_or(true, str::is_empty)
    }

    /// See [`is_null_undefined_or_whitespace`].
    pub fn is_null_undefined_or_whitespace(&self) -> bool {
        self.as_str().map_or(true, |s| trim_whitespace(s).is_empty())
    }

    /// See [`is_positive`].
    pub fn is_positive(&self) -> bool {
        self.numeric().is_some_and(|n| n > Numeric::ZERO)
    }

    /// See [`is_not_positive`].
    pub fn is_not_positive(&self) -> bool {
        self.numeric().is_some_and(|n| n <= Numeric::ZERO)
    }

    /// See [`is_negative`].
    pub fn is_negative(&self) -> bool {
        self.numeric().is_some_and(|n| n < Numeric::ZERO)
    }

    /// See [`is_not_negative`].
    pub fn is_not_negative(&self) -> bool {
        self.numeric().is_some_and(|n| n >= Numeric::ZERO)
    }

    /// See [`is_between_inclusive`].
    pub fn is_between_inclusive(&self, bound1: &Value, bound2: &Value) -> bool {
        self.is_between(bound1, bound2, true)
    }

    /// See [`is_between_exclusive`].
    pub fn is_between_exclusive(&self, bound1: &Value, bound2: &Value) -> bool {
        self.is_between(bound1, bound2, false)
    }

    /// See [`is_integer`].
    pub fn is_integer(&self) -> bool {
        !self.is_absent() && self.numeric().is_some_and(|n| n.is_integer())
    }

    /// See [`is_one_of_types`].
    pub fn is_one_of_types(&self, types: &[TypeName]) -> bool {
        self.type_name().is_some_and(|name| types.contains(&name))
    }

    pub(crate) fn numeric(&self) -> Option<Numeric> {
        if self.is_one_of_types(&NUMERIC_TYPES) {
            self.as_numeric()
        } else {
            None
        }
    }

    fn is_between(&self, bound1: &Value, bound2: &Value, inclusive: bool) -> bool {
        let (Some(value), Some(lower), Some(upper)) =
            (self.numeric(), bound1.numeric(), bound2.numeric())
        else {
            return false;
        };
        let (lower, upper) = ordered(lower, upper);
        if inclusive {
            value >= lower && value <= upper
        } else {
            value > lower && value < upper
        }
    }
}

/// Sorts a bound pair so the caller may pass it in either order.
fn ordered(bound1: Numeric, bound2: Numeric) -> (Numeric, Numeric) {
    if bound1 > bound2 {
        (bound2, bound1)
    } else {
        (bound1, bound2)
    }
}

/// Returns `true` if the value is `null` or `undefined`.
pub fn is_null_or_undefined(value: impl Into<Value>) -> bool {
    value.into().is_null_or_undefined()
}

/// Returns `true` if the value is absent, not a string, or the empty string.
///
/// A whitespace-only string is not empty.
pub fn is_null_undefined_or_empty(value: impl Into<Value>) -> bool {
    value.into().is_null_undefined_or_empty()
}

/// Returns `true` if the value is absent, not a string, or a string made only
/// of whitespace (including no characters at all).
pub fn is_null_undefined_or_whitespace(value: impl Into<Value>) -> bool {
    value.into().is_null_undefined_or_whitespace()
}

/// Returns `true` if the value is a `number` or `bigint` above zero.
pub fn is_positive(value: impl Into<Value>) -> bool {
    value.into().is_positive()
}

/// Returns `true` if the value is a `number` or `bigint` at or below zero.
pub fn is_not_positive(value: impl Into<Value>) -> bool {
    value.into().is_not_positive()
}

/// Returns `true` if the value is a `number` or `bigint` below zero.
pub fn is_negative(value: impl Into<Value>) -> bool {
    value.into().is_negative()
}

/// Returns `true` if the value is a `number` or `bigint` at or above zero.
pub fn is_not_negative(value: impl Into<Value>) -> bool {
    value.into().is_not_negative()
}

/// Returns `true` if the value and both bounds are numeric and the value lies
/// between the bounds, bounds included. Bound order does not matter.
pub fn is_between_inclusive(
    value: impl Into<Value>,
    bound1: impl Into<Value>,
    bound2: impl Into<Value>,
) -> bool {
    value
        .into()
        .is_between_inclusive(&bound1.into(), &bound2.into())
}

/// Returns `true` if the value and both bounds are numeric and the value lies
/// strictly between the bounds. Bound order does not matter.
pub fn is_between_exclusive(
    value: impl Into<Value>,
    bound1: impl Into<Value>,
    bound2: impl Into<Value>,
) -> bool {
    value
        .into()
        .is_between_exclusive(&bound1.into(), &bound2.into())
}

/// Returns `true` for every `bigint` and for `number`s without a fractional part.
pub fn is_integer(value: impl Into<Value>) -> bool {
    value.into().is_integer()
}

/// Returns `true` if the value is present and its runtime type is listed.
pub fn is_one_of_types(value: impl Into<Value>, types: &[TypeName]) -> bool {
    value.into().is_one_of_types(types)
}
