//! Dynamic value model accepted by every check.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::numeric::Numeric;

/// Any value a caller may hand to a check.
///
/// `Null` and `Undefined` are the two absent forms. Only `String` is textual
/// and only `Number` and `BigInt` are numeric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Explicit "no value".
    Null,
    /// Uninitialized value.
    #[default]
    Undefined,
    /// Boolean.
    Bool(bool),
    /// Fixed precision number.
    Number(f64),
    /// Arbitrary precision integer.
    BigInt(i128),
    /// Text.
    String(String),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Keyed record of values.
    Object(BTreeMap<String, Value>),
}

/// Runtime type names reported by [`Value::type_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `bigint`
    BigInt,
    /// `string`
    String,
    /// `object`, shared by arrays and records.
    Object,
}

impl TypeName {
    /// Returns the lowercase runtime name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeName::Boolean => "boolean",
            TypeName::Number => "number",
            TypeName::BigInt => "bigint",
            TypeName::String => "string",
            TypeName::Object => "object",
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns `true` for either absent form.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Runtime type name, or `None` for absent values.
    pub fn type_name(&self) -> Option<TypeName> {
        match self {
            Value::Null | Value::Undefined => None,
            Value::Bool(_) => Some(TypeName::Boolean),
            Value::Number(_) => Some(TypeName::Number),
            Value::BigInt(_) => Some(TypeName::BigInt),
            Value::String(_) => Some(TypeName::String),
            Value::Array(_) | Value::Object(_) => Some(TypeName::Object),
        }
    }

    /// Borrows the text of a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of `Number` and `BigInt` values.
    pub fn as_numeric(&self) -> Option<Numeric> {
        match *self {
            Value::Number(x) => Some(Numeric::Float(x)),
            Value::BigInt(n) => Some(Numeric::BigInt(n)),
            _ => None,
        }
    }
}

/// Trims whitespace the way ECMAScript `String.prototype.trim` does.
pub(crate) fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Renders values the way string interpolation would, without ever failing.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(x) => write_number(*x, f),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_absent() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

fn write_number(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&x.abs()) {
        return write!(f, "{x}");
    }
    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Number(f64::from(v))
            }
        })*
    };
}

macro_rules! from_bigint {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::BigInt(v as i128)
            }
        })*
    };
}

from_number!(f32, f64, i8, i16, i32, u8, u16, u32);
from_bigint!(i64, u64, i128, isize, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
