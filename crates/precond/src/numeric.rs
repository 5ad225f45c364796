//! Closed numeric view used by the sign, range and integer checks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// 2^127, the first magnitude a `f64` can hold that no `i128` reaches.
const I128_EDGE: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Numeric payload of a [`Value`](crate::Value).
///
/// Comparisons between the two variants are exact: a large `BigInt` is never
/// rounded through `f64`. `NaN` is unordered against everything, so every
/// ordering test involving it is false.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Numeric {
    /// Fixed precision number.
    Float(f64),
    /// Arbitrary precision integer.
    BigInt(i128),
}

impl Numeric {
    /// Numeric zero used as the pivot of the sign checks.
    pub const ZERO: Numeric = Numeric::BigInt(0);

    /// Returns `true` for every `BigInt` and for floats without a fractional part.
    pub fn is_integer(&self) -> bool {
        match *self {
            Numeric::Float(x) => x.floor() == x,
            Numeric::BigInt(_) => true,
        }
    }

    /// Orders two numerics, returning `None` when either side is `NaN`.
    pub fn compare(&self, other: &Numeric) -> Option<Ordering> {
        match (*self, *other) {
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a.cmp(&b)),
            (Numeric::Float(a), Numeric::BigInt(b)) => float_against_int(a, b),
            (Numeric::BigInt(a), Numeric::Float(b)) => {
                float_against_int(b, a).map(Ordering::reverse)
            }
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

fn float_against_int(x: f64, n: i128) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if x >= I128_EDGE {
        return Some(Ordering::Greater);
    }
    if x < -I128_EDGE {
        return Some(Ordering::Less);
    }
    // In range, so the truncation is exact.
    let whole = x.trunc();
    match (whole as i128).cmp(&n) {
        Ordering::Equal => (x - whole).partial_cmp(&0.0),
        ord => Some(ord),
    }
}
