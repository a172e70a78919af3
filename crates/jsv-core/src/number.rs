//! # Numeric Normalization
//!
//! A decoded JSON number can arrive as `u64`, `i64`, or `f64` depending on
//! its literal. Keywords such as `minimum`, `maximum`, `multipleOf`, and
//! `enum` must compare numbers by magnitude, not by representation, so every
//! number is first normalized into [`Number`]:
//!
//! - integers that fit `i64` become [`Number::Int`];
//! - finite floats become [`Number::Float`];
//! - unsigned integers above `i64::MAX` are rejected with
//!   [`NumberError::UnsignedOutOfRange`].
//!
//! Comparison across the two cases is exact. An `i64` is never rounded
//! through `f64` when the float it is compared with lies in the `i64` range,
//! so `9007199254740993` is correctly greater than `9007199254740992.0`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NumberError;

/// Every `f64` at or above 2^63 exceeds every `i64`; 2^63 itself is exact.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Canonical numeric value: a signed 64-bit integer or a finite 64-bit float.
///
/// `PartialEq` and `PartialOrd` compare by magnitude across variants:
/// `Number::Int(1) == Number::Float(1.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer literal that fits `i64`.
    Int(i64),
    /// Any other finite number.
    Float(f64),
}

impl Number {
    /// Normalize a `serde_json::Number`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::UnsignedOutOfRange`] for unsigned values above
    /// `i64::MAX`, and [`NumberError::Unrepresentable`] if the number has no
    /// finite float form.
    pub fn from_json(n: &serde_json::Number) -> Result<Self, NumberError> {
        if let Some(i) = n.as_i64() {
            return Ok(Self::Int(i));
        }
        if let Some(u) = n.as_u64() {
            return Err(NumberError::UnsignedOutOfRange(u));
        }
        match n.as_f64() {
            Some(f) if f.is_finite() => Ok(Self::Float(f)),
            _ => Err(NumberError::Unrepresentable(n.to_string())),
        }
    }

    /// Normalize a JSON value if it is a number.
    ///
    /// Returns `None` for non-numeric values, which numeric keywords treat as
    /// "not applicable".
    pub fn from_value(value: &Value) -> Option<Result<Self, NumberError>> {
        match value {
            Value::Number(n) => Some(Self::from_json(n)),
            _ => None,
        }
    }

    /// The integer value, if this number normalized to [`Number::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(_) => None,
        }
    }

    /// The value as a float. Lossy for integers beyond 2^53.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// Returns true if this number normalized to [`Number::Int`].
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl TryFrom<&serde_json::Number> for Number {
    type Error = NumberError;

    fn try_from(n: &serde_json::Number) -> Result<Self, Self::Error> {
        Self::from_json(n)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Exact comparison of an integer against a float.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    // `whole` is integral and inside [-2^63, 2^63), so the cast is exact.
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        other => Some(other),
    }
}
