//! # Structural Equality
//!
//! Deep equality over the JSON value model, as required by `enum`.
//! `serde_json::Value`'s own `PartialEq` distinguishes `1` from `1.0`
//! because it compares representations; here numbers compare by magnitude
//! through [`Number`], and arrays and objects recurse element-wise and
//! key-wise.

use serde_json::Value;

use crate::number::Number;

/// Returns true if `left` and `right` are structurally equal.
///
/// Numbers compare with [`Number`] semantics (`1 == 1.0`). Arrays compare
/// position by position; objects compare key by key regardless of key order.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    match (Number::from_json(a), Number::from_json(b)) {
        (Ok(x), Ok(y)) => x == y,
        // Values outside the canonical domain only equal themselves.
        _ => a == b,
    }
}
