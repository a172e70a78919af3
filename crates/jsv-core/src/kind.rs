//! # Instance Kinds
//!
//! The seven draft-04 primitive type names and the mapping from a decoded
//! value to its kind. A number is `integer` when it was decoded from an
//! integer literal (held as `i64`/`u64`) and `number` otherwise, so `1.0`
//! is a `number`. The `number` type name also accepts `integer` instances.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A draft-04 primitive type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    /// JSON `null`.
    Null,
    /// JSON `true` / `false`.
    Boolean,
    /// Number decoded from an integer literal.
    Integer,
    /// Any number; superset of `integer` when used as a type constraint.
    Number,
    /// JSON string.
    String,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl InstanceType {
    /// All type names, in declaration order.
    pub const ALL: [InstanceType; 7] = [
        Self::Null,
        Self::Boolean,
        Self::Integer,
        Self::Number,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Classify an instance value.
    ///
    /// A number is [`InstanceType::Integer`] only when serde_json holds it
    /// as `i64`/`u64`. Any literal with a fraction or an exponent (`1.0`,
    /// `1e2`) is held as `f64` and classifies as [`InstanceType::Number`].
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_f64() => Self::Number,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Look up a type by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// The schema name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Returns true if an instance of kind `actual` satisfies this type name.
    pub fn accepts(&self, actual: InstanceType) -> bool {
        *self == actual || (*self == Self::Number && actual == Self::Integer)
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification() {
        assert_eq!(InstanceType::of(&json!(null)), InstanceType::Null);
        assert_eq!(InstanceType::of(&json!(false)), InstanceType::Boolean);
        assert_eq!(InstanceType::of(&json!(3)), InstanceType::Integer);
        assert_eq!(InstanceType::of(&json!(u64::MAX)), InstanceType::Integer);
        assert_eq!(InstanceType::of(&json!(3.5)), InstanceType::Number);
        assert_eq!(InstanceType::of(&json!("s")), InstanceType::String);
        assert_eq!(InstanceType::of(&json!([])), InstanceType::Array);
        assert_eq!(InstanceType::of(&json!({})), InstanceType::Object);
    }

    #[test]
    fn test_float_literal_is_number_not_integer() {
        let value: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(InstanceType::of(&value), InstanceType::Number);
    }

    #[test]
    fn test_number_accepts_integer_but_not_vice_versa() {
        assert!(InstanceType::Number.accepts(InstanceType::Integer));
        assert!(InstanceType::Number.accepts(InstanceType::Number));
        assert!(!InstanceType::Integer.accepts(InstanceType::Number));
        assert!(!InstanceType::String.accepts(InstanceType::Integer));
    }

    #[test]
    fn test_names_round_trip() {
        for t in InstanceType::ALL {
            assert_eq!(InstanceType::from_name(t.as_str()), Some(t));
        }
        assert_eq!(InstanceType::from_name("any"), None);
        assert_eq!(InstanceType::from_name("Integer"), None);
    }

    #[test]
    fn test_serde_uses_schema_names() {
        assert_eq!(serde_json::to_value(InstanceType::Boolean).unwrap(), json!("boolean"));
        let t: InstanceType = serde_json::from_value(json!("object")).unwrap();
        assert_eq!(t, InstanceType::Object);
    }
}
