//! `minimum`, `maximum`, `multipleOf`.
//!
//! Bounds are normalized into [`Number`] at decode time and instances at
//! validation time, so `minimum: 1` treats `1` and `1.0` alike. The
//! `exclusive` flags come from the sibling `exclusiveMinimum` /
//! `exclusiveMaximum` keywords and are set by the linker.

use jsv_core::Number;
use serde_json::Value;

use super::push;
use crate::error::{CompileError, ValidationError};

fn decode_number(keyword: &'static str, raw: &Value) -> Result<Number, CompileError> {
    match Number::from_value(raw) {
        Some(Ok(n)) => Ok(n),
        Some(Err(e)) => Err(CompileError::invalid(keyword, e.to_string())),
        None => Err(CompileError::invalid(
            keyword,
            format!("expected a number, found {}", jsv_core::InstanceType::of(raw)),
        )),
    }
}

/// Normalize a numeric instance; normalization failures are reported, not skipped.
fn instance_number(instance: &Value, errors: &mut Vec<ValidationError>) -> Option<Number> {
    match Number::from_value(instance)? {
        Ok(n) => Some(n),
        Err(e) => {
            push(errors, e.to_string());
            None
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Minimum {
    bound: Number,
    exclusive: bool,
}

impl Minimum {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            bound: decode_number("minimum", raw)?,
            exclusive: false,
        })
    }

    pub(crate) fn with_exclusive(self, exclusive: bool) -> Self {
        Self { exclusive, ..self }
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Some(n) = instance_number(instance, errors) else {
            return;
        };
        if self.exclusive && n <= self.bound {
            push(errors, format!("Value must be greater than {}.", self.bound));
        } else if n < self.bound {
            push(
                errors,
                format!("Value must be greater than or equal to {}.", self.bound),
            );
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Maximum {
    bound: Number,
    exclusive: bool,
}

impl Maximum {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            bound: decode_number("maximum", raw)?,
            exclusive: false,
        })
    }

    pub(crate) fn with_exclusive(self, exclusive: bool) -> Self {
        Self { exclusive, ..self }
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Some(n) = instance_number(instance, errors) else {
            return;
        };
        if self.exclusive && n >= self.bound {
            push(errors, format!("Value must be less than {}.", self.bound));
        } else if n > self.bound {
            push(
                errors,
                format!("Value must be less than or equal to {}.", self.bound),
            );
        }
    }
}

/// Integer divisibility only: float remainders are unreliable for exact
/// fractional divisors (`0.0075 % 0.0001 != 0`), so float instances are
/// skipped.
#[derive(Debug, Clone)]
pub(crate) struct MultipleOf {
    divisor: i64,
}

impl MultipleOf {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        match raw.as_i64() {
            Some(divisor) if divisor > 0 => Ok(Self { divisor }),
            _ => Err(CompileError::invalid(
                "multipleOf",
                format!("expected a positive integer, found {raw}"),
            )),
        }
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Some(Number::Int(n)) = instance_number(instance, errors) else {
            return;
        };
        if n % self.divisor != 0 {
            push(
                errors,
                format!("Value must be a multiple of {}.", self.divisor),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run_min(schema: &Value, exclusive: bool, instance: Value) -> Vec<ValidationError> {
        let m = Minimum::decode(schema).unwrap().with_exclusive(exclusive);
        let mut errors = Vec::new();
        m.validate(&instance, &mut errors);
        errors
    }

    fn run_max(schema: &Value, exclusive: bool, instance: Value) -> Vec<ValidationError> {
        let m = Maximum::decode(schema).unwrap().with_exclusive(exclusive);
        let mut errors = Vec::new();
        m.validate(&instance, &mut errors);
        errors
    }

    #[test]
    fn test_minimum_inclusive() {
        assert!(run_min(&json!(1), false, json!(1)).is_empty());
        assert!(run_min(&json!(1), false, json!(1.0)).is_empty());
        assert!(run_min(&json!(1), false, json!(2)).is_empty());
        let errors = run_min(&json!(1), false, json!(0.999));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].description, "Value must be greater than or equal to 1.");
    }

    #[test]
    fn test_minimum_exclusive() {
        let errors = run_min(&json!(1), true, json!(1));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].description, "Value must be greater than 1.");
        assert_eq!(run_min(&json!(1), true, json!(1.0)).len(), 1);
        assert!(run_min(&json!(1), true, json!(1.000_1)).is_empty());
    }

    #[test]
    fn test_minimum_float_bound() {
        assert!(run_min(&json!(1.5), false, json!(2)).is_empty());
        assert_eq!(run_min(&json!(1.5), false, json!(1)).len(), 1);
    }

    #[test]
    fn test_maximum() {
        assert!(run_max(&json!(10), false, json!(10)).is_empty());
        assert_eq!(run_max(&json!(10), false, json!(10.5)).len(), 1);
        assert_eq!(run_max(&json!(10), true, json!(10)).len(), 1);
        assert!(run_max(&json!(10), true, json!(9.99)).is_empty());
    }

    #[test]
    fn test_bounds_skip_non_numbers() {
        assert!(run_min(&json!(5), false, json!("1")).is_empty());
        assert!(run_max(&json!(5), false, json!([10])).is_empty());
        assert!(run_max(&json!(5), false, json!(null)).is_empty());
    }

    #[test]
    fn test_out_of_range_instance_is_reported() {
        let errors = run_max(&json!(5), false, json!(u64::MAX));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].description.contains("exceeds the supported signed 64-bit range"));
    }

    #[test]
    fn test_bound_must_be_numeric() {
        assert!(Minimum::decode(&json!("1")).is_err());
        assert!(Maximum::decode(&json!(null)).is_err());
        assert!(Maximum::decode(&json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_multiple_of() {
        let m = MultipleOf::decode(&json!(3)).unwrap();
        let mut errors = Vec::new();
        m.validate(&json!(9), &mut errors);
        m.validate(&json!(-6), &mut errors);
        m.validate(&json!(0), &mut errors);
        assert!(errors.is_empty());
        m.validate(&json!(10), &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].description, "Value must be a multiple of 3.");
    }

    #[test]
    fn test_multiple_of_skips_floats() {
        let m = MultipleOf::decode(&json!(3)).unwrap();
        let mut errors = Vec::new();
        m.validate(&json!(9.0), &mut errors);
        m.validate(&json!(10.5), &mut errors);
        m.validate(&json!("10"), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_multiple_of_requires_positive_integer() {
        assert!(MultipleOf::decode(&json!(0)).is_err());
        assert!(MultipleOf::decode(&json!(-3)).is_err());
        assert!(MultipleOf::decode(&json!(0.5)).is_err());
        assert!(MultipleOf::decode(&json!("3")).is_err());
    }
}
