//! `enum` and `type`.

use jsv_core::{values_equal, InstanceType};
use serde_json::Value;

use super::push;
use crate::error::{CompileError, ValidationError};

#[derive(Debug, Clone)]
pub(crate) struct Enum {
    values: Vec<Value>,
    /// Rendered once at decode time for the violation message.
    listing: String,
}

impl Enum {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let Value::Array(values) = raw else {
            return Err(CompileError::invalid(
                "enum",
                format!("expected an array of values, found {}", InstanceType::of(raw)),
            ));
        };
        Ok(Self {
            values: values.clone(),
            listing: raw.to_string(),
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if !self.values.iter().any(|v| values_equal(v, instance)) {
            push(errors, format!("Value must be one of {}.", self.listing));
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Type {
    allowed: Vec<InstanceType>,
}

impl Type {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let names: Vec<&str> = match raw {
            Value::String(name) => vec![name.as_str()],
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        CompileError::invalid("type", format!("expected a type name, found {item}"))
                    })
                })
                .collect::<Result<_, _>>()?,
            other => {
                return Err(CompileError::invalid(
                    "type",
                    format!(
                        "expected a type name or an array of type names, found {}",
                        InstanceType::of(other)
                    ),
                ));
            }
        };
        let mut allowed = Vec::with_capacity(names.len());
        for name in names {
            let t = InstanceType::from_name(name)
                .ok_or_else(|| CompileError::invalid("type", format!("unknown type name {name:?}")))?;
            if !allowed.contains(&t) {
                allowed.push(t);
            }
        }
        Ok(Self { allowed })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let actual = InstanceType::of(instance);
        if !self.allowed.iter().any(|t| t.accepts(actual)) {
            let names: Vec<&str> = self.allowed.iter().map(InstanceType::as_str).collect();
            push(
                errors,
                format!("Value must be one of these types: {names:?}, found {actual}."),
            );
        }
    }
}
