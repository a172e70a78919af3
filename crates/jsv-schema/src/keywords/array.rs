//! `minItems`, `maxItems`, `items` (with its `additionalItems` sibling).

use serde_json::Value;

use super::{compile_embedded, decode_bound, decode_schema_list, push, Additional};
use crate::error::{CompileError, ValidationError};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub(crate) struct MinItems(u64);

impl MinItems {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("minItems", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::Array(items) = instance {
            if (items.len() as u64) < self.0 {
                push(errors, format!("Array must have at least {} items.", self.0));
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MaxItems(u64);

impl MaxItems {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("maxItems", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::Array(items) = instance {
            if items.len() as u64 > self.0 {
                push(errors, format!("Array must have at most {} items.", self.0));
            }
        }
    }
}

/// The two shapes of `items`.
#[derive(Debug, Clone)]
pub(crate) enum Items {
    /// A single schema applied to every element.
    Uniform(Box<Schema>),
    /// Positional schemas; elements past the end fall to `additional`.
    Tuple {
        schemas: Vec<Schema>,
        additional: Additional,
    },
}

impl Items {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        match raw {
            Value::Object(_) => Ok(Self::Uniform(Box::new(compile_embedded(raw, || {
                "items".to_string()
            })?))),
            Value::Array(_) => Ok(Self::Tuple {
                schemas: decode_schema_list("items", raw)?,
                additional: Additional::Allowed,
            }),
            other => Err(CompileError::invalid(
                "items",
                format!(
                    "expected a schema or an array of schemas, found {}",
                    jsv_core::InstanceType::of(other)
                ),
            )),
        }
    }

    pub(crate) fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple { .. })
    }

    /// Attach the `additionalItems` policy. Only meaningful for tuples.
    pub(crate) fn with_additional(self, policy: Additional) -> Self {
        match self {
            Self::Tuple { schemas, .. } => Self::Tuple {
                schemas,
                additional: policy,
            },
            uniform => uniform,
        }
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Array(elements) = instance else {
            return;
        };
        match self {
            Self::Uniform(schema) => {
                for element in elements {
                    schema.validate_into(element, errors);
                }
            }
            Self::Tuple {
                schemas,
                additional,
            } => {
                let mut overflow = false;
                for (i, element) in elements.iter().enumerate() {
                    match (schemas.get(i), additional) {
                        (Some(schema), _) => schema.validate_into(element, errors),
                        (None, Additional::Schema(schema)) => schema.validate_into(element, errors),
                        (None, Additional::Forbidden) => overflow = true,
                        (None, Additional::Allowed) => {}
                    }
                }
                if overflow {
                    push(errors, "Additional items aren't allowed.");
                }
            }
        }
    }
}
