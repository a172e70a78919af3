//! Boolean combinators: `allOf`, `anyOf`, `oneOf`, `not`.

use serde_json::Value;

use super::{compile_embedded, decode_schema_list, push};
use crate::error::{CompileError, ValidationError};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub(crate) struct AllOf {
    schemas: Vec<Schema>,
}

impl AllOf {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            schemas: decode_schema_list("allOf", raw)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        for schema in &self.schemas {
            schema.validate_into(instance, errors);
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AnyOf {
    schemas: Vec<Schema>,
}

impl AnyOf {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            schemas: decode_schema_list("anyOf", raw)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if !self.schemas.iter().any(|s| s.is_valid(instance)) {
            push(errors, "Validation failed for each schema in 'anyOf'.");
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct OneOf {
    schemas: Vec<Schema>,
}

impl OneOf {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            schemas: decode_schema_list("oneOf", raw)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let passed = self.schemas.iter().filter(|s| s.is_valid(instance)).count();
        if passed != 1 {
            push(
                errors,
                format!("Validation passed for {passed} schemas in 'oneOf'; exactly one is required."),
            );
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Not {
    schema: Box<Schema>,
}

impl Not {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            schema: Box::new(compile_embedded(raw, || "not".to_string())?),
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if self.schema.is_valid(instance) {
            push(errors, "The 'not' schema didn't raise an error.");
        }
    }
}
