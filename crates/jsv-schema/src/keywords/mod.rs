//! Keyword validators, one module per keyword family.
//!
//! Every validator type has a `decode(raw)` constructor that either builds
//! the validator from the keyword's raw value or fails with a
//! [`CompileError`], and a `validate(instance, errors)` method that appends
//! one [`ValidationError`](crate::ValidationError) per violation. Validators
//! that do not apply to an instance's kind append nothing.

pub(crate) mod array;
pub(crate) mod combinator;
pub(crate) mod container;
pub(crate) mod literal;
pub(crate) mod numeric;
pub(crate) mod object;
pub(crate) mod string;

use serde_json::Value;

use crate::error::{CompileError, ValidationError};
use crate::schema::Schema;

/// Compile an embedded schema, tagging failures with where it sits.
pub(crate) fn compile_embedded(
    raw: &Value,
    location: impl FnOnce() -> String,
) -> Result<Schema, CompileError> {
    Schema::compile(raw).map_err(|e| CompileError::embedded(location(), e))
}

/// Decode an array of embedded schemas (`allOf`, `anyOf`, `oneOf`, tuple `items`).
pub(crate) fn decode_schema_list(
    keyword: &'static str,
    raw: &Value,
) -> Result<Vec<Schema>, CompileError> {
    let Value::Array(items) = raw else {
        return Err(CompileError::invalid(keyword, "expected an array of schemas"));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| compile_embedded(item, || format!("{keyword}/{i}")))
        .collect()
}

/// Decode a size bound (`minLength`, `maxItems`, `minProperties`, ...).
pub(crate) fn decode_bound(keyword: &'static str, raw: &Value) -> Result<u64, CompileError> {
    match raw {
        Value::Number(n) => n.as_u64().ok_or_else(|| match n.as_i64() {
            Some(negative) => CompileError::invalid(
                keyword,
                format!("bound cannot be smaller than zero, found {negative}"),
            ),
            None => CompileError::invalid(keyword, format!("expected an integer, found {n}")),
        }),
        other => Err(CompileError::invalid(
            keyword,
            format!("expected a non-negative integer, found {}", jsv_core::InstanceType::of(other)),
        )),
    }
}

/// Decode an array of strings, dropping duplicates but keeping first-seen order.
pub(crate) fn decode_string_list(
    keyword: &'static str,
    raw: &Value,
) -> Result<Vec<String>, CompileError> {
    let Value::Array(items) = raw else {
        return Err(CompileError::invalid(keyword, "expected an array of strings"));
    };
    let mut names: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let Value::String(name) = item else {
            return Err(CompileError::invalid(
                keyword,
                format!("expected an array of strings, found element {item}"),
            ));
        };
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    Ok(names)
}

/// Policy for values not covered by a sibling keyword: overflow elements
/// for tuple `items`, unmatched keys for `properties`.
#[derive(Debug, Clone)]
pub(crate) enum Additional {
    /// Absent or `true`: anything goes.
    Allowed,
    /// `false`: any additional value is a violation.
    Forbidden,
    /// Additional values must satisfy this schema.
    Schema(Box<Schema>),
}

impl Additional {
    /// Read `additionalItems` / `additionalProperties` from the sibling fragment.
    pub(crate) fn decode(keyword: &'static str, raw: Option<&Value>) -> Result<Self, CompileError> {
        match raw {
            None | Some(Value::Bool(true)) => Ok(Self::Allowed),
            Some(Value::Bool(false)) => Ok(Self::Forbidden),
            Some(raw @ Value::Object(_)) => Ok(Self::Schema(Box::new(compile_embedded(raw, || {
                keyword.to_string()
            })?))),
            Some(other) => Err(CompileError::invalid(
                keyword,
                format!("expected a boolean or a schema, found {}", jsv_core::InstanceType::of(other)),
            )),
        }
    }
}

pub(crate) fn push(errors: &mut Vec<ValidationError>, description: impl Into<String>) {
    errors.push(ValidationError::new(description));
}
