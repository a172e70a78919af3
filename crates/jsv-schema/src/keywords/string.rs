//! `minLength`, `maxLength`, `pattern`, `format`.
//!
//! String length is counted in Unicode scalar values, so `"héllo"` has
//! length 5 even though it is six bytes long.

use regex::Regex;
use serde_json::Value;

use super::{decode_bound, push};
use crate::error::{CompileError, ValidationError};
use crate::format::Format;

fn char_count(s: &str) -> u64 {
    s.chars().count() as u64
}

#[derive(Debug, Clone)]
pub(crate) struct MinLength(u64);

impl MinLength {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("minLength", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::String(s) = instance {
            if char_count(s) < self.0 {
                push(
                    errors,
                    format!("String length must be at least {} characters.", self.0),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MaxLength(u64);

impl MaxLength {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("maxLength", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::String(s) = instance {
            if char_count(s) > self.0 {
                push(
                    errors,
                    format!("String length must be at most {} characters.", self.0),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let Value::String(source) = raw else {
            return Err(CompileError::invalid("pattern", "expected a regular expression string"));
        };
        let regex = Regex::new(source).map_err(|source_err| CompileError::InvalidPattern {
            keyword: "pattern",
            pattern: source.clone(),
            source: source_err,
        })?;
        Ok(Self { regex })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::String(s) = instance {
            if !self.regex.is_match(s) {
                push(
                    errors,
                    format!("String must match the pattern: \"{}\".", self.regex.as_str()),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FormatKeyword {
    format: Format,
}

impl FormatKeyword {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let Value::String(name) = raw else {
            return Err(CompileError::invalid("format", "expected a format name string"));
        };
        let format = Format::from_name(name);
        if format.is_unknown() {
            tracing::debug!(format = %name, "unrecognized format accepts every string");
        }
        Ok(Self { format })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::String(s) = instance {
            if !self.format.is_valid(s) {
                push(errors, self.format.violation());
            }
        }
    }
}
