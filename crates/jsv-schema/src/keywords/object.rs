//! Object keywords: `minProperties`, `maxProperties`, `required`,
//! `properties` (with `patternProperties` and `additionalProperties` linked
//! in), standalone `patternProperties`, and `dependencies`.

use std::collections::BTreeMap;

use regex::Regex;
use serde_json::{Map, Value};

use super::{compile_embedded, decode_bound, decode_string_list, push, Additional};
use crate::error::{CompileError, ValidationError};
use crate::schema::Schema;

fn expect_object<'a>(
    keyword: &'static str,
    raw: &'a Value,
) -> Result<&'a Map<String, Value>, CompileError> {
    match raw {
        Value::Object(map) => Ok(map),
        other => Err(CompileError::invalid(
            keyword,
            format!("expected an object, found {}", jsv_core::InstanceType::of(other)),
        )),
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MinProperties(u64);

impl MinProperties {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("minProperties", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::Object(map) = instance {
            if (map.len() as u64) < self.0 {
                push(
                    errors,
                    format!("Object must have at least {} properties, found {}.", self.0, map.len()),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MaxProperties(u64);

impl MaxProperties {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        decode_bound("maxProperties", raw).map(Self)
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::Object(map) = instance {
            if map.len() as u64 > self.0 {
                push(
                    errors,
                    format!("Object must have at most {} properties, found {}.", self.0, map.len()),
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Required {
    names: Vec<String>,
}

impl Required {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        Ok(Self {
            names: decode_string_list("required", raw)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Object(map) = instance else {
            return;
        };
        for name in &self.names {
            if !map.contains_key(name) {
                push(errors, format!("Required property {name:?} is missing."));
            }
        }
    }
}

/// Compiled `patternProperties`: regex source order is the object's key order.
#[derive(Debug, Clone)]
pub(crate) struct PatternProperties {
    patterns: Vec<(Regex, Schema)>,
}

impl PatternProperties {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let map = expect_object("patternProperties", raw)?;
        let mut patterns = Vec::with_capacity(map.len());
        for (source, schema) in map {
            let regex = Regex::new(source).map_err(|e| CompileError::InvalidPattern {
                keyword: "patternProperties",
                pattern: source.clone(),
                source: e,
            })?;
            let schema = compile_embedded(schema, || format!("patternProperties/{source}"))?;
            patterns.push((regex, schema));
        }
        Ok(Self { patterns })
    }

    /// Validate `value` against every pattern matching `key`. Returns true
    /// if at least one pattern matched.
    pub(crate) fn apply(&self, key: &str, value: &Value, errors: &mut Vec<ValidationError>) -> bool {
        let mut matched = false;
        for (regex, schema) in &self.patterns {
            if regex.is_match(key) {
                matched = true;
                schema.validate_into(value, errors);
            }
        }
        matched
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        if let Value::Object(map) = instance {
            for (key, value) in map {
                self.apply(key, value, errors);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Properties {
    schemas: BTreeMap<String, Schema>,
    patterns: Option<PatternProperties>,
    additional: Additional,
}

impl Properties {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let map = expect_object("properties", raw)?;
        let schemas = map
            .iter()
            .map(|(name, schema)| {
                compile_embedded(schema, || format!("properties/{name}"))
                    .map(|compiled| (name.clone(), compiled))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self::from_parts(schemas))
    }

    /// An empty `properties`, used when only sibling keywords are present.
    pub(crate) fn empty() -> Self {
        Self::from_parts(BTreeMap::new())
    }

    fn from_parts(schemas: BTreeMap<String, Schema>) -> Self {
        Self {
            schemas,
            patterns: None,
            additional: Additional::Allowed,
        }
    }

    /// Take ownership of the sibling pattern set and the `additionalProperties` policy.
    pub(crate) fn link(self, patterns: Option<PatternProperties>, additional: Additional) -> Self {
        Self {
            patterns,
            additional,
            ..self
        }
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Object(map) = instance else {
            return;
        };
        for (key, value) in map {
            let mut matched = false;
            if let Some(schema) = self.schemas.get(key) {
                matched = true;
                schema.validate_into(value, errors);
            }
            if let Some(patterns) = &self.patterns {
                matched |= patterns.apply(key, value, errors);
            }
            if matched {
                continue;
            }
            match &self.additional {
                Additional::Allowed => {}
                Additional::Forbidden => {
                    push(errors, format!("Additional property {key:?} isn't allowed."));
                }
                Additional::Schema(schema) => schema.validate_into(value, errors),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Dependencies {
    schemas: BTreeMap<String, Schema>,
    properties: BTreeMap<String, Vec<String>>,
}

impl Dependencies {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let map = expect_object("dependencies", raw)?;
        let mut schemas = BTreeMap::new();
        let mut properties = BTreeMap::new();
        for (key, dependency) in map {
            match dependency {
                Value::Object(_) => {
                    let schema = compile_embedded(dependency, || format!("dependencies/{key}"))?;
                    schemas.insert(key.clone(), schema);
                }
                Value::Array(_) => {
                    let names = decode_string_list("dependencies", dependency)?;
                    properties.insert(key.clone(), names);
                }
                other => {
                    return Err(CompileError::invalid(
                        "dependencies",
                        format!(
                            "dependency {key:?} must be a schema or an array of property names, found {}",
                            jsv_core::InstanceType::of(other)
                        ),
                    ));
                }
            }
        }
        Ok(Self {
            schemas,
            properties,
        })
    }

    pub(crate) fn validate(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        let Value::Object(map) = instance else {
            return;
        };
        for key in map.keys() {
            if let Some(schema) = self.schemas.get(key) {
                schema.validate_into(instance, errors);
            }
            if let Some(names) = self.properties.get(key) {
                for name in names.iter().filter(|n| !map.contains_key(n.as_str())) {
                    push(errors, format!("Property {key:?} requires property {name:?}."));
                }
            }
        }
    }
}
