//! Keywords that hold schemas without validating: `definitions`, `$ref`,
//! and unrecognized keywords.

use std::collections::BTreeMap;

use serde_json::Value;

use super::compile_embedded;
use crate::error::CompileError;
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub(crate) struct Definitions {
    schemas: BTreeMap<String, Schema>,
}

impl Definitions {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        let Value::Object(map) = raw else {
            return Err(CompileError::invalid(
                "definitions",
                format!("expected an object of schemas, found {}", jsv_core::InstanceType::of(raw)),
            ));
        };
        let schemas = map
            .iter()
            .map(|(name, schema)| {
                compile_embedded(schema, || format!("definitions/{name}"))
                    .map(|compiled| (name.clone(), compiled))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { schemas })
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }
}

/// `$ref` is recorded but never resolved.
#[derive(Debug, Clone)]
pub(crate) struct Ref {
    target: String,
}

impl Ref {
    pub(crate) fn decode(raw: &Value) -> Result<Self, CompileError> {
        match raw {
            Value::String(target) => {
                tracing::debug!(reference = %target, "$ref is not resolved; it accepts every instance");
                Ok(Self {
                    target: target.clone(),
                })
            }
            other => Err(CompileError::invalid(
                "$ref",
                format!("expected a reference string, found {}", jsv_core::InstanceType::of(other)),
            )),
        }
    }

    pub(crate) fn target(&self) -> &str {
        &self.target
    }
}

/// An unrecognized keyword. If its value compiles as a schema, the schema
/// is kept so nested documents stay reachable; it never validates.
#[derive(Debug, Clone)]
pub(crate) struct Opaque {
    name: String,
    embedded: Option<Box<Schema>>,
}

impl Opaque {
    pub(crate) fn decode(name: &str, raw: &Value) -> Self {
        let embedded = match raw {
            Value::Object(_) => match Schema::compile(raw) {
                Ok(schema) => Some(Box::new(schema)),
                Err(e) => {
                    tracing::trace!(keyword = %name, error = %e, "opaque keyword is not a schema");
                    None
                }
            },
            _ => None,
        };
        Self {
            name: name.to_string(),
            embedded,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn embedded(&self) -> Option<&Schema> {
        self.embedded.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definitions_lookup() {
        let d = Definitions::decode(&json!({"positive": {"minimum": 0}})).unwrap();
        let positive = d.get("positive").unwrap();
        assert!(positive.is_valid(&json!(3)));
        assert!(!positive.is_valid(&json!(-3)));
        assert!(d.get("negative").is_none());
    }

    #[test]
    fn test_definitions_errors() {
        assert!(Definitions::decode(&json!([])).is_err());
        match Definitions::decode(&json!({"bad": {"type": "float"}})) {
            Err(CompileError::Embedded { location, .. }) => assert_eq!(location, "definitions/bad"),
            other => panic!("Expected Embedded, got: {other:?}"),
        }
    }

    #[test]
    fn test_ref_requires_string() {
        assert_eq!(Ref::decode(&json!("#/definitions/a")).unwrap().target(), "#/definitions/a");
        assert!(Ref::decode(&json!({"$ref": "x"})).is_err());
    }

    #[test]
    fn test_opaque_keeps_schema_values() {
        let o = Opaque::decode("x-extension", &json!({"type": "string"}));
        assert_eq!(o.name(), "x-extension");
        assert!(o.embedded().is_some());

        let o = Opaque::decode("title", &json!("A title"));
        assert!(o.embedded().is_none());

        // Not a schema, but no compile error either.
        let o = Opaque::decode("meta", &json!({"minimum": "not a number"}));
        assert!(o.embedded().is_none());
    }
}
