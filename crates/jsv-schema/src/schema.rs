//! # Compiled Schemas
//!
//! A [`Schema`] is the immutable result of compiling a schema document:
//! a flat list of linked keyword validators in evaluation order. Embedded
//! schemas are owned by the validator that decoded them, so a compiled
//! schema is a strict tree with no shared or cyclic state.
//!
//! ## Compilation
//!
//! 1. **Decode.** Each keyword of the document is decoded on its own. Any
//!    malformed keyword, at any depth, aborts with a [`CompileError`].
//! 2. **Link.** Keywords that depend on siblings (`exclusiveMinimum`,
//!    `additionalItems`, `patternProperties`, ...) are combined.
//!
//! ## Validation
//!
//! [`Schema::validate`] runs every top-level validator, concatenating their
//! errors. Validation never stops early and never fails: an empty list
//! means the instance is valid.

use std::io::Read;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CompileError, ValidationError, ValidationReport};
use crate::keyword::{DecodedKeywords, Keyword};
use crate::link::link;

/// A compiled draft-04 JSON Schema.
#[derive(Debug, Clone)]
pub struct Schema {
    keywords: Vec<Keyword>,
}

impl Schema {
    /// Compile a schema document.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NotAnObject`] if `document` is not a JSON
    /// object, or the first structural error found while decoding or linking
    /// its keywords.
    pub fn compile(document: &Value) -> Result<Self, CompileError> {
        let Value::Object(map) = document else {
            return Err(CompileError::NotAnObject {
                found: jsv_core::InstanceType::of(document),
            });
        };
        let decoded = DecodedKeywords::decode_all(map)?;
        let keywords = link(decoded, map)?;
        tracing::trace!(keywords = keywords.len(), "compiled schema object");
        Ok(Self { keywords })
    }

    /// Read a JSON schema document from `reader` and compile it.
    ///
    /// A failing reader yields [`CompileError::Io`]; text that is not JSON
    /// yields [`CompileError::Json`].
    pub fn from_reader(reader: impl Read) -> Result<Self, CompileError> {
        let document: Value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CompileError::Io(e.into())
            } else {
                CompileError::Json(e)
            }
        })?;
        let schema = Self::compile(&document)?;
        tracing::debug!(keywords = ?schema.keyword_names(), "compiled schema document");
        Ok(schema)
    }

    /// Validate `instance`, returning every violation in evaluation order.
    pub fn validate(&self, instance: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.validate_into(instance, &mut errors);
        errors
    }

    /// Append every violation of this schema by `instance` to `errors`.
    pub(crate) fn validate_into(&self, instance: &Value, errors: &mut Vec<ValidationError>) {
        for keyword in &self.keywords {
            keyword.validate(instance, errors);
        }
    }

    /// Returns true if `instance` produces no validation errors.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_empty()
    }

    /// Validate `instance`, turning a non-empty error list into an `Err`.
    pub fn check(&self, instance: &Value) -> Result<(), ValidationReport> {
        let errors = self.validate(instance);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::new(errors))
        }
    }

    /// Serialize `value` into the JSON value model and validate it.
    ///
    /// # Errors
    ///
    /// Fails only if `value` cannot be represented as JSON (for example a
    /// map with non-string keys).
    pub fn validate_serializable<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<Vec<ValidationError>, serde_json::Error> {
        let instance = serde_json::to_value(value)?;
        Ok(self.validate(&instance))
    }

    /// Names of the compiled keywords, in evaluation order. Unrecognized
    /// keywords come last.
    pub fn keyword_names(&self) -> Vec<&str> {
        self.keywords.iter().map(Keyword::name).collect()
    }

    /// Number of compiled keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true for a schema with no keywords, which accepts everything.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Look up a schema declared under `definitions`.
    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.keywords.iter().find_map(|k| match k {
            Keyword::Definitions(d) => d.get(name),
            _ => None,
        })
    }

    /// The schema carried by an unrecognized keyword, if its value compiled as one.
    pub fn extension(&self, keyword: &str) -> Option<&Schema> {
        self.keywords.iter().find_map(|k| match k {
            Keyword::Opaque(o) if o.name() == keyword => o.embedded(),
            _ => None,
        })
    }

    /// The unresolved `$ref` target, if present.
    pub fn reference(&self) -> Option<&str> {
        self.keywords.iter().find_map(|k| match k {
            Keyword::Ref(r) => Some(r.target()),
            _ => None,
        })
    }
}

impl FromStr for Schema {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compile(doc: Value) -> Schema {
        Schema::compile(&doc).unwrap()
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }

    #[test]
    fn test_non_object_schema_rejected() {
        match Schema::compile(&json!([])) {
            Err(CompileError::NotAnObject { found }) => {
                assert_eq!(found, jsv_core::InstanceType::Array)
            }
            other => panic!("Expected NotAnObject, got: {other:?}"),
        }
        assert!(Schema::compile(&json!({"not": true})).is_err());
    }

    #[test]
    fn test_empty_schema_accepts_everything() {
        let s = compile(json!({}));
        assert!(s.is_empty());
        for v in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(s.is_valid(&v));
        }
    }

    #[test]
    fn test_errors_follow_keyword_order() {
        let s = compile(json!({"type": "integer", "maximum": 3, "multipleOf": 2}));
        let messages: Vec<_> = s
            .validate(&json!(5.5))
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(
            messages,
            [
                "Value must be less than or equal to 3.",
                "Value must be one of these types: [\"integer\"], found number."
            ]
        );
    }

    #[test]
    fn test_every_applicable_keyword_runs() {
        let s = compile(json!({"minLength": 5, "pattern": "^[0-9]+$", "format": "email"}));
        assert_eq!(s.validate(&json!("ab")).len(), 3);
    }

    #[test]
    fn test_check_wraps_errors() {
        let s = compile(json!({"required": ["a", "b"]}));
        assert!(s.check(&json!({"a": 1, "b": 2})).is_ok());
        let report = s.check(&json!({})).unwrap_err();
        assert_eq!(report.len(), 2);
        let errors = report.into_inner();
        assert_eq!(errors[0].to_string(), "Required property \"a\" is missing.");
    }

    #[test]
    fn test_from_str_and_reader() {
        let s: Schema = r#"{"type": "string"}"#.parse().unwrap();
        assert!(s.is_valid(&json!("x")));
        let s = Schema::from_reader(&b"{\"minimum\": 0}"[..]).unwrap();
        assert!(!s.is_valid(&json!(-1)));
        assert!(matches!("{".parse::<Schema>(), Err(CompileError::Json(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_reader_failure_is_io_error() {
        let err = Schema::from_reader(FailingReader).unwrap_err();
        match err {
            CompileError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io, got: {other:?}"),
        }
    }

    #[test]
    fn test_validate_serializable() {
        #[derive(Serialize)]
        struct Person {
            name: String,
            age: i64,
        }
        let s = compile(json!({
            "properties": {"age": {"minimum": 0}},
            "required": ["name", "email"]
        }));
        let errors = s
            .validate_serializable(&Person {
                name: "Ada".into(),
                age: -1,
            })
            .unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_definitions_extension_and_ref() {
        let s = compile(json!({
            "definitions": {"name": {"type": "string"}},
            "x-form": {"minLength": 2},
            "$ref": "#/definitions/name"
        }));
        assert!(s.definition("name").unwrap().is_valid(&json!("a")));
        assert!(s.definition("missing").is_none());
        assert!(!s.extension("x-form").unwrap().is_valid(&json!("a")));
        assert_eq!(s.reference(), Some("#/definitions/name"));
        // Neither definitions nor $ref validate anything.
        assert!(s.is_valid(&json!(42)));
    }

    #[test]
    fn test_keyword_names() {
        let s = compile(json!({"title": "t", "type": "object", "properties": {}}));
        assert_eq!(s.keyword_names(), ["properties", "type", "title"]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_embedded_errors_carry_location() {
        let err = Schema::compile(&json!({
            "properties": {"tags": {"items": [{"type": "bogus"}]}}
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "at `properties/tags`: at `items/0`: invalid `type`: unknown type name \"bogus\""
        );
    }
}
