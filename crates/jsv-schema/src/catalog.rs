//! # Schema Catalog
//!
//! A directory of schema documents compiled up front and validated against
//! by name. Every `*.schema.json` file in the directory is compiled at
//! construction; a single malformed schema fails the whole catalog.
//!
//! Instance documents are read from disk as JSON, or as YAML when the file
//! extension is `.yaml` / `.yml`. YAML is deserialized straight into the
//! JSON value model, so integers stay integers and tagged values are
//! rejected.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CatalogError, ValidationReport};
use crate::schema::Schema;

const SCHEMA_SUFFIX: &str = ".schema.json";

/// Compiled schemas loaded from one directory, indexed by file name.
///
/// `SchemaCatalog` is `Send + Sync`; schemas are compiled once in
/// [`SchemaCatalog::new`] and only read afterwards.
#[derive(Debug)]
pub struct SchemaCatalog {
    /// Directory the schemas were loaded from.
    schema_dir: PathBuf,
    /// File name (e.g. `"person.schema.json"`) to compiled schema.
    schemas: BTreeMap<String, Schema>,
}

impl SchemaCatalog {
    /// Load and compile every `*.schema.json` file in `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SchemaLoad`] if the directory cannot be read,
    /// or if any schema file is not valid JSON or fails to compile.
    pub fn new(schema_dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = BTreeMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| CatalogError::SchemaLoad {
            schema_name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping catalog entry with a non-UTF-8 name");
                continue;
            };
            if !name.ends_with(SCHEMA_SUFFIX) || !path.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let schema = content.parse::<Schema>().map_err(|e| CatalogError::SchemaLoad {
                schema_name: name.to_string(),
                reason: e.to_string(),
            })?;
            schemas.insert(name.to_string(), schema);
        }

        tracing::info!(
            dir = %schema_dir.display(),
            count = schemas.len(),
            "loaded schema catalog"
        );
        Ok(Self {
            schema_dir,
            schemas,
        })
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Returns the number of loaded schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the names of all loaded schemas, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    /// Look up a schema by file name. The `.schema.json` suffix may be
    /// omitted: `"person"` finds `person.schema.json`.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas
            .get(name)
            .or_else(|| self.schemas.get(&format!("{name}{SCHEMA_SUFFIX}")))
    }

    fn require(&self, schema_name: &str) -> Result<&Schema, CatalogError> {
        self.get(schema_name)
            .ok_or_else(|| CatalogError::SchemaNotFound {
                schema_name: schema_name.to_string(),
                dir: self.schema_dir.display().to_string(),
            })
    }

    /// Validate a parsed document against a named schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SchemaNotFound`] for an unknown name and
    /// [`CatalogError::ValidationFailed`] carrying every error if the
    /// document does not conform.
    pub fn validate_document(&self, instance: &Value, schema_name: &str) -> Result<(), CatalogError> {
        self.require(schema_name)?
            .check(instance)
            .map_err(|report: ValidationReport| CatalogError::ValidationFailed {
                schema_name: schema_name.to_string(),
                report,
            })
    }

    /// Load a JSON or YAML document from disk and validate it against a
    /// named schema.
    pub fn validate_file(&self, document_path: &Path, schema_name: &str) -> Result<(), CatalogError> {
        let schema = self.require(schema_name)?;
        let instance = load_document(document_path)?;
        schema
            .check(&instance)
            .map_err(|report| CatalogError::ValidationFailed {
                schema_name: format!("{schema_name} ({})", document_path.display()),
                report,
            })
    }
}

/// Read a JSON or YAML document (by extension) into the JSON value model.
///
/// # Errors
///
/// Returns [`CatalogError::DocumentLoad`] if the file cannot be read,
/// does not parse, or holds YAML with no JSON equivalent (tags, for
/// example).
pub fn load_document(path: &Path) -> Result<Value, CatalogError> {
    let load_error = |reason: String| CatalogError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    };
    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| load_error(format!("invalid YAML: {e}")))
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn catalog_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("person.schema.json"),
            r#"{
                "type": "object",
                "properties": {"name": {"type": "string"}, "age": {"type": "integer", "minimum": 0}},
                "required": ["name"],
                "additionalProperties": false
            }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("tag.schema.json"), r#"{"type": "string", "maxLength": 8}"#)
            .unwrap();
        std::fs::write(dir.path().join("README.md"), "not a schema").unwrap();
        dir
    }

    #[test]
    fn test_loads_only_schema_files() {
        let dir = catalog_dir();
        let catalog = SchemaCatalog::new(dir.path()).unwrap();
        assert_eq!(catalog.schema_count(), 2);
        assert_eq!(catalog.schema_names(), ["person.schema.json", "tag.schema.json"]);
        assert_eq!(catalog.schema_dir(), dir.path());
    }

    #[test]
    fn test_get_accepts_short_name() {
        let dir = catalog_dir();
        let catalog = SchemaCatalog::new(dir.path()).unwrap();
        assert!(catalog.get("person").is_some());
        assert!(catalog.get("person.schema.json").is_some());
        assert!(catalog.get("animal").is_none());
    }

    #[test]
    fn test_validate_document() {
        let dir = catalog_dir();
        let catalog = SchemaCatalog::new(dir.path()).unwrap();
        catalog
            .validate_document(&json!({"name": "Ada", "age": 36}), "person")
            .unwrap();

        let err = catalog
            .validate_document(&json!({"age": -1, "nickname": "x"}), "person")
            .unwrap_err();
        match err {
            CatalogError::ValidationFailed { schema_name, report } => {
                assert_eq!(schema_name, "person");
                assert_eq!(report.len(), 3, "{report}");
            }
            other => panic!("Expected ValidationFailed, got: {other}"),
        }
    }

    #[test]
    fn test_unknown_schema_name() {
        let dir = catalog_dir();
        let catalog = SchemaCatalog::new(dir.path()).unwrap();
        let err = catalog.validate_document(&json!("x"), "animal").unwrap_err();
        assert!(matches!(err, CatalogError::SchemaNotFound { .. }));
    }

    #[test]
    fn test_validate_yaml_and_json_files() {
        let dir = catalog_dir();
        let catalog = SchemaCatalog::new(dir.path()).unwrap();

        let yaml = dir.path().join("ada.yaml");
        std::fs::write(&yaml, "name: Ada\nage: 36\n").unwrap();
        catalog.validate_file(&yaml, "person").unwrap();

        let json_doc = dir.path().join("bob.json");
        std::fs::write(&json_doc, r#"{"name": 7}"#).unwrap();
        let err = catalog.validate_file(&json_doc, "person").unwrap_err();
        assert!(matches!(err, CatalogError::ValidationFailed { .. }));
    }

    #[test]
    fn test_malformed_document() {
        let dir = catalog_dir();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, CatalogError::DocumentLoad { .. }));
        assert!(load_document(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_malformed_schema_fails_catalog() {
        let dir = catalog_dir();
        std::fs::write(dir.path().join("bad.schema.json"), r#"{"minLength": -1}"#).unwrap();
        match SchemaCatalog::new(dir.path()) {
            Err(CatalogError::SchemaLoad { schema_name, reason }) => {
                assert_eq!(schema_name, "bad.schema.json");
                assert!(reason.contains("minLength"), "{reason}");
            }
            other => panic!("Expected SchemaLoad, got: {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory() {
        let err = SchemaCatalog::new("/nonexistent/schema/dir").unwrap_err();
        assert!(matches!(err, CatalogError::SchemaLoad { .. }));
    }

    #[test]
    fn test_yaml_integers_stay_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yml");
        std::fs::write(&path, "count: 3\nratio: 0.5\ntags: [a, b]\n").unwrap();
        let value = load_document(&path).unwrap();
        assert_eq!(value, json!({"count": 3, "ratio": 0.5, "tags": ["a", "b"]}));
        assert!(value["count"].is_i64());
    }

    #[test]
    fn test_yaml_tags_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yaml");
        std::fs::write(&path, "when: !timestamp 2024-01-01\n").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, CatalogError::DocumentLoad { .. }), "{err}");
    }
}
