//! # Error Types
//!
//! Compile-time and validation-time failures are disjoint:
//!
//! - [`CompileError`] is terminal. A malformed keyword anywhere in a schema
//!   document aborts compilation of the whole document. Errors raised inside
//!   an embedded schema are wrapped in [`CompileError::Embedded`] with the
//!   location of the keyword that owns it, e.g. `properties/name`.
//! - [`ValidationError`] is a human-readable description of one way an
//!   instance fails a schema. Validation never aborts; every applicable
//!   keyword contributes its errors.
//!
//! [`CatalogError`] covers the file-backed [`SchemaCatalog`](crate::SchemaCatalog).

use std::fmt;

use jsv_core::InstanceType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A schema document could not be compiled.
#[derive(Error, Debug)]
pub enum CompileError {
    /// Schemas (top-level and embedded) must be JSON objects.
    #[error("schema must be a JSON object, found {found}")]
    NotAnObject {
        /// Kind of the value found where a schema was expected.
        found: InstanceType,
    },

    /// A keyword's value has the wrong shape.
    #[error("invalid `{keyword}`: {reason}")]
    InvalidKeyword {
        /// Keyword name as written in the schema.
        keyword: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// A regular expression in `pattern` or `patternProperties` did not compile.
    #[error("invalid regular expression {pattern:?} in `{keyword}`: {source}")]
    InvalidPattern {
        /// Keyword holding the pattern.
        keyword: &'static str,
        /// Pattern source text.
        pattern: String,
        /// Underlying regex compile error.
        #[source]
        source: regex::Error,
    },

    /// Compilation failed inside an embedded schema.
    #[error("at `{location}`: {source}")]
    Embedded {
        /// Keyword path of the embedded schema, e.g. `items/0`.
        location: String,
        /// The failure inside the embedded schema.
        #[source]
        source: Box<CompileError>,
    },

    /// The schema document is not valid JSON.
    #[error("schema document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the schema document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub(crate) fn invalid(keyword: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            keyword,
            reason: reason.into(),
        }
    }

    pub(crate) fn embedded(location: impl Into<String>, source: CompileError) -> Self {
        Self::Embedded {
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping [`CompileError::Embedded`] wrappers.
    pub fn root_cause(&self) -> &CompileError {
        match self {
            Self::Embedded { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// One way in which an instance fails a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the violation.
    pub description: String,
}

impl ValidationError {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A non-empty collection of validation errors, returned by
/// [`Schema::check`](crate::Schema::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all errors, in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Error raised by the [`SchemaCatalog`](crate::SchemaCatalog).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{report}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Every error reported for the document.
        report: ValidationReport,
    },

    /// No schema with this name was loaded.
    #[error("schema '{schema_name}' not found in {dir}")]
    SchemaNotFound {
        /// Requested schema name.
        schema_name: String,
        /// Catalog directory that was searched.
        dir: String,
    },

    /// A schema file could not be read, parsed, or compiled.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoad {
        /// Schema filename or directory.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// An instance document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error reading the catalog directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
