//! # jsv-schema: Draft-04 Schema Compilation & Validation
//!
//! Compiles a JSON Schema document into a tree of typed keyword validators
//! and applies that tree to decoded JSON values.
//!
//! ```
//! use jsv_schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::compile(&json!({
//!     "type": "object",
//!     "properties": {"port": {"type": "integer", "minimum": 1, "maximum": 65535}},
//!     "required": ["port"]
//! }))
//! .unwrap();
//!
//! assert!(schema.is_valid(&json!({"port": 8080})));
//! assert_eq!(schema.validate(&json!({"port": 0})).len(), 1);
//! ```
//!
//! ## Compilation (`schema`, `keyword`, `link`)
//!
//! [`Schema::compile`] decodes every keyword of a document independently,
//! then links keywords that modify each other (`minimum` and
//! `exclusiveMinimum`, `items` and `additionalItems`, `properties` with
//! `patternProperties` and `additionalProperties`). A malformed keyword at
//! any depth yields a single [`CompileError`].
//!
//! ## Validation
//!
//! [`Schema::validate`] returns every [`ValidationError`] the instance
//! triggers, in a fixed keyword order. Keywords that do not apply to the
//! instance's kind (`minLength` on a number) report nothing. `$ref` is
//! accepted but never resolved.
//!
//! ## Formats (`format`)
//!
//! `date-time`, `uri`, `email`, `ipv4`, `ipv6`, and `hostname` are checked;
//! other format names accept every string.
//!
//! ## Catalog (`catalog`)
//!
//! [`SchemaCatalog`] compiles a directory of `*.schema.json` files and
//! validates JSON or YAML documents against them by name.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsv-core` internally.
//! - Compiled schemas are immutable, `Send + Sync`, and own their embedded
//!   schemas outright.
//! - Validation is pure: no I/O, no global mutable state, no early exit.

pub mod catalog;
pub mod error;
pub mod format;
mod keyword;
mod keywords;
mod link;
pub mod schema;

pub use catalog::{load_document, SchemaCatalog};
pub use error::{CatalogError, CompileError, ValidationError, ValidationReport};
pub use format::Format;
pub use schema::Schema;
