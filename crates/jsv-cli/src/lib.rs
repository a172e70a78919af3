//! # jsv-cli: Schema Validation from the Command Line
//!
//! Thin clap-based front end over `jsv-schema`.
//!
//! ## Subcommands
//!
//! - `validate`: validate JSON/YAML instance files against a schema file
//!   or a named schema from a catalog directory
//! - `compile`: check that schema files compile and list their keywords
//!
//! ## Exit Codes
//!
//! - `0`: every instance is valid / every schema compiled
//! - `1`: at least one validation or compile failure
//! - `2`: operational error (unreadable file, bad catalog, unknown schema)
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `jsv-schema`; no validation logic lives here.
//! - Results go to stdout, diagnostics to stderr through `tracing`.

pub mod compile;
pub mod validate;

/// Exit code for a run with no failures.
pub const EXIT_OK: u8 = 0;
/// Exit code when an instance is invalid or a schema fails to compile.
pub const EXIT_FAILED: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;
