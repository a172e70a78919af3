//! # Validate Subcommand
//!
//! Validates instance documents against one schema, taken either from a
//! schema file (`--schema`) or from a catalog directory (`--catalog` with
//! `--name`). Instances are read as YAML when their extension is `.yaml` or
//! `.yml` and as JSON otherwise.
//!
//! An instance that cannot be loaded is reported and skipped; the run then
//! exits with [`EXIT_ERROR`] even if every other instance was valid.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use jsv_schema::{load_document, Schema, SchemaCatalog, ValidationError};
use serde::Serialize;

use crate::{EXIT_ERROR, EXIT_FAILED, EXIT_OK};

/// Arguments for the `jsv validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema document to validate against.
    #[arg(long, value_name = "FILE", conflicts_with = "catalog", required_unless_present = "catalog")]
    pub schema: Option<PathBuf>,

    /// Directory of `*.schema.json` files.
    #[arg(long, value_name = "DIR", requires = "name")]
    pub catalog: Option<PathBuf>,

    /// Schema to use from the catalog, e.g. `person` or `person.schema.json`.
    #[arg(long, value_name = "SCHEMA", requires = "catalog")]
    pub name: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Instance documents to validate.
    #[arg(value_name = "INSTANCE", required = true)]
    pub instances: Vec<PathBuf>,
}

/// How results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `OK:` / `FAIL:` line per instance, errors indented below.
    Text,
    /// A single JSON array with one report per instance.
    Json,
}

/// Outcome for one instance file.
#[derive(Debug, Serialize)]
pub struct InstanceReport {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// True if the instance loaded and produced no errors.
    pub valid: bool,
    /// Validation errors, in evaluation order.
    pub errors: Vec<ValidationError>,
    /// Why the instance could not be loaded, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl InstanceReport {
    fn exit_code(&self) -> u8 {
        match (&self.load_error, self.valid) {
            (Some(_), _) => EXIT_ERROR,
            (None, true) => EXIT_OK,
            (None, false) => EXIT_FAILED,
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every instance is valid, 1 on validation
/// failure, 2 if any instance could not be loaded.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let (schema, label) = resolve_schema(args)?;
    tracing::info!(schema = %label, keywords = schema.len(), "validating instances");

    let reports: Vec<InstanceReport> = args
        .instances
        .iter()
        .map(|path| validate_instance(&schema, path))
        .collect();

    match args.format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("failed to render JSON report")?
        ),
    }

    Ok(reports
        .iter()
        .map(InstanceReport::exit_code)
        .max()
        .unwrap_or(EXIT_OK))
}

/// Load the schema named by the arguments, returning it with a display label.
fn resolve_schema(args: &ValidateArgs) -> Result<(Schema, String)> {
    match (&args.schema, &args.catalog, &args.name) {
        (Some(path), _, _) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open schema {}", path.display()))?;
            let schema = Schema::from_reader(file)
                .with_context(|| format!("failed to compile schema {}", path.display()))?;
            Ok((schema, path.display().to_string()))
        }
        (None, Some(dir), Some(name)) => {
            let catalog = SchemaCatalog::new(dir)
                .with_context(|| format!("failed to load schema catalog {}", dir.display()))?;
            let schema = catalog.get(name).cloned().ok_or_else(|| {
                anyhow!(
                    "schema '{name}' not found in {} (available: {})",
                    dir.display(),
                    catalog.schema_names().join(", ")
                )
            })?;
            Ok((schema, name.clone()))
        }
        _ => Err(anyhow!("either --schema or --catalog with --name is required")),
    }
}

fn validate_instance(schema: &Schema, path: &Path) -> InstanceReport {
    match load_document(path) {
        Ok(instance) => {
            let errors = schema.validate(&instance);
            tracing::debug!(path = %path.display(), errors = errors.len(), "validated instance");
            InstanceReport {
                path: path.to_path_buf(),
                valid: errors.is_empty(),
                errors,
                load_error: None,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping instance that failed to load");
            InstanceReport {
                path: path.to_path_buf(),
                valid: false,
                errors: Vec::new(),
                load_error: Some(e.to_string()),
            }
        }
    }
}

fn print_text(reports: &[InstanceReport]) {
    for report in reports {
        match (&report.load_error, report.valid) {
            (Some(reason), _) => println!("ERROR: {}: {reason}", report.path.display()),
            (None, true) => println!("OK: {}", report.path.display()),
            (None, false) => {
                println!("FAIL: {}", report.path.display());
                for error in &report.errors {
                    println!("  - {error}");
                }
            }
        }
    }
    let passed = reports.iter().filter(|r| r.valid).count();
    println!("{passed}/{} instance(s) valid", reports.len());
}
