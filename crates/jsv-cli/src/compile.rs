//! # Compile Subcommand
//!
//! Checks that schema files compile and prints the keywords each one
//! compiled to, in evaluation order.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use jsv_schema::{CompileError, Schema};

use crate::{EXIT_ERROR, EXIT_FAILED, EXIT_OK};

/// Arguments for the `jsv compile` subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Schema documents to compile.
    #[arg(value_name = "SCHEMA", required = true)]
    pub schemas: Vec<PathBuf>,
}

/// Execute the compile subcommand.
///
/// Returns exit code: 0 if every schema compiled, 1 if any failed to
/// compile, 2 if any could not be opened.
pub fn run_compile(args: &CompileArgs) -> Result<u8> {
    let mut code = EXIT_OK;
    for path in &args.schemas {
        code = code.max(compile_one(path));
    }
    Ok(code)
}

fn compile_one(path: &Path) -> u8 {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open schema");
            println!("ERROR: {}: {e}", path.display());
            return EXIT_ERROR;
        }
    };
    match Schema::from_reader(file) {
        Ok(schema) => {
            println!("OK: {} [{}]", path.display(), schema.keyword_names().join(", "));
            EXIT_OK
        }
        Err(CompileError::Io(e)) => {
            println!("ERROR: {}: {e}", path.display());
            EXIT_ERROR
        }
        Err(e) => {
            println!("FAIL: {}: {e}", path.display());
            EXIT_FAILED
        }
    }
}
