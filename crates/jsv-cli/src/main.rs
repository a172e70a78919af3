//! # jsv CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to the
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsv_cli::compile::{run_compile, CompileArgs};
use jsv_cli::validate::{run_validate, ValidateArgs};
use jsv_cli::EXIT_ERROR;

/// Draft-04 JSON Schema validator.
///
/// Validates JSON and YAML documents against a schema file or a directory
/// catalog of schemas, and checks that schemas compile.
#[derive(Parser, Debug)]
#[command(name = "jsv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate instance documents against a schema.
    Validate(ValidateArgs),

    /// Compile schema documents and list their keywords.
    Compile(CompileArgs),
}

/// Log filter for a `-v` count. Without `-v`, `RUST_LOG` wins if set.
fn log_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "jsv starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Compile(args) => run_compile(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
