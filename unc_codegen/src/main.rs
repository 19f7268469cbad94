//! # Propagation Procedure Generator
//!
//! Renders one propagation procedure per arity plus the dispatch macro.
//!
//! # Usage
//!
//! ```bash
//! # Print the generated region to stdout
//! unc_codegen
//!
//! # Regenerate in place (a second run reports no change)
//! unc_codegen --write unc_core/src/propagate/arity.rs
//!
//! # Fail if the checked-in region is stale
//! unc_codegen --check unc_core/src/propagate/arity.rs
//!
//! # Remove the generated bodies, keeping the markers
//! unc_codegen --strip unc_core/src/propagate/arity.rs
//! ```

#![deny(warnings)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;
use unc_codegen::splice::{self, Outcome};
use unc_codegen::{CodegenConfig, CodegenError, render};

/// Generate the fixed-arity uncertainty propagation procedures
#[derive(Parser, Debug)]
#[command(name = "unc_codegen")]
#[command(version)]
#[command(about = "Generate the fixed-arity uncertainty propagation procedures")]
#[command(long_about = None)]
struct Args {
    /// Path to configuration file (defaults to ./codegen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the arity ceiling from the configuration
    #[arg(long, value_name = "N")]
    max_arity: Option<usize>,

    /// Rewrite the generated region of FILE in place
    #[arg(long, value_name = "FILE", conflicts_with_all = ["check", "strip"])]
    write: Option<PathBuf>,

    /// Exit with failure if the generated region of FILE is stale
    #[arg(long, value_name = "FILE", conflicts_with = "strip")]
    check: Option<PathBuf>,

    /// Empty the generated region of FILE, keeping the marker lines
    #[arg(long, value_name = "FILE")]
    strip: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = CodegenConfig::resolve(args.config.as_deref());

    let level = match (&config, args.verbose) {
        (_, true) => Level::DEBUG,
        (Ok(config), false) => config.shared.log_level.into(),
        (Err(_), false) => Level::INFO,
    };
    setup_tracing(&args, level);

    match config.map_err(CodegenError::from).and_then(|c| run(&args, c)) {
        Ok(code) => code,
        Err(e) => {
            error!("unc_codegen failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, mut config: CodegenConfig) -> Result<ExitCode, CodegenError> {
    if let Some(max_arity) = args.max_arity {
        config.codegen.max_arity = max_arity;
    }
    config.validate()?;

    info!(
        service = %config.shared.service_name,
        max_arity = config.codegen.max_arity,
        "unc_codegen v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Some(path) = &args.strip {
        splice::strip_file(path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let generated = render(config.codegen.max_arity)?;

    if let Some(path) = &args.write {
        if splice::write_region(path, &generated)? == Outcome::Unchanged {
            info!(path = %path.display(), "no changes");
        }
    } else if let Some(path) = &args.check {
        if !splice::check_region(path, &generated)? {
            warn!(path = %path.display(), "generated region is stale, rerun with --write");
            return Ok(ExitCode::FAILURE);
        }
        info!(path = %path.display(), "generated region is up to date");
    } else {
        print!("{generated}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Setup tracing subscriber based on CLI arguments. Logs go to stderr so
/// stdout carries only generated code.
fn setup_tracing(args: &Args, level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
