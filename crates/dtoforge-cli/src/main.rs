//! dtoforge CLI: reads a run document and writes generated DTO classes.

mod document;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use dtoforge_codegen::CodegenError;
use dtoforge_core::{ConfigError, SchemaError};

use document::RunDocument;

/// Generate validator-ready TypeScript DTO classes from a schema description.
#[derive(Debug, Parser)]
#[command(name = "dtoforge", version, about)]
struct Args {
    /// Path to the run document JSON.
    schema: PathBuf,

    /// Override the output directory from the run document.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit @nestjs/swagger documentation decorators.
    #[arg(long)]
    swagger: bool,

    /// Split each model into base/relations/combined classes.
    #[arg(long)]
    separate_relation_fields: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(count) => {
            info!(files = count, "generation complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, CliError> {
    let document = RunDocument::load(&args.schema)?;
    document.require_client_generator()?;

    let mut config = document.generator_config()?;
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    config.swagger |= args.swagger;
    config.separate_relation_fields |= args.separate_relation_fields;
    debug!(?config, "resolved generator config");

    let out = dtoforge_codegen::generate(&document.datamodel, &config)?;

    // Clear the output directory, then write the whole batch once.
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir)?;
    }
    fs::create_dir_all(&config.output_dir)?;
    out.write()?;

    Ok(out.len())
}
