//! Error types shared across the dtoforge crates.

use thiserror::Error;

/// Errors in the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no companion client generator configured \
         (expected provider \"prisma-client-js\" or \"prisma-client\")"
    )]
    MissingClientGenerator,

    #[error("invalid value for generator option {key}: {value:?} (expected \"true\" or \"false\")")]
    InvalidValue { key: String, value: String },
}

/// Errors reported while loading the schema description.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse run document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate field {field} on model {model}")]
    DuplicateField { model: String, field: String },
}
