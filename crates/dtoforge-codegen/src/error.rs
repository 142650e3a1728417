//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Run configuration error.
    #[error(transparent)]
    Config(#[from] dtoforge_core::ConfigError),

    /// Schema description error, propagated from the provider.
    #[error(transparent)]
    Schema(#[from] dtoforge_core::SchemaError),

    /// A field descriptor is malformed: the declared type is missing, or the
    /// reported kind contradicts the relation linkage.
    #[error("invalid field kind for {field} on model {model}")]
    InvalidFieldKind { model: String, field: String },

    /// A model with list relations has no aggregate-count output.
    #[error("missing aggregate-count output for model {model}")]
    MissingCountOutput { model: String },

    /// IO error during the batched write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
