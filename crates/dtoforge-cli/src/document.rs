//! Run-document loading: the schema-provider boundary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use dtoforge_core::{ConfigError, GeneratorConfig, SchemaDescription, SchemaError};

use crate::CliError;

/// Provider identifiers accepted for the companion client generator.
pub const CLIENT_PROVIDERS: [&str; 2] = ["prisma-client-js", "prisma-client"];

/// Our own provider identifier inside the run document.
pub const PROVIDER: &str = "dtoforge";

/// One configured generator block.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorBlock {
    pub provider: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// The run document handed to the generator.
#[derive(Debug, Deserialize)]
pub struct RunDocument {
    #[serde(default)]
    pub generators: Vec<GeneratorBlock>,
    pub datamodel: SchemaDescription,
}

impl RunDocument {
    /// Load and parse a run document from disk.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path)?;
        let document = serde_json::from_str(&raw).map_err(SchemaError::Parse)?;
        Ok(document)
    }

    /// Confirm a companion client generator is configured.
    pub fn require_client_generator(&self) -> Result<&GeneratorBlock, ConfigError> {
        self.generators
            .iter()
            .find(|g| CLIENT_PROVIDERS.contains(&g.provider.as_str()))
            .ok_or(ConfigError::MissingClientGenerator)
    }

    /// Build the generator config from our own generator block, if present.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = GeneratorConfig::default();
        if let Some(block) = self.generators.iter().find(|g| g.provider == PROVIDER) {
            if let Some(output) = &block.output {
                config.output_dir = output.into();
            }
            config.apply(&block.config)?;
        }
        Ok(config)
    }
}
