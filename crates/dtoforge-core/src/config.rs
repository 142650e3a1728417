//! Generator configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::errors::ConfigError;

/// Run configuration for the generator, built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Emit `@nestjs/swagger` documentation decorators.
    pub swagger: bool,
    /// Split each model into base/relations/combined classes.
    pub separate_relation_fields: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./generated"),
            swagger: false,
            separate_relation_fields: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a config writing to `output_dir` with both features disabled.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Apply a generator block's string-valued option map.
    ///
    /// Unknown keys pass through untouched; known keys must be `"true"` or
    /// `"false"`.
    pub fn apply(&mut self, options: &BTreeMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in options {
            match key.as_str() {
                "swagger" => self.swagger = parse_bool(key, value)?,
                "separateRelationFields" => {
                    self.separate_relation_fields = parse_bool(key, value)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
