//! Output registry and batched write.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::Result;

/// A generated output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Registry of generated files for one run.
///
/// Units registered at the same path overwrite each other; the last writer
/// wins. Nothing touches the filesystem until [`OutputSet::write`].
#[derive(Debug, Default)]
pub struct OutputSet {
    files: IndexMap<PathBuf, String>,
}

impl OutputSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the unit at `path`.
    pub fn register(&mut self, path: PathBuf, content: String) {
        self.files.insert(path, content);
    }

    /// Content registered at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no units are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All units in sorted path order.
    pub fn files(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = self
            .files
            .iter()
            .map(|(path, content)| GeneratedFile {
                path: path.clone(),
                content: content.clone(),
            })
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Write every unit once, creating parent directories as needed.
    pub fn write(&self) -> Result<()> {
        for file in self.files() {
            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file.path, &file.content)?;
        }
        Ok(())
    }
}
