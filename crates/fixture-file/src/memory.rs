//! In-memory fixture source

use crate::{FixtureFileError, FixtureSource};
use std::path::{Path, PathBuf};

/// Serves fixtures from memory, in insertion order.
///
/// Every fixture lives in a single virtual directory; `list_files` ignores the
/// directory it is asked about and returns the names exactly as they were added.
#[derive(Debug, Clone, Default)]
pub struct MemoryFixtureSource {
    files: Vec<(String, serde_json::Value)>,
}

impl MemoryFixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture named `name` holding `content`
    pub fn with_file(mut self, name: impl Into<String>, content: serde_json::Value) -> Self {
        self.files.push((name.into(), content));
        self
    }
}

#[async_trait::async_trait]
impl FixtureSource for MemoryFixtureSource {
    async fn list_files(&self, _dir: &Path) -> Result<Vec<String>, FixtureFileError> {
        Ok(self.files.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn read_json(&self, path: &Path) -> Result<serde_json::Value, FixtureFileError> {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        self.files
            .iter()
            .find(|(file, _)| Some(file) == name.as_ref())
            .map(|(_, content)| content.clone())
            .ok_or_else(|| FixtureFileError::Read {
                path: PathBuf::from(path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such fixture"),
            })
    }
}
