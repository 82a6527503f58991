//! Local filesystem fixture source

use crate::{FixtureFileError, FixtureSource};
use std::path::Path;

/// Reads fixtures from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFixtureSource;

#[async_trait::async_trait]
impl FixtureSource for LocalFixtureSource {
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, FixtureFileError> {
        list_directory(dir).await
    }

    async fn read_json(&self, path: &Path) -> Result<serde_json::Value, FixtureFileError> {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| FixtureFileError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_slice(&contents).map_err(|source| FixtureFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// List all file names in a directory (non-recursive, immediate children only)
///
/// Returns only files, not subdirectories, sorted by name.
pub async fn list_directory(path: &Path) -> Result<Vec<String>, FixtureFileError> {
    let list_err = |source: std::io::Error| FixtureFileError::ListDirectory {
        path: path.to_path_buf(),
        source,
    };

    let mut results = Vec::new();
    let mut entries = tokio::fs::read_dir(path).await.map_err(list_err)?;

    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let file_type = entry.file_type().await.map_err(list_err)?;

        // Only include files, skip directories
        if file_type.is_file() {
            results.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    // Sort for consistent ordering
    results.sort();

    tracing::debug!(
        "Listed {} files in directory: {}",
        results.len(),
        path.display()
    );

    Ok(results)
}
