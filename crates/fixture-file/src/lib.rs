//! Fixture file access for the event generator
//!
//! The generator never touches the filesystem directly. It goes through the
//! [`FixtureSource`] trait, which knows how to list the entries of a fixture
//! directory and how to read one entry as JSON.
//!
//! # Source Types
//!
//! - **Local**: [`LocalFixtureSource`] reads a directory on the local filesystem
//! - **Memory**: [`MemoryFixtureSource`] serves fixtures held in memory
//!
//! # Example
//!
//! ```ignore
//! use fixture_file::{FixtureSource, LocalFixtureSource};
//!
//! let source = LocalFixtureSource;
//! for name in source.list_files(Path::new("./fixtures")).await? {
//!     let value = source.read_json(&Path::new("./fixtures").join(&name)).await?;
//!     // Process value...
//! }
//! ```

mod local;
mod memory;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use local::{list_directory, LocalFixtureSource};
pub use memory::MemoryFixtureSource;

/// Errors raised while listing or reading fixtures.
#[derive(Error, Debug)]
pub enum FixtureFileError {
    /// The fixture directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is missing or unreadable.
    #[error("Failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file does not contain valid JSON.
    #[error("Failed to parse JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixtureFileError {
    /// Path of the directory or file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            FixtureFileError::ListDirectory { path, .. }
            | FixtureFileError::Read { path, .. }
            | FixtureFileError::Parse { path, .. } => path,
        }
    }
}

/// Where fixture files come from.
#[async_trait::async_trait]
pub trait FixtureSource: Send + Sync {
    /// List the file names (not paths) found directly inside `dir`
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, FixtureFileError>;

    /// Read the file at `path` and parse it as JSON
    async fn read_json(&self, path: &Path) -> Result<serde_json::Value, FixtureFileError>;
}
