//! Error types for the event generator.

use crate::operation::valid_operations;
use crate::runner::CommandError;
use fixture_file::FixtureFileError;
use thiserror::Error;

/// Errors that abort an event generation run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(
        "Invalid operation {0}. Please make sure to select one of the following: [{ops}]",
        ops = valid_operations()
    )]
    InvalidOperation(String),

    #[error("Invalid file name {0}. Files should follow the pattern order.schema.table.json")]
    InvalidFileName(String),

    #[error(
        "Invalid file name {file_name}. Load order '{order}' is not a valid integer: {source}"
    )]
    InvalidOrder {
        file_name: String,
        order: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Fixture(#[from] FixtureFileError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
