//! Fixture naming, ordering and loading.
//!
//! Fixture files are named `<order>.<schema>.<table>.<anything>`. Only the
//! first three dot-separated segments carry meaning; the rest (usually just
//! the `json` extension) is ignored.

use crate::error::GeneratorError;
use fixture_file::FixtureSource;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Minimum number of dot-separated segments in a fixture file name.
const MIN_SEGMENTS: usize = 4;

/// Load order, schema and table parsed from a fixture file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureName {
    pub file_name: String,
    pub order: i64,
    pub schema: String,
    pub table: String,
}

impl FixtureName {
    /// Parse a fixture file name such as `3.public.users.json`.
    pub fn parse(file_name: &str) -> Result<Self, GeneratorError> {
        let parts: Vec<&str> = file_name.split('.').collect();
        if parts.len() < MIN_SEGMENTS {
            return Err(GeneratorError::InvalidFileName(file_name.to_string()));
        }

        let order = parts[0]
            .trim()
            .parse::<i64>()
            .map_err(|source| GeneratorError::InvalidOrder {
                file_name: file_name.to_string(),
                order: parts[0].to_string(),
                source,
            })?;

        Ok(Self {
            file_name: file_name.to_string(),
            order,
            schema: parts[1].to_string(),
            table: parts[2].to_string(),
        })
    }

    /// `<order>-<schema>-<table>`, as shown in the running order report
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.order, self.schema, self.table)
    }
}

/// A parsed fixture name together with the records read from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureFile {
    pub name: FixtureName,
    pub records: Vec<Value>,
}

impl FixtureFile {
    /// Build a fixture from parsed JSON content.
    ///
    /// A top-level array contributes one record per element; any other value
    /// is a single record.
    pub fn new(name: FixtureName, content: Value) -> Self {
        let records = match content {
            Value::Array(records) => records,
            record => vec![record],
        };
        Self { name, records }
    }

    pub fn schema(&self) -> &str {
        &self.name.schema
    }

    pub fn table(&self) -> &str {
        &self.name.table
    }
}

/// Parse every file name and order them by descending load order.
///
/// The sort is stable: fixtures sharing an order keep their listing order.
/// The first malformed name aborts the whole listing.
pub fn order_fixture_names<S: AsRef<str>>(
    file_names: &[S],
) -> Result<Vec<FixtureName>, GeneratorError> {
    let mut names = file_names
        .iter()
        .map(|name| FixtureName::parse(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    names.sort_by(|a, b| b.order.cmp(&a.order));
    Ok(names)
}

/// List, order and read every fixture in `dir`.
pub async fn load_fixtures(
    source: &dyn FixtureSource,
    dir: &Path,
) -> Result<Vec<FixtureFile>, GeneratorError> {
    let file_names = source.list_files(dir).await?;
    let names = order_fixture_names(&file_names)?;

    let mut fixtures = Vec::with_capacity(names.len());
    for name in names {
        let content = source.read_json(&dir.join(&name.file_name)).await?;
        let fixture = FixtureFile::new(name, content);

        if fixture.records.is_empty() {
            warn!("Fixture '{}' contains no records", fixture.name.file_name);
        } else {
            debug!(
                "Loaded {} records from '{}'",
                fixture.records.len(),
                fixture.name.file_name
            );
        }
        fixtures.push(fixture);
    }

    Ok(fixtures)
}

/// Report listing the order fixtures will be submitted in.
pub fn running_order_report(fixtures: &[FixtureFile]) -> String {
    let lines: Vec<String> = fixtures.iter().map(|f| f.name.label()).collect();
    format!("Running on the following order:\n{}", lines.join("\n"))
}
