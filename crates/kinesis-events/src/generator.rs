//! The event generator.
//!
//! Reads fixtures, encodes every record and submits the resulting commands
//! one at a time. Ordering matters: fixtures are loaded in dependency order
//! (schema/table load order), so nothing here runs concurrently.

use crate::command::{CommandTarget, DEFAULT_SERVICE, DEFAULT_TOOL};
use crate::envelope::generate_payload;
use crate::error::GeneratorError;
use crate::fixture::{load_fixtures, running_order_report};
use crate::operation::ConfiguredOperation;
use crate::runner::CommandRunner;
use crate::sink::OutputSink;
use fixture_file::FixtureSource;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default localstack edge endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Everything one generation run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateInput {
    /// Name of the Kinesis stream running in localstack
    pub stream_name: String,
    /// Partition key for every submitted record
    pub partition_key: String,
    /// Directory holding the JSON fixture files
    pub record_file_dir: PathBuf,
    /// Operation stamped on every envelope
    pub operation: ConfiguredOperation,
    /// Localstack endpoint
    pub endpoint: String,
    /// Submit records with `put-records` in chunks instead of one by one
    pub batch: bool,
    /// CLI executable
    pub tool: String,
    /// CLI service name
    pub service: String,
}

impl GenerateInput {
    pub fn new(
        stream_name: impl Into<String>,
        partition_key: impl Into<String>,
        record_file_dir: impl Into<PathBuf>,
        operation: impl Into<ConfiguredOperation>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            partition_key: partition_key.into(),
            record_file_dir: record_file_dir.into(),
            operation: operation.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            batch: false,
            tool: DEFAULT_TOOL.to_string(),
            service: DEFAULT_SERVICE.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    pub fn target(&self) -> CommandTarget {
        CommandTarget::new(&self.endpoint, &self.stream_name, &self.partition_key)
            .with_tool(&self.tool)
            .with_service(&self.service)
    }
}

/// Metrics from a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of fixture files processed.
    pub files_processed: u64,
    /// Number of records wrapped into envelopes.
    pub records_encoded: u64,
    /// Number of commands executed.
    pub commands_executed: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_encoded as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Turns fixture files into Kinesis put-record commands and runs them.
pub struct EventGenerator<F, R> {
    fixtures: F,
    runner: R,
}

impl<F: FixtureSource, R: CommandRunner> EventGenerator<F, R> {
    pub fn new(fixtures: F, runner: R) -> Self {
        Self { fixtures, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the whole pipeline.
    ///
    /// The running order report and every command's output go to `sink`.
    /// Any error aborts the run; commands already executed are not undone.
    pub async fn invoke(
        &self,
        input: &GenerateInput,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerateMetrics, GeneratorError> {
        let start_time = Instant::now();
        let mut metrics = GenerateMetrics::default();

        let fixtures = load_fixtures(&self.fixtures, &input.record_file_dir).await?;
        sink.emit(&running_order_report(&fixtures));

        let target = input.target();
        info!(
            "Submitting {} fixture files to stream '{}' (operation: {}, batch: {})",
            fixtures.len(),
            input.stream_name,
            input.operation,
            input.batch
        );

        for fixture in &fixtures {
            let payloads = fixture
                .records
                .iter()
                .map(|record| {
                    generate_payload(record, fixture.schema(), fixture.table(), &input.operation)
                })
                .collect::<Result<Vec<_>, _>>()?;
            metrics.records_encoded += payloads.len() as u64;

            let commands = target.commands(&payloads, input.batch);
            debug!(
                "Fixture '{}': {} records, {} commands",
                fixture.name.file_name,
                payloads.len(),
                commands.len()
            );

            for command in &commands {
                let output = self.runner.run(command).await?;
                sink.emit(&output);
                metrics.commands_executed += 1;
            }
            metrics.files_processed += 1;
        }

        metrics.total_duration = start_time.elapsed();
        info!(
            "Generation complete: {} records in {} commands over {:?} ({:.2} records/sec)",
            metrics.records_encoded,
            metrics.commands_executed,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}
