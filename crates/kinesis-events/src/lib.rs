//! Simulated Kinesis events from JSON fixture files.
//!
//! This crate turns a directory of JSON fixtures into `put-record` /
//! `put-records` invocations of an external CLI (by default
//! `aws --endpoint-url=<localstack> kinesis`), so a local stream can be fed
//! with realistic change events.
//!
//! # Pipeline
//!
//! ```text
//!   fixture directory (order.schema.table.json)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   fixture.rs    │  parse names, order by load order, read JSON
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │   envelope.rs   │  wrap each record with metadata, base64 encode
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │   command.rs    │  one put-record per payload, or put-records per 500
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │   runner.rs     │  run commands one at a time, output to the sink
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use fixture_file::LocalFixtureSource;
//! use kinesis_events::{EventGenerator, GenerateInput, Operation, ShellRunner, TracingSink};
//!
//! let generator = EventGenerator::new(LocalFixtureSource, ShellRunner::default());
//! let input = GenerateInput::new("events", "id", "./fixtures", Operation::Insert.into())
//!     .with_batch(true);
//! let metrics = generator.invoke(&input, &mut TracingSink).await?;
//! println!("Submitted {} records", metrics.records_encoded);
//! ```

pub mod args;
pub mod command;
pub mod envelope;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod operation;
pub mod runner;
pub mod sink;

// Re-exports for convenience
pub use args::GenerateArgs;
pub use command::{CommandTarget, DEFAULT_SERVICE, DEFAULT_TOOL, MAX_BATCH_SIZE};
pub use envelope::{generate_payload, Envelope, Metadata};
pub use error::GeneratorError;
pub use fixture::{FixtureFile, FixtureName};
pub use generator::{EventGenerator, GenerateInput, GenerateMetrics, DEFAULT_ENDPOINT};
pub use operation::{validate_operation, ConfiguredOperation, Operation};
pub use runner::{CommandError, CommandRunner, DryRunRunner, ShellRunner};
pub use sink::{MemorySink, OutputSink, TracingSink};
