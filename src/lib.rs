//! Kinesis Event Generator
//!
//! Feeds a localstack Kinesis stream with simulated change events built from
//! JSON fixture files.
//!
//! # Fixtures
//!
//! Every file in the fixture directory is named `<order>.<schema>.<table>.json`
//! and holds either one JSON record or an array of records. Files are
//! submitted from the highest order to the lowest.
//!
//! # CLI Usage
//!
//! ```bash
//! # One put-record call per record
//! kinesis-event-generator generate \
//!   --stream-name events --partition-key id \
//!   --record-file-dir ./fixtures --operation insert
//!
//! # put-records in chunks of 500 against a custom endpoint
//! kinesis-event-generator generate \
//!   --stream-name events --partition-key id \
//!   --record-file-dir ./fixtures --operation load \
//!   --endpoint http://localstack:4566 --batch
//! ```

use anyhow::Context;
use fixture_file::LocalFixtureSource;
use tracing::info;

pub use kinesis_events::{
    validate_operation, ConfiguredOperation, EventGenerator, GenerateArgs, GenerateInput,
    GenerateMetrics, MemorySink, Operation, OutputSink, TracingSink,
};
use kinesis_events::{DryRunRunner, ShellRunner};

/// Run a generation from parsed CLI arguments, writing output to `sink`.
///
/// Fixtures are read from the local filesystem. Commands run through `sh`
/// unless `--dry-run` was given.
pub async fn generate(
    args: GenerateArgs,
    sink: &mut dyn OutputSink,
) -> anyhow::Result<GenerateMetrics> {
    let dry_run = args.dry_run;
    let input = GenerateInput::from(args);
    let dir = input.record_file_dir.display().to_string();

    let metrics = if dry_run {
        info!("Dry run: commands will be logged, not executed");
        EventGenerator::new(LocalFixtureSource, DryRunRunner)
            .invoke(&input, sink)
            .await
    } else {
        EventGenerator::new(LocalFixtureSource, ShellRunner::default())
            .invoke(&input, sink)
            .await
    }
    .with_context(|| format!("Failed to generate events from '{dir}'"))?;

    Ok(metrics)
}
