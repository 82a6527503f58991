//! Command-line interface for kinesis-event-generator
//!
//! # Usage Examples
//!
//! ```bash
//! # Simulate inserts, one record per call
//! kinesis-event-generator generate \
//!   --stream-name events \
//!   --partition-key id \
//!   --record-file-dir ./fixtures \
//!   --operation insert
//!
//! # Simulate an initial load with put-records batches
//! LOCALSTACK_ENDPOINT=http://localhost:4566 kinesis-event-generator generate \
//!   --stream-name events \
//!   --partition-key id \
//!   --record-file-dir ./fixtures \
//!   --operation load \
//!   --batch
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use clap::{Parser, Subcommand};
use kinesis_event_generator::{generate, GenerateArgs, TracingSink};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kinesis-event-generator")]
#[command(about = "Simulate Kinesis events on localstack from JSON fixture files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit every fixture record to a Kinesis stream
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            generate(args, &mut TracingSink).await?;
        }
    }

    Ok(())
}
