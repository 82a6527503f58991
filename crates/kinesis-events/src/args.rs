//! CLI argument definitions for event generation.

use crate::command::{DEFAULT_SERVICE, DEFAULT_TOOL};
use crate::generator::{GenerateInput, DEFAULT_ENDPOINT};
use crate::operation::{validate_operation, ConfiguredOperation};
use clap::Args;
use std::path::PathBuf;

/// Arguments for generating Kinesis events from fixture files.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Name of the Kinesis stream running in localstack
    #[arg(long, env = "KINESIS_STREAM_NAME")]
    pub stream_name: String,

    /// Partition key used for every submitted record
    #[arg(long, env = "KINESIS_PARTITION_KEY")]
    pub partition_key: String,

    /// Directory with fixture files named order.schema.table.json
    #[arg(long, env = "RECORD_FILE_DIR")]
    pub record_file_dir: PathBuf,

    /// Operation to simulate (load, insert, update or delete)
    #[arg(long, env = "KINESIS_OPERATION", value_parser = validate_operation)]
    pub operation: ConfiguredOperation,

    /// Localstack endpoint URL
    #[arg(long, env = "LOCALSTACK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Submit records with put-records in chunks of up to 500
    #[arg(long)]
    pub batch: bool,

    /// AWS CLI executable
    #[arg(long, env = "AWS_CLI", default_value = DEFAULT_TOOL)]
    pub aws_cli: String,

    /// AWS CLI service name
    #[arg(long, default_value = DEFAULT_SERVICE)]
    pub service: String,

    /// Log the generated commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl From<GenerateArgs> for GenerateInput {
    fn from(args: GenerateArgs) -> Self {
        GenerateInput {
            stream_name: args.stream_name,
            partition_key: args.partition_key,
            record_file_dir: args.record_file_dir,
            operation: args.operation,
            endpoint: args.endpoint,
            batch: args.batch,
            tool: args.aws_cli,
            service: args.service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    /// Required flags, without `--endpoint`.
    const REQUIRED: [&str; 8] = [
        "--stream-name",
        "events",
        "--partition-key",
        "id",
        "--record-file-dir",
        "./fixtures",
        "--operation",
        "INSERT",
    ];

    fn parse(extra: &[&str]) -> Result<TestCli, clap::Error> {
        let argv = std::iter::once("test")
            .chain(REQUIRED)
            .chain(extra.iter().copied());
        TestCli::try_parse_from(argv)
    }

    #[test]
    fn test_parse_minimal_args() {
        let cli = parse(&["--endpoint", "http://localstack:4566"]).unwrap();

        let input = GenerateInput::from(cli.args);
        assert_eq!(input.stream_name, "events");
        assert_eq!(input.endpoint, "http://localstack:4566");
        assert_eq!(input.operation.kind(), Operation::Insert);
        assert_eq!(input.operation.as_str(), "INSERT");
        assert_eq!(input.tool, "aws");
        assert_eq!(input.service, "kinesis");
        assert!(!input.batch);
    }

    #[test]
    fn test_endpoint_default() {
        // Only meaningful when the fallback variable is not set
        if std::env::var_os("LOCALSTACK_ENDPOINT").is_some() {
            return;
        }

        let cli = parse(&[]).unwrap();
        assert_eq!(cli.args.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.args.endpoint, "http://localhost:4566");
    }

    #[test]
    fn test_batch_and_dry_run_flags() {
        let cli = parse(&["--batch", "--dry-run", "--aws-cli", "awslocal"]).unwrap();

        assert!(cli.args.batch);
        assert!(cli.args.dry_run);
        assert_eq!(cli.args.aws_cli, "awslocal");
    }

    #[test]
    fn test_missing_required_flag() {
        let result = TestCli::try_parse_from([
            "test",
            "--partition-key",
            "id",
            "--record-file-dir",
            "./fixtures",
            "--operation",
            "insert",
        ]);

        // KINESIS_STREAM_NAME would satisfy the missing flag
        if std::env::var_os("KINESIS_STREAM_NAME").is_none() {
            let err = result.err().unwrap();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
            assert!(err.to_string().contains("--stream-name"));
        }
    }

    #[test]
    fn test_invalid_operation_is_rejected() {
        let result = TestCli::try_parse_from([
            "test",
            "--stream-name",
            "events",
            "--partition-key",
            "id",
            "--record-file-dir",
            "./fixtures",
            "--operation",
            "FOO",
        ]);

        let err = result.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("[LOAD, INSERT, UPDATE, DELETE]"));
    }

    #[derive(Parser)]
    struct EnvCli {
        #[arg(long, env = "KINESIS_EVENTS_ARGS_TEST_CLI", default_value = DEFAULT_TOOL)]
        aws_cli: String,

        #[arg(
            long,
            env = "KINESIS_EVENTS_ARGS_TEST_OPERATION",
            value_parser = validate_operation
        )]
        operation: ConfiguredOperation,
    }

    #[test]
    fn test_env_fallbacks() {
        // Variables read by no other test
        std::env::set_var("KINESIS_EVENTS_ARGS_TEST_CLI", "awslocal");
        std::env::set_var("KINESIS_EVENTS_ARGS_TEST_OPERATION", "Update");

        let cli = EnvCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.aws_cli, "awslocal");
        assert_eq!(cli.operation.kind(), Operation::Update);
        assert_eq!(cli.operation.as_str(), "Update");

        let cli = EnvCli::try_parse_from(["test", "--aws-cli", "aws"]).unwrap();
        assert_eq!(cli.aws_cli, "aws");

        std::env::remove_var("KINESIS_EVENTS_ARGS_TEST_CLI");
        std::env::remove_var("KINESIS_EVENTS_ARGS_TEST_OPERATION");
    }

    #[test]
    fn test_env_variable_names() {
        let command = TestCli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("stream_name").as_deref(), Some("KINESIS_STREAM_NAME"));
        assert_eq!(env_of("partition_key").as_deref(), Some("KINESIS_PARTITION_KEY"));
        assert_eq!(env_of("record_file_dir").as_deref(), Some("RECORD_FILE_DIR"));
        assert_eq!(env_of("operation").as_deref(), Some("KINESIS_OPERATION"));
        assert_eq!(env_of("endpoint").as_deref(), Some("LOCALSTACK_ENDPOINT"));
        assert_eq!(env_of("aws_cli").as_deref(), Some("AWS_CLI"));
        assert_eq!(env_of("batch"), None);
    }
}
