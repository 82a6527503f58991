//! Command text for the external Kinesis CLI.
//!
//! The generated strings must match what the localstack simulation scripts
//! already expect, byte for byte:
//!
//! ```text
//! <tool> --endpoint-url=<endpoint> <service> put-record --stream-name <stream> --partition-key <key> --data <payload>
//! <tool> --endpoint-url=<endpoint> <service> put-records --stream-name <stream> --records Data=<p1>,PartitionKey=<key> Data=<p2>,PartitionKey=<key> 
//! ```
//!
//! Every `put-records` entry is followed by a single space, including the last.

use std::fmt::Write;

/// Maximum number of payloads submitted by one `put-records` call.
pub const MAX_BATCH_SIZE: usize = 500;

/// Default CLI executable.
pub const DEFAULT_TOOL: &str = "aws";

/// Default CLI service name.
pub const DEFAULT_SERVICE: &str = "kinesis";

/// The fixed part of every generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTarget {
    pub tool: String,
    pub service: String,
    pub endpoint: String,
    pub stream_name: String,
    pub partition_key: String,
}

impl CommandTarget {
    pub fn new(
        endpoint: impl Into<String>,
        stream_name: impl Into<String>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            endpoint: endpoint.into(),
            stream_name: stream_name.into(),
            partition_key: partition_key.into(),
        }
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    fn prefix(&self) -> String {
        format!(
            "{} --endpoint-url={} {}",
            self.tool, self.endpoint, self.service
        )
    }

    /// Single-record submission of one payload.
    pub fn put_record(&self, payload: &str) -> String {
        format!(
            "{} put-record --stream-name {} --partition-key {} --data {}",
            self.prefix(),
            self.stream_name,
            self.partition_key,
            payload
        )
    }

    /// Multi-record submission; all entries share the partition key.
    pub fn put_records<S: AsRef<str>>(&self, payloads: &[S]) -> String {
        let mut command = format!(
            "{} put-records --stream-name {} --records ",
            self.prefix(),
            self.stream_name
        );
        for payload in payloads {
            // Writing into a String cannot fail
            let _ = write!(
                command,
                "Data={},PartitionKey={} ",
                payload.as_ref(),
                self.partition_key
            );
        }
        command
    }

    /// One `put-records` command per chunk of at most [`MAX_BATCH_SIZE`] payloads.
    pub fn batch_commands<S: AsRef<str>>(&self, payloads: &[S]) -> Vec<String> {
        payloads
            .chunks(MAX_BATCH_SIZE)
            .map(|chunk| self.put_records(chunk))
            .collect()
    }

    /// One `put-record` command per payload.
    pub fn single_commands<S: AsRef<str>>(&self, payloads: &[S]) -> Vec<String> {
        payloads
            .iter()
            .map(|payload| self.put_record(payload.as_ref()))
            .collect()
    }

    pub fn commands<S: AsRef<str>>(&self, payloads: &[S], batch: bool) -> Vec<String> {
        if batch {
            self.batch_commands(payloads)
        } else {
            self.single_commands(payloads)
        }
    }
}
