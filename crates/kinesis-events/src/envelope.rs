//! Envelope encoding.
//!
//! Each record is wrapped as `{ "data": <record>, "metadata": { ... } }`,
//! serialized to JSON and base64 encoded. The result is what ends up in the
//! `Data` field of the submitted Kinesis record.

use crate::operation::ConfiguredOperation;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Constant `metadata.record-type`.
pub const RECORD_TYPE: &str = "data";

/// Constant `metadata.partition-key-type`.
pub const PARTITION_KEY_TYPE: &str = "primary-key";

/// A record wrapped with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<'a> {
    pub data: &'a Value,
    pub metadata: Metadata<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata<'a> {
    pub timestamp: String,
    #[serde(rename = "record-type")]
    pub record_type: &'static str,
    pub operation: &'a ConfiguredOperation,
    #[serde(rename = "partition-key-type")]
    pub partition_key_type: &'static str,
    #[serde(rename = "schema-name")]
    pub schema_name: &'a str,
    #[serde(rename = "table-name")]
    pub table_name: &'a str,
}

impl<'a> Envelope<'a> {
    pub fn new(
        record: &'a Value,
        schema: &'a str,
        table: &'a str,
        operation: &'a ConfiguredOperation,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            data: record,
            metadata: Metadata {
                timestamp: format_timestamp(at),
                record_type: RECORD_TYPE,
                operation,
                partition_key_type: PARTITION_KEY_TYPE,
                schema_name: schema,
                table_name: table,
            },
        }
    }

    /// Base64 of the JSON serialization
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(json))
    }
}

/// `YYYY-MM-DDTHH:MM:SS.ffffZ` with four fractional digits.
///
/// The time is always UTC, so the `Z` is accurate, and the fraction is real
/// ten-thousandths rather than milliseconds padded with a zero.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    // chrono only offers 3, 6 or 9 fractional digits; leap seconds exceed 10^6 us
    let ten_thousandths = (at.timestamp_subsec_micros() / 100).min(9_999);
    format!("{}.{:04}Z", at.format("%Y-%m-%dT%H:%M:%S"), ten_thousandths)
}

/// Encode `record` as a payload stamped with the current time.
pub fn generate_payload(
    record: &Value,
    schema: &str,
    table: &str,
    operation: &ConfiguredOperation,
) -> Result<String, serde_json::Error> {
    Envelope::new(record, schema, table, operation, Utc::now()).encode()
}
