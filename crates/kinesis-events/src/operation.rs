//! The change operation stamped on every envelope.

use crate::error::GeneratorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of change being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Load,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Load,
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
    ];

    /// Name written into `metadata.operation`
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeneratorError::InvalidOperation(s.to_string()))
    }
}

/// A validated operation together with the text it was configured as.
///
/// The envelope carries the configured text unchanged, so `INSERT` and
/// `insert` both validate but end up on the wire as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ConfiguredOperation {
    kind: Operation,
    name: String,
}

impl ConfiguredOperation {
    pub fn kind(&self) -> Operation {
        self.kind
    }

    /// Text written into `metadata.operation`
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl From<Operation> for ConfiguredOperation {
    fn from(kind: Operation) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
        }
    }
}

impl From<ConfiguredOperation> for String {
    fn from(operation: ConfiguredOperation) -> Self {
        operation.name
    }
}

impl fmt::Display for ConfiguredOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ConfiguredOperation {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            kind: s.parse()?,
            name: s.to_string(),
        })
    }
}

/// Validate a user supplied operation name (case-insensitive).
///
/// The spelling is kept as given. Usable directly as a clap `value_parser`.
pub fn validate_operation(operation: &str) -> Result<ConfiguredOperation, GeneratorError> {
    operation.parse()
}

/// Upper-case, comma separated list used in error messages
pub(crate) fn valid_operations() -> String {
    Operation::ALL
        .iter()
        .map(|op| op.as_str().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_operation_is_case_insensitive() {
        assert_eq!(validate_operation("insert").unwrap().kind(), Operation::Insert);
        assert_eq!(validate_operation("INSERT").unwrap().kind(), Operation::Insert);
        assert_eq!(validate_operation("Delete").unwrap().kind(), Operation::Delete);
        assert_eq!(validate_operation("load").unwrap().kind(), Operation::Load);
        assert_eq!(validate_operation("uPdAtE").unwrap().kind(), Operation::Update);
    }

    #[test]
    fn test_validate_operation_keeps_configured_spelling() {
        let operation = validate_operation("INSERT").unwrap();

        assert_eq!(operation.as_str(), "INSERT");
        assert_eq!(operation.to_string(), "INSERT");
        assert_eq!(
            serde_json::to_value(&operation).unwrap(),
            serde_json::json!("INSERT")
        );
        assert_eq!(ConfiguredOperation::from(Operation::Delete).as_str(), "delete");
    }

    #[test]
    fn test_validate_operation_lists_valid_values() {
        let err = validate_operation("FOO").unwrap_err();

        assert!(matches!(err, GeneratorError::InvalidOperation(ref op) if op == "FOO"));
        assert_eq!(
            err.to_string(),
            "Invalid operation FOO. Please make sure to select one of the following: \
             [LOAD, INSERT, UPDATE, DELETE]"
        );
    }

    #[test]
    fn test_validate_operation_rejects_empty() {
        assert!(validate_operation("").is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        let value = serde_json::to_value(Operation::Update).unwrap();
        assert_eq!(value, serde_json::json!("update"));
        assert_eq!(Operation::Load.to_string(), "load");
    }
}
