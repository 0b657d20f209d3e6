//! Schema error types

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Strict schema and record key sets differ. Both lists are sorted.
    #[error(
        "Collection: Schema in strict mode -- keys do not match. Expecting: {}  - given; {}",
        .expected.join(","),
        .given.join(",")
    )]
    Mismatch {
        expected: Vec<String>,
        given: Vec<String>,
    },
}

impl SchemaError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::Mismatch { .. } => "COLLECTION_SCHEMA_MISMATCH",
        }
    }
}
