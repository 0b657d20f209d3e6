//! Collection error types
//!
//! Error codes:
//! - COLLECTION_NOT_FOUND
//! - COLLECTION_SCHEMA_MISMATCH
//! - COLLECTION_INVALID_RECORD
//! - COLLECTION_BATCH_REJECTED

use serde_json::Value;
use thiserror::Error;

use crate::schema::SchemaError;

use super::collection::Collection;

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// A record rejected from a batch insertion
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Zero-based position of the record within the batch
    pub position: usize,
    /// Why the record was rejected
    pub error: CollectionError,
}

/// Collection errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectionError {
    #[error("Collection: no item at index {index} (length {len})")]
    NotFound { index: usize, len: usize },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Collection: expected a record object or an array of records, got {found}")]
    InvalidRecord { found: &'static str },

    /// One or more records of a batch were rejected; the rest were inserted.
    #[error(
        "Collection: {} record(s) rejected from batch, {} inserted",
        .failures.len(),
        .inserted
    )]
    BatchRejected {
        inserted: usize,
        failures: Vec<BatchFailure>,
    },
}

impl CollectionError {
    pub(crate) fn invalid_record(value: &Value) -> Self {
        CollectionError::InvalidRecord {
            found: json_type_name(value),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CollectionError::NotFound { .. } => "COLLECTION_NOT_FOUND",
            CollectionError::Schema(err) => err.code(),
            CollectionError::InvalidRecord { .. } => "COLLECTION_INVALID_RECORD",
            CollectionError::BatchRejected { .. } => "COLLECTION_BATCH_REJECTED",
        }
    }

    /// Per-record failures of a batch insertion, empty for other errors
    pub fn failures(&self) -> &[BatchFailure] {
        match self {
            CollectionError::BatchRejected { failures, .. } => failures.as_slice(),
            _ => &[],
        }
    }
}

/// Initial records rejected while building a collection.
///
/// The records that passed validation are kept and can be taken back with
/// `into_collection`. Converting into `CollectionError` drops them.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct PartialBuild {
    collection: Collection,
    error: CollectionError,
}

impl PartialBuild {
    pub(crate) fn new(collection: Collection, error: CollectionError) -> Self {
        Self { collection, error }
    }

    /// The collection holding every accepted record
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn error(&self) -> &CollectionError {
        &self.error
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }

    pub fn into_parts(self) -> (Collection, CollectionError) {
        (self.collection, self.error)
    }
}

impl From<PartialBuild> for CollectionError {
    fn from(partial: PartialBuild) -> Self {
        partial.error
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
