//! Collection construction with an initial schema and sink

use std::sync::Arc;

use serde_json::Value;

use crate::observability::{default_sink, WarningSink};
use crate::schema::Schema;

use super::collection::Collection;
use super::errors::PartialBuild;

/// Builds a `Collection` whose schema is bound before the initial records
/// are inserted, so they are validated like any later insertion.
///
/// ```
/// use recordset::Collection;
/// use serde_json::json;
///
/// let collection = Collection::builder()
///     .schema(["id", "name"])
///     .strict(true)
///     .build([json!({"id": 1, "name": "a"})])?;
///
/// assert_eq!(collection.len(), 1);
/// # Ok::<(), recordset::CollectionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CollectionBuilder {
    fields: Option<Vec<String>>,
    strict: bool,
    sink: Arc<dyn WarningSink>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self {
            fields: None,
            strict: false,
            sink: default_sink(),
        }
    }

    /// Required keys for the schema bound at construction.
    pub fn schema<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Strictness of the schema. Ignored when no schema fields are given.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sink for schema warnings, shared with child collections.
    pub fn sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Builds the collection from initial records.
    ///
    /// # Errors
    ///
    /// Returns `PartialBuild` if any initial record is not an object or is
    /// rejected by a strict schema. It wraps a `BatchRejected` error and
    /// still holds the collection of accepted records.
    pub fn build<I>(self, records: I) -> Result<Collection, PartialBuild>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut collection = Collection::with_sink(self.sink);

        if let Some(fields) = self.fields {
            collection.bind_schema(Schema::new(fields, self.strict));
        }

        match collection.add_item(Value::Array(records.into_iter().collect())) {
            Ok(_) => Ok(collection),
            Err(err) => Err(PartialBuild::new(collection, err)),
        }
    }
}

impl Default for CollectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionError;
    use crate::observability::MemorySink;
    use serde_json::json;

    #[test]
    fn test_build_without_schema() {
        let collection = CollectionBuilder::new()
            .build([json!({"a": 1}), json!({"b": 2})])
            .unwrap();

        assert_eq!(collection.len(), 2);
        assert!(collection.bound_schema().is_none());
    }

    #[test]
    fn test_build_empty() {
        let collection = CollectionBuilder::new().build(Vec::new()).unwrap();

        assert!(collection.is_empty());
    }

    #[test]
    fn test_initial_records_validated_leniently() {
        let sink = MemorySink::shared();

        let collection = CollectionBuilder::new()
            .schema(["id", "name"])
            .sink(sink.clone())
            .build([json!({"id": 1}), json!({"id": 2, "name": "b"})])
            .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(
            sink.messages(),
            vec!["Collection: key \"name\" missing from collection."]
        );
    }

    #[test]
    fn test_initial_records_rejected_strictly() {
        let partial = CollectionBuilder::new()
            .schema(["id", "name"])
            .strict(true)
            .build([json!({"id": 1}), json!({"id": 2, "name": "b"})])
            .unwrap_err();

        match partial.error() {
            CollectionError::BatchRejected { inserted, failures } => {
                assert_eq!(*inserted, 1);
                assert_eq!(failures[0].position, 0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_strict_build_keeps_accepted_records() {
        let partial = CollectionBuilder::new()
            .schema(["id", "name"])
            .strict(true)
            .build([
                json!({"id": 1, "name": "a"}),
                json!({"id": 2}),
                json!({"id": 3, "name": "c"}),
            ])
            .unwrap_err();

        assert_eq!(partial.error().failures().len(), 1);
        assert_eq!(partial.error().failures()[0].position, 1);

        let mut collection = partial.into_collection();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().value("id"), Some(&json!(3)));
        assert!(collection.bound_schema().unwrap().is_strict());

        collection.add_item(json!({"id": 4, "name": "d"})).unwrap();
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_partial_build_converts_to_batch_error() {
        let partial = CollectionBuilder::new()
            .build([json!({"id": 1}), json!(7)])
            .unwrap_err();
        assert_eq!(partial.collection().len(), 1);

        let err = CollectionError::from(partial);

        assert_eq!(err.code(), "COLLECTION_BATCH_REJECTED");
        assert_eq!(err.failures()[0].error.code(), "COLLECTION_INVALID_RECORD");
    }

    #[test]
    fn test_strict_without_fields_binds_nothing() {
        let collection = CollectionBuilder::new()
            .strict(true)
            .build([json!({"anything": true})])
            .unwrap();

        assert!(collection.bound_schema().is_none());
    }
}
