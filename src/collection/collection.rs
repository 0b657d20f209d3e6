//! Ordered record storage with optional schema enforcement

use std::slice;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{Map, Value};

use crate::observability::{default_sink, WarningSink};
use crate::record::{wrap, Record};
use crate::schema::{Schema, SchemaValidator};

use super::builder::CollectionBuilder;
use super::errors::{BatchFailure, CollectionError, CollectionResult};

/// An ordered collection of records.
///
/// Insertion order is the iteration order. Records are wrapped on insertion
/// (nested arrays of records become child collections) and, when a schema is
/// bound, validated before they are appended.
///
/// Mutating methods return `&mut Self` so calls can be chained:
///
/// ```
/// use recordset::Collection;
/// use serde_json::json;
///
/// let mut family = Collection::new();
/// let likes = family
///     .add_item(json!({"name": "Steven", "likes": [{"name": "Cheese"}, {"name": "Wine"}]}))?
///     .get(0)?
///     .collection("likes")
///     .map(|likes| likes.len());
///
/// assert_eq!(likes, Some(2));
/// # Ok::<(), recordset::CollectionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    items: Vec<Record>,
    schema: Option<Schema>,
    sink: Arc<dyn WarningSink>,
}

impl Collection {
    /// Create an empty collection reporting to the default sink.
    pub fn new() -> Self {
        Self::with_sink(default_sink())
    }

    /// Create an empty collection reporting warnings to `sink`.
    pub fn with_sink(sink: Arc<dyn WarningSink>) -> Self {
        Self {
            items: Vec::new(),
            schema: None,
            sink,
        }
    }

    /// Start building a collection with a schema or custom sink.
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    /// Create a collection from plain records without a schema.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let sink = default_sink();
        let items = records.into_iter().map(|fields| wrap(fields, &sink)).collect();
        Self::from_wrapped(items, sink)
    }

    /// Create a collection from a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if `value` is not an array or any element is
    /// not an object.
    pub fn from_json(value: Value) -> CollectionResult<Self> {
        match value {
            Value::Array(items) => {
                let records = items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(fields) => Ok(fields),
                        other => Err(CollectionError::invalid_record(&other)),
                    })
                    .collect::<CollectionResult<Vec<_>>>()?;
                Ok(Self::from_records(records))
            }
            other => Err(CollectionError::invalid_record(&other)),
        }
    }

    pub(crate) fn from_wrapped(items: Vec<Record>, sink: Arc<dyn WarningSink>) -> Self {
        Self {
            items,
            schema: None,
            sink,
        }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.items
    }

    /// Record at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> CollectionResult<&Record> {
        self.items.get(index).ok_or(CollectionError::NotFound {
            index,
            len: self.items.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.items.iter()
    }

    /// Inserts a single record (JSON object) or a batch (JSON array).
    ///
    /// Each record in a batch is validated on its own: a rejected record does
    /// not stop the others from being inserted.
    ///
    /// # Errors
    ///
    /// - `SchemaMismatch` for a single record rejected by a strict schema
    /// - `InvalidRecord` if `item` is neither an object nor an array
    /// - `BatchRejected` if any record of a batch was rejected
    pub fn add_item(&mut self, item: Value) -> CollectionResult<&mut Self> {
        match item {
            Value::Object(fields) => self.add_record(fields),
            Value::Array(items) => self.insert_batch(items),
            other => Err(CollectionError::invalid_record(&other)),
        }
    }

    /// Inserts one record.
    pub fn add_record(&mut self, fields: Map<String, Value>) -> CollectionResult<&mut Self> {
        self.insert(fields)?;
        Ok(self)
    }

    /// Inserts a batch of records, isolating failures per record.
    pub fn add_records<I>(&mut self, records: I) -> CollectionResult<&mut Self>
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        self.insert_batch(records.into_iter().map(Value::Object))
    }

    /// Binds a non-strict schema for subsequent insertions.
    ///
    /// The required keys form a set: a name given more than once is kept
    /// once, so the bound schema holds one entry per distinct name. Existing
    /// records are not re-validated.
    pub fn schema<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bind_schema(Schema::lenient(fields))
    }

    /// Binds a strict schema for subsequent insertions.
    pub fn strict_schema<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bind_schema(Schema::strict(fields))
    }

    /// Binds or replaces the schema.
    pub fn bind_schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    /// The schema currently bound, if any
    pub fn bound_schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn sink(&self) -> &Arc<dyn WarningSink> {
        &self.sink
    }

    /// Converts back to a JSON array of plain objects.
    pub fn to_json(&self) -> Value {
        Value::Array(self.items.iter().map(Record::to_json).collect())
    }

    fn insert(&mut self, fields: Map<String, Value>) -> CollectionResult<()> {
        let record = wrap(fields, &self.sink);

        if let Some(schema) = &self.schema {
            let keys: Vec<&str> = record.keys().collect();
            SchemaValidator::new(schema).validate(&keys, self.sink.as_ref())?;
        }

        self.items.push(record);
        Ok(())
    }

    fn insert_batch<I>(&mut self, items: I) -> CollectionResult<&mut Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut inserted = 0;
        let mut failures = Vec::new();

        for (position, item) in items.into_iter().enumerate() {
            let result = match item {
                Value::Object(fields) => self.insert(fields),
                other => Err(CollectionError::invalid_record(&other)),
            };

            match result {
                Ok(()) => inserted += 1,
                Err(error) => failures.push(BatchFailure { position, error }),
            }
        }

        if !failures.is_empty() {
            return Err(CollectionError::BatchRejected { inserted, failures });
        }

        Ok(self)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.schema == other.schema
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for record in &self.items {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MemorySink;
    use serde_json::json;

    fn family() -> Value {
        json!([
            {"forename": "Mary", "surname": "Lamb", "age": 45, "email": "mary.lamb@family.com"},
            {"forename": "Lucy", "surname": "Lamb", "age": 43, "email": "lucy.lamb@family.com"},
            {
                "forename": "Steven", "surname": "Lamb", "age": 12,
                "email": "steven.lamb@family.com",
                "likes": [{"name": "Cheese"}, {"name": "Wine"}]
            }
        ])
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_from_json_keeps_all_records() {
        let collection = Collection::from_json(family()).unwrap();

        assert_eq!(collection.all().len(), 3);
        assert_eq!(collection.get(0).unwrap().value("forename"), Some(&json!("Mary")));
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Collection::from_json(json!({"a": 1})).unwrap_err();
        assert_eq!(err.code(), "COLLECTION_INVALID_RECORD");

        let err = Collection::from_json(json!([{"a": 1}, 2])).unwrap_err();
        assert_eq!(err, CollectionError::InvalidRecord { found: "number" });
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::new();

        assert!(collection.is_empty());
        assert!(collection.all().is_empty());
        assert!(collection.bound_schema().is_none());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let collection = Collection::from_json(family()).unwrap();

        assert_eq!(
            collection.get(3).unwrap_err(),
            CollectionError::NotFound { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_add_single_item() {
        let mut collection = Collection::from_json(family()).unwrap();

        collection
            .add_item(json!({"forename": "Joseph", "surname": "Pearson", "age": 87}))
            .unwrap();

        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_add_batch() {
        let mut collection = Collection::from_json(family()).unwrap();

        collection
            .add_item(json!([{"forename": "Joseph"}, {"forename": "Bob"}]))
            .unwrap();

        assert_eq!(collection.len(), 5);
        assert_eq!(collection.get(4).unwrap().value("forename"), Some(&json!("Bob")));
    }

    #[test]
    fn test_add_item_rejects_scalar() {
        let mut collection = Collection::new();

        let err = collection.add_item(json!(42)).unwrap_err();

        assert_eq!(err.code(), "COLLECTION_INVALID_RECORD");
        assert!(collection.is_empty());
    }

    #[test]
    fn test_nested_records_readable_after_chained_insert() {
        let mut collection = Collection::from_json(family()).unwrap();

        let added = collection
            .add_item(json!({
                "forename": "Joseph",
                "dislikes": ["cheese"],
                "likes": [{"name": "Cars"}, {"name": "Coffee"}]
            }))
            .unwrap();

        let coffee = added.get(3).unwrap().collection("likes").unwrap().get(1).unwrap();
        assert_eq!(coffee.value("name"), Some(&json!("Coffee")));

        let wine = added.get(2).unwrap().collection("likes").unwrap().get(1).unwrap();
        assert_eq!(wine.value("name"), Some(&json!("Wine")));

        assert_eq!(added.get(3).unwrap().value("dislikes"), Some(&json!(["cheese"])));
    }

    #[test]
    fn test_schema_is_fluent_and_lenient_by_default() {
        let mut collection = Collection::from_json(family()).unwrap();

        let schema = collection
            .schema(["forename", "surname", "age", "email"])
            .bound_schema()
            .unwrap();

        assert_eq!(schema.len(), 4);
        assert!(!schema.is_strict());
    }

    #[test]
    fn test_schema_repeated_key_bound_once() {
        let sink = MemorySink::shared();
        let mut collection = Collection::with_sink(sink.clone());

        let schema = collection.schema(["id", "id", "name"]).bound_schema().unwrap();
        assert_eq!(schema.fields(), ["id", "name"]);

        collection.add_item(json!({"name": "a"})).unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Collection: key \"id\" missing from collection."]
        );
    }

    #[test]
    fn test_schema_not_retroactive() {
        let sink = MemorySink::shared();
        let mut collection = Collection::with_sink(sink.clone());
        collection.add_item(json!({"forename": "Mary"})).unwrap();

        collection.strict_schema(["forename", "surname"]);

        assert_eq!(collection.len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_key_warns_and_inserts() {
        let sink = MemorySink::shared();
        let mut collection = Collection::with_sink(sink.clone());
        collection.schema(["forename", "surname", "age", "email"]);

        collection
            .add_item(json!({"forename": "Florance", "surname": "Pearson", "age": 89}))
            .unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(
            sink.messages(),
            vec!["Collection: key \"email\" missing from collection."]
        );
    }

    #[test]
    fn test_strict_mismatch_rejects_record() {
        let mut collection = Collection::from_json(family()).unwrap();
        collection.strict_schema(["forename", "surname", "age", "email"]);

        let err = collection
            .add_item(json!({"forename": "Florance", "surname": "Pearson", "age": 89}))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Collection: Schema in strict mode -- keys do not match. \
             Expecting: age,email,forename,surname  - given; age,forename,surname"
        );
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_strict_batch_isolates_failures() {
        let mut collection = Collection::new();
        collection.strict_schema(["id", "name"]);

        let err = collection
            .add_item(json!([
                {"id": 1, "name": "a"},
                {"id": 2},
                "not a record",
                {"id": 3, "name": "c"}
            ]))
            .unwrap_err();

        assert_eq!(collection.len(), 2);
        match err {
            CollectionError::BatchRejected { inserted, failures } => {
                assert_eq!(inserted, 2);
                let positions: Vec<usize> = failures.iter().map(|f| f.position).collect();
                assert_eq!(positions, vec![1, 2]);
                assert_eq!(failures[0].error.code(), "COLLECTION_SCHEMA_MISMATCH");
                assert_eq!(failures[1].error.code(), "COLLECTION_INVALID_RECORD");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_children_share_parent_sink() {
        let sink = MemorySink::shared();
        let mut collection = Collection::with_sink(sink.clone());
        collection.add_item(json!({"likes": [{"name": "Cheese"}]})).unwrap();

        let likes = collection.get(0).unwrap().collection("likes").unwrap();
        let shared: Arc<dyn WarningSink> = sink;
        assert!(Arc::ptr_eq(likes.sink(), &shared));
    }

    #[test]
    fn test_add_records_typed() {
        let mut collection = Collection::new();

        collection
            .add_records(vec![object(json!({"a": 1})), object(json!({"a": 2}))])
            .unwrap()
            .add_record(object(json!({"a": 3})))
            .unwrap();

        let values: Vec<_> = collection.iter().filter_map(|r| r.value("a")).collect();
        assert_eq!(values, vec![&json!(1), &json!(2), &json!(3)]);
    }

    #[test]
    fn test_to_json_round_trips_input() {
        let collection = Collection::from_json(family()).unwrap();

        assert_eq!(collection.to_json(), family());
        assert_eq!(serde_json::to_value(&collection).unwrap(), family());
    }
}
