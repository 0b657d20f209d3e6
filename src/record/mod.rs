//! Records held by a collection
//!
//! A `Record` maps field names to `FieldValue`s. Fields whose input value was
//! an array of JSON objects are stored as child `Collection`s; every other
//! value is kept unchanged.

mod wrap;

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::collection::Collection;

pub use wrap::{is_record_array, wrap};

/// A single field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalars, objects, and arrays that are not arrays of records
    Value(Value),
    /// Child collection built from an array of records
    Collection(Collection),
}

impl FieldValue {
    /// Returns the raw JSON value, if this field was not wrapped.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(value) => Some(value),
            FieldValue::Collection(_) => None,
        }
    }

    /// Returns the child collection, if this field was wrapped.
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            FieldValue::Collection(collection) => Some(collection),
            FieldValue::Value(_) => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, FieldValue::Collection(_))
    }

    /// Converts back to plain JSON, unwrapping child collections.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Value(value) => value.clone(),
            FieldValue::Collection(collection) => collection.to_json(),
        }
    }
}

/// A key/value entity stored in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub(crate) fn from_fields(fields: BTreeMap<String, FieldValue>) -> Self {
        Self { fields }
    }

    /// Field by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Raw JSON value of a field that was not wrapped
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(FieldValue::as_value)
    }

    /// Child collection of a wrapped field
    pub fn collection(&self, key: &str) -> Option<&Collection> {
        self.get(key).and_then(FieldValue::as_collection)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts back to a plain JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, field)| (key.clone(), field.to_json()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
