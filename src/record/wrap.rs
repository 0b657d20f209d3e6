//! Recursive wrapping of nested record arrays
//!
//! Applied once at insertion time, depth-first. Children are owned by the
//! parent record; nothing refers back to the caller's input.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::collection::Collection;
use crate::observability::WarningSink;

use super::{FieldValue, Record};

/// True for a non-empty array whose every element is a JSON object.
pub fn is_record_array(value: &Value) -> bool {
    match value {
        Value::Array(items) => all_records(items),
        _ => false,
    }
}

fn all_records(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_object)
}

/// Converts a plain JSON object into a `Record`.
///
/// Every field holding an array of records becomes a child collection that
/// shares `sink`, wrapped the same way to any depth.
pub fn wrap(fields: Map<String, Value>, sink: &Arc<dyn WarningSink>) -> Record {
    let fields = fields
        .into_iter()
        .map(|(key, value)| (key, wrap_value(value, sink)))
        .collect::<BTreeMap<_, _>>();

    Record::from_fields(fields)
}

fn wrap_value(value: Value, sink: &Arc<dyn WarningSink>) -> FieldValue {
    match value {
        Value::Array(items) if all_records(&items) => {
            let records = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(wrap(map, sink)),
                    _ => None,
                })
                .collect();

            FieldValue::Collection(Collection::from_wrapped(records, Arc::clone(sink)))
        }
        other => FieldValue::Value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::default_sink;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_is_record_array() {
        assert!(is_record_array(&json!([{"a": 1}, {"b": 2}])));
        assert!(!is_record_array(&json!([])));
        assert!(!is_record_array(&json!(["cheese"])));
        assert!(!is_record_array(&json!([{"a": 1}, 2])));
        assert!(!is_record_array(&json!({"a": 1})));
        assert!(!is_record_array(&json!("text")));
    }

    #[test]
    fn test_record_array_becomes_collection() {
        let record = wrap(
            object(json!({"likes": [{"name": "Cars"}, {"name": "Coffee"}]})),
            &default_sink(),
        );

        let likes = record.collection("likes").unwrap();
        assert_eq!(likes.len(), 2);
        assert_eq!(likes.get(1).unwrap().value("name"), Some(&json!("Coffee")));
    }

    #[test]
    fn test_scalar_array_kept_raw() {
        let record = wrap(object(json!({"dislikes": ["cheese"]})), &default_sink());

        assert_eq!(record.value("dislikes"), Some(&json!(["cheese"])));
    }

    #[test]
    fn test_nested_object_kept_raw() {
        let record = wrap(
            object(json!({"address": {"rooms": [{"name": "kitchen"}]}})),
            &default_sink(),
        );

        assert_eq!(
            record.value("address"),
            Some(&json!({"rooms": [{"name": "kitchen"}]}))
        );
    }

    #[test]
    fn test_wrapping_is_recursive() {
        let record = wrap(
            object(json!({
                "level": 1,
                "children": [{
                    "level": 2,
                    "children": [{
                        "level": 3,
                        "children": [{"level": 4}]
                    }]
                }]
            })),
            &default_sink(),
        );

        let level4 = record
            .collection("children")
            .and_then(|c| c.get(0).ok())
            .and_then(|r| r.collection("children"))
            .and_then(|c| c.get(0).ok())
            .and_then(|r| r.collection("children"))
            .and_then(|c| c.get(0).ok())
            .unwrap();

        assert_eq!(level4.value("level"), Some(&json!(4)));
    }
}
