//! Key-presence validation
//!
//! Non-strict: `missing = required - given`, one warning per missing key in
//! declaration order, never fails.
//!
//! Strict: sorted required keys must equal sorted given keys. Missing and
//! extra keys both reject.

use crate::observability::WarningSink;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;

/// Warning text for a key absent from a record under a non-strict schema.
pub fn missing_key_message(key: &str) -> String {
    format!("Collection: key \"{}\" missing from collection.", key)
}

/// Validates record key sets against a bound schema.
///
/// The validator does not mutate records.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Required keys not present in `keys`, in declaration order.
    pub fn missing_keys(&self, keys: &[&str]) -> Vec<&'a str> {
        self.schema
            .fields()
            .iter()
            .map(String::as_str)
            .filter(|field| !keys.contains(field))
            .collect()
    }

    /// Validates a record's own key set.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Mismatch` if the schema is strict and the key
    /// sets differ. Non-strict problems are reported to `sink` instead.
    pub fn validate(&self, keys: &[&str], sink: &dyn WarningSink) -> SchemaResult<()> {
        if self.schema.is_strict() {
            return self.validate_strict(keys);
        }

        for key in self.missing_keys(keys) {
            sink.warn(&missing_key_message(key));
        }

        Ok(())
    }

    fn validate_strict(&self, keys: &[&str]) -> SchemaResult<()> {
        let expected = self.schema.sorted_fields();

        let mut given: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        given.sort();
        given.dedup();

        if expected != given {
            return Err(SchemaError::Mismatch { expected, given });
        }

        Ok(())
    }
}
