//! Schema type definitions

/// A required-key set bound to a collection.
///
/// Keys keep their declaration order, which is the order warnings are
/// reported in. Duplicate names are collapsed to their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
    strict: bool,
}

impl Schema {
    /// Create a schema from field names.
    pub fn new<I, S>(fields: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        Self {
            fields: unique,
            strict,
        }
    }

    /// Create a non-strict schema.
    pub fn lenient<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(fields, false)
    }

    /// Create a strict schema.
    pub fn strict<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(fields, true)
    }

    /// Required keys in declaration order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of required keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Required keys in sorted order
    pub fn sorted_fields(&self) -> Vec<String> {
        let mut sorted = self.fields.clone();
        sorted.sort();
        sorted
    }
}
