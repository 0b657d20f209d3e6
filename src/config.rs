//! Collection configuration file
//!
//! A JSON document describing how records loaded from a file are
//! collected and paged:
//!
//! ```json
//! { "schema": ["forename", "surname"], "strict": false, "chunk_size": 10 }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collection::CollectionBuilder;
use crate::pagination::{IntoChunkSize, DEFAULT_CHUNK_SIZE};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How records are collected and paged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Required keys; no schema is bound when absent
    #[serde(default)]
    pub schema: Option<Vec<String>>,

    /// Reject records whose key set differs from `schema`
    #[serde(default)]
    pub strict: bool,

    /// Records per page; non-positive values fall back to the default
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i64,
}

fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE as i64
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            schema: None,
            strict: false,
            chunk_size: default_chunk_size(),
        }
    }
}

impl CollectionConfig {
    /// Loads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective page size after fallback
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.into_chunk_size()
    }

    /// A collection builder carrying this config's schema.
    pub fn builder(&self) -> CollectionBuilder {
        let builder = CollectionBuilder::new().strict(self.strict);
        match &self.schema {
            Some(fields) => builder.schema(fields.iter().cloned()),
            None => builder,
        }
    }
}
