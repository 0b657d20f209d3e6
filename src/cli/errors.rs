//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::collection::CollectionError;
use crate::config::ConfigError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("cannot read input '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input '{}': {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(_) => "RECORDSET_CLI_CONFIG_ERROR",
            CliError::Collection(err) => err.code(),
            CliError::Input { .. } | CliError::MalformedInput { .. } => "RECORDSET_CLI_INPUT_ERROR",
            CliError::Output(_) | CliError::Encode(_) => "RECORDSET_CLI_IO_ERROR",
        }
    }
}
