//! JSON I/O handling for the CLI
//!
//! - Input: a file holding one JSON array of records
//! - Output: a single JSON object on stdout

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::collection::CollectionError;

use super::errors::{CliError, CliResult};

/// Reads a JSON array of records from `path`.
pub fn read_records(path: &Path) -> CliResult<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| CliError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        other => Err(CollectionError::invalid_record(&other).into()),
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    write_line(&response)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    write_line(&response)
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
