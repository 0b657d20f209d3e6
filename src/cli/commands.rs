//! CLI command implementations
//!
//! Each command loads the input file into a collection (validated against
//! the configured schema) and returns a JSON value to print. Records a
//! strict schema rejects are logged and counted; the command answers from
//! the accepted ones.

use serde_json::{json, Value};

use crate::collection::{Collection, CollectionError};
use crate::config::CollectionConfig;
use crate::observability::{log_event, Event, Logger};
use crate::pagination::{IntoChunkSize, PaginatedCollection};
use crate::record::Record;

use super::args::{Command, SourceArgs};
use super::errors::CliResult;
use super::io::{read_records, write_response};

/// Dispatch a parsed command and print its result.
pub fn run_command(command: Command) -> CliResult<()> {
    let data = match command {
        Command::Page { source, size, page: n } => page(&source, size.as_deref(), n)?,
        Command::Get { source, index } => get(&source, index)?,
        Command::Count { source } => count(&source)?,
    };

    write_response(data)
}

/// Input file contents after validation.
struct Loaded {
    collection: Collection,
    config: CollectionConfig,
    rejected: usize,
}

/// One page of records plus the cursor state.
pub fn page(source: &SourceArgs, size: Option<&str>, n: i64) -> CliResult<Value> {
    let Loaded {
        collection,
        config,
        rejected,
    } = load(source)?;

    let chunk_size = match size {
        Some(size) => size.into_chunk_size(),
        None => config.effective_chunk_size(),
    };

    let mut paged = PaginatedCollection::from_collection(collection, chunk_size);
    paged.page(n);

    Ok(json!({
        "items": paged.all().iter().map(Record::to_json).collect::<Vec<_>>(),
        "pages": paged.pages(),
        "chunk_size": paged.chunk_size(),
        "total": paged.len(),
        "rejected": rejected,
    }))
}

/// The record at a zero-based index of the accepted records.
pub fn get(source: &SourceArgs, index: usize) -> CliResult<Value> {
    let loaded = load(source)?;
    Ok(loaded.collection.get(index)?.to_json())
}

/// Number of records accepted and rejected.
pub fn count(source: &SourceArgs) -> CliResult<Value> {
    let loaded = load(source)?;
    Ok(json!({
        "count": loaded.collection.len(),
        "rejected": loaded.rejected,
    }))
}

fn load(source: &SourceArgs) -> CliResult<Loaded> {
    let mut config = match &source.config {
        Some(path) => {
            let config = CollectionConfig::load(path)?;
            let shown = path.display().to_string();
            log_event(Event::ConfigLoaded, &[("path", shown.as_str())]);
            config
        }
        None => CollectionConfig::default(),
    };

    if let Some(fields) = &source.schema {
        config.schema = Some(fields.clone());
    }
    if source.strict {
        config.strict = true;
    }

    let records = read_records(&source.input)?;
    let (collection, rejected) = match config.builder().build(records) {
        Ok(collection) => (collection, 0),
        Err(partial) => {
            let (collection, err) = partial.into_parts();
            log_rejections(&err);
            (collection, err.failures().len())
        }
    };

    let shown = source.input.display().to_string();
    let count = collection.len().to_string();
    let skipped = rejected.to_string();
    log_event(
        Event::InputLoaded,
        &[
            ("path", shown.as_str()),
            ("records", count.as_str()),
            ("rejected", skipped.as_str()),
        ],
    );

    Ok(Loaded {
        collection,
        config,
        rejected,
    })
}

fn log_rejections(err: &CollectionError) {
    for failure in err.failures() {
        let position = failure.position.to_string();
        let reason = failure.error.to_string();
        Logger::error(
            Event::RecordRejected.as_str(),
            &[("position", position.as_str()), ("reason", reason.as_str())],
        );
    }
}
