//! Observability for recordset
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Injectable warning sinks for schema warnings
//!
//! # Usage
//!
//! ```
//! use recordset::observability::{Logger, MemorySink, WarningSink};
//!
//! Logger::info("INPUT_LOADED", &[("records", "42")]);
//!
//! let sink = MemorySink::new();
//! sink.warn("something to report");
//! assert_eq!(sink.len(), 1);
//! ```

mod events;
mod logger;
mod sink;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use sink::{default_sink, LogSink, MemorySink, WarningSink};

/// Log a lifecycle event at INFO
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Info, event.as_str(), fields);
}
