//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in recordset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded
    ConfigLoaded,
    /// Input records loaded from a file
    InputLoaded,

    // Schema
    /// Record inserted despite a missing schema key
    KeyMissing,
    /// Record rejected by a strict schema
    RecordRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputLoaded => "INPUT_LOADED",
            Event::KeyMissing => "COLLECTION_KEY_MISSING",
            Event::RecordRejected => "COLLECTION_RECORD_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
