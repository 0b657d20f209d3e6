//! Warning sinks
//!
//! A collection reports non-fatal schema problems through a `WarningSink`
//! instead of writing to a global console. The default sink forwards to the
//! structured `Logger`; `MemorySink` keeps messages for later inspection.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::events::Event;
use super::logger::Logger;

/// Receiver for warning text emitted by a collection.
pub trait WarningSink: Send + Sync {
    /// Report one warning. `message` is the exact, human-readable text.
    fn warn(&self, message: &str);
}

/// Sink that writes every warning to the structured logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        Logger::warn(Event::KeyMissing.as_str(), &[("message", message)]);
    }
}

/// Returns the process-wide default sink.
pub fn default_sink() -> Arc<dyn WarningSink> {
    static DEFAULT: OnceLock<Arc<LogSink>> = OnceLock::new();
    DEFAULT.get_or_init(|| Arc::new(LogSink)).clone()
}

/// In-memory sink that records every warning in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink already wrapped for sharing with collections.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// All messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of messages received.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded messages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WarningSink for MemorySink {
    fn warn(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}

impl fmt::Debug for dyn WarningSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WarningSink")
    }
}
