//! Observable events
//!
//! Every log line carries one of these as its `event` key.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// HTTP listener about to bind
    ServerStarting,
    /// File store opened and verified
    StoreOpened,
    /// A validated school was stored
    SchoolAdded,
    /// A ranking request was answered
    SchoolsRanked,
    /// Caller input rejected by validation
    ValidationRejected,
    /// The store failed a request
    StoreFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "config_loaded",
            Event::ServerStarting => "server_starting",
            Event::StoreOpened => "store_opened",
            Event::SchoolAdded => "school_added",
            Event::SchoolsRanked => "schools_ranked",
            Event::ValidationRejected => "validation_rejected",
            Event::StoreFailed => "store_error",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ValidationRejected => Severity::Warn,
            Event::StoreFailed => Severity::Error,
            Event::SchoolsRanked => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
