//! Observability
//!
//! Structured JSON-line logging for the service. Logging never fails the
//! caller; write errors are dropped.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log `event` at its default severity.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
