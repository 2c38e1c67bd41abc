//! Observability for primdb
//!
//! Structured JSON log lines on stderr plus an operation timer. Logging is
//! read-only: it never changes the outcome of a command.

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::Timer;

/// Log a lifecycle event with fields at INFO level
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}

/// Log an event with fields at an explicit severity
pub fn log_event_at(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}
