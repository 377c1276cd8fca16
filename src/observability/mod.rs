//! Observability for predsql
//!
//! Structured JSON logging of translation events. Logging is read-only with
//! respect to translation: it never changes a result and never fails a call.
//!
//! # Usage
//!
//! ```ignore
//! use predsql::observability::{Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
