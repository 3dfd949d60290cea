//! Observability for casualdb
//!
//! Structured JSON logging of view operations. Observability is read-only:
//! it never changes what an operation returns, and record contents are never
//! written to the log, only counts.
//!
//! ```ignore
//! use casualdb::observability::{log_event_with_fields, Event, Severity};
//!
//! log_event_with_fields(Severity::Trace, Event::FindComplete, &[("scanned", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event without fields
pub fn log_event(severity: Severity, event: Event) {
    Logger::log(severity, event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}

/// Log an event whose fields are counts
///
/// Formatting is skipped entirely when the event is below the threshold.
pub fn log_counts(event: Event, counts: &[(&str, usize)]) {
    if !Logger::enabled(Severity::Trace) {
        return;
    }
    let rendered = render_counts(counts);
    let fields: Vec<(&str, &str)> = rendered.iter().map(|(k, v)| (*k, v.as_str())).collect();
    Logger::trace(event.as_str(), &fields);
}

fn render_counts<'k>(counts: &[(&'k str, usize)]) -> Vec<(&'k str, String)> {
    counts.iter().map(|(k, v)| (*k, v.to_string())).collect()
}
