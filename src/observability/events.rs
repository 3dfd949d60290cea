//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events emitted by views and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A find scan finished
    FindComplete,
    /// A find-and-update pass built a new collection
    UpdateComplete,
    /// An insert built a new collection
    InsertComplete,
    /// A filter pass built a new collection
    FilterComplete,
    /// A pattern value was not a JSON object
    PatternRejected,
    /// A record could not be observed as JSON during matching
    RecordUnserializable,
    /// Configuration parsed and installed
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::FindComplete => "FIND_COMPLETE",
            Event::UpdateComplete => "UPDATE_COMPLETE",
            Event::InsertComplete => "INSERT_COMPLETE",
            Event::FilterComplete => "FILTER_COMPLETE",
            Event::PatternRejected => "PATTERN_REJECTED",
            Event::RecordUnserializable => "RECORD_UNSERIALIZABLE",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
