//! Configuration
//!
//! Loaded from JSON. Unknown keys are rejected so a typo never silently
//! falls back to a default.

use serde::{Deserialize, Serialize};

use crate::errors::{ViewError, ViewResult};
use crate::matcher::MatchOptions;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

/// Configuration for views and pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Minimum severity written by the logger.
    pub log_level: Severity,
    /// Options used when building patterns.
    pub match_options: MatchOptions,
}

impl ViewConfig {
    /// Config that logs every view operation.
    pub fn verbose() -> Self {
        Self {
            log_level: Severity::Trace,
            ..Self::default()
        }
    }

    /// Parse configuration from a JSON document.
    pub fn from_json(input: &str) -> ViewResult<Self> {
        serde_json::from_str(input).map_err(|e| ViewError::InvalidConfig(e.to_string()))
    }

    /// Install the log threshold and the default match options.
    pub fn apply(&self) {
        Logger::set_min_severity(self.log_level);
        self.match_options.install();
        log_event_with_fields(
            Severity::Info,
            Event::ConfigLoaded,
            &[
                ("log_level", self.log_level.as_str()),
                (
                    "partial_arrays",
                    if self.match_options.partial_arrays { "true" } else { "false" },
                ),
            ],
        );
    }
}
