//! Partial-object patterns

use serde::Serialize;
use serde_json::{Map, Value};

use super::filters::{MatchOptions, PredicateFilter};
use super::id::RecordId;
use crate::errors::{ViewError, ViewResult};
use crate::observability::{log_event_with_fields, Event, Severity};

/// A partial-object pattern such as `{"id": 1}`.
///
/// A record matches when its JSON form carries every key of the pattern with
/// a matching value (see [`PredicateFilter`]). New patterns take the
/// process-wide [`MatchOptions::current`] unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    fields: Map<String, Value>,
    options: MatchOptions,
}

impl Pattern {
    /// Builds a pattern from a JSON object.
    ///
    /// Anything other than an object is rejected.
    pub fn from_value(value: Value) -> ViewResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                options: MatchOptions::current(),
            }),
            other => {
                let kind = json_kind(&other);
                log_event_with_fields(Severity::Warn, Event::PatternRejected, &[("kind", kind)]);
                Err(ViewError::InvalidPattern(format!(
                    "expected object, got {}",
                    kind
                )))
            }
        }
    }

    /// Builds a pattern from any serializable partial record.
    pub fn from_serialize<P: Serialize>(partial: &P) -> ViewResult<Self> {
        Self::from_value(serde_json::to_value(partial)?)
    }

    /// Single-key pattern `{field: value}`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::default().and(field, value)
    }

    /// The `{id}` pattern.
    pub fn by_id(id: impl Into<RecordId>) -> Self {
        let id: RecordId = id.into();
        Self::eq("id", id)
    }

    /// Adds a key to the pattern, replacing any previous value for it.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tests a JSON document against this pattern.
    pub fn matches_value(&self, document: &Value) -> bool {
        PredicateFilter::matches(document, &self.fields, self.options)
    }

    /// Tests a record against this pattern.
    ///
    /// A record that fails to serialize never matches a non-empty pattern.
    pub fn matches<T: Serialize + ?Sized>(&self, record: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        match serde_json::to_value(record) {
            Ok(document) => self.matches_value(&document),
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Severity::Warn,
                    Event::RecordUnserializable,
                    &[("reason", reason.as_str())],
                );
                false
            }
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            fields: Map::new(),
            options: MatchOptions::current(),
        }
    }
}

impl TryFrom<Value> for Pattern {
    type Error = ViewError;

    fn try_from(value: Value) -> ViewResult<Self> {
        Self::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
