//! Partial-equality matching over JSON values
//!
//! A candidate matches a pattern when every key of the pattern is present in
//! the candidate with a matching value. Extra candidate keys are ignored.
//! No type coercion: `"1"` never matches `1`.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

static PARTIAL_ARRAYS: AtomicBool = AtomicBool::new(true);

/// Options controlling how pattern values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// When true, every element of a pattern array must match some element of
    /// the candidate array. When false, arrays must be deeply equal.
    pub partial_arrays: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            partial_arrays: true,
        }
    }
}

impl MatchOptions {
    /// Options requiring arrays to be deeply equal
    pub fn exact_arrays() -> Self {
        Self {
            partial_arrays: false,
        }
    }

    /// Installs these options as the process-wide defaults for new patterns
    pub fn install(self) {
        PARTIAL_ARRAYS.store(self.partial_arrays, Ordering::Relaxed);
    }

    /// Returns the process-wide defaults for new patterns
    pub fn current() -> Self {
        Self {
            partial_arrays: PARTIAL_ARRAYS.load(Ordering::Relaxed),
        }
    }
}

/// Evaluates patterns against JSON documents
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a document matches every key of the pattern
    ///
    /// An empty pattern matches anything, including non-objects.
    pub fn matches(document: &Value, pattern: &Map<String, Value>, options: MatchOptions) -> bool {
        if pattern.is_empty() {
            return true;
        }
        match document.as_object() {
            Some(object) => Self::object_match(object, pattern, options),
            None => false,
        }
    }

    fn object_match(
        actual: &Map<String, Value>,
        expected: &Map<String, Value>,
        options: MatchOptions,
    ) -> bool {
        // Missing field = no match
        expected.iter().all(|(key, want)| match actual.get(key) {
            Some(have) => Self::value_match(have, want, options),
            None => false,
        })
    }

    fn value_match(actual: &Value, expected: &Value, options: MatchOptions) -> bool {
        match (actual, expected) {
            (Value::Object(a), Value::Object(e)) => Self::object_match(a, e, options),
            (Value::Array(a), Value::Array(e)) if options.partial_arrays => {
                Self::array_subset_match(a, e, options)
            }
            (Value::Array(_), Value::Array(_)) => Self::deep_eq(actual, expected),
            (Value::Number(a), Value::Number(b)) => Self::number_eq(a, b),
            _ => actual == expected,
        }
    }

    /// Each pattern element claims a distinct candidate element.
    ///
    /// Claims are greedy in candidate order, so `["a", "a"]` needs two `"a"`s.
    fn array_subset_match(actual: &[Value], expected: &[Value], options: MatchOptions) -> bool {
        if expected.len() > actual.len() {
            return false;
        }
        let mut used = vec![false; actual.len()];
        expected.iter().all(|want| {
            let claim = actual
                .iter()
                .enumerate()
                .position(|(i, have)| !used[i] && Self::value_match(have, want, options));
            match claim {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Structural equality that compares numbers by value
    fn deep_eq(actual: &Value, expected: &Value) -> bool {
        match (actual, expected) {
            (Value::Object(a), Value::Object(e)) => {
                a.len() == e.len()
                    && e.iter()
                        .all(|(k, want)| a.get(k).is_some_and(|have| Self::deep_eq(have, want)))
            }
            (Value::Array(a), Value::Array(e)) => {
                a.len() == e.len() && a.iter().zip(e).all(|(have, want)| Self::deep_eq(have, want))
            }
            (Value::Number(a), Value::Number(b)) => Self::number_eq(a, b),
            _ => actual == expected,
        }
    }

    /// Numeric equality: `1` equals `1.0`
    fn number_eq(a: &Number, b: &Number) -> bool {
        if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
            return ai == bi;
        }
        if let (Some(au), Some(bu)) = (a.as_u64(), b.as_u64()) {
            return au == bu;
        }
        match (a.as_f64(), b.as_f64()) {
            (Some(af), Some(bf)) => af == bf,
            _ => false,
        }
    }
}
