//! Predicates accepted by collection queries

use std::fmt;

use serde::Serialize;

use super::pattern::Pattern;

/// A record test: either a callable or a partial-object pattern.
pub enum Predicate<'a, T> {
    /// Arbitrary test over a record
    Callable(Box<dyn Fn(&T) -> bool + 'a>),
    /// Partial-equality match over the record's JSON form
    Pattern(Pattern),
}

impl<'a, T> Predicate<'a, T> {
    /// Wraps a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Predicate::Callable(Box::new(f))
    }

    /// Matches every record.
    pub fn any() -> Self {
        Predicate::Pattern(Pattern::default())
    }
}

impl<'a, T: Serialize + 'a> Predicate<'a, T> {
    /// Resolves the predicate into a single callable test.
    ///
    /// Patterns are bound here once so a scan does not branch per record.
    pub fn resolve(self) -> Box<dyn Fn(&T) -> bool + 'a> {
        match self {
            Predicate::Callable(f) => f,
            Predicate::Pattern(pattern) => Box::new(move |record: &T| pattern.matches(record)),
        }
    }

    /// Tests a single record.
    pub fn test(&self, record: &T) -> bool {
        match self {
            Predicate::Callable(f) => f(record),
            Predicate::Pattern(pattern) => pattern.matches(record),
        }
    }
}

impl<'a, T> From<Pattern> for Predicate<'a, T> {
    fn from(pattern: Pattern) -> Self {
        Predicate::Pattern(pattern)
    }
}

impl<'a, T> fmt::Debug for Predicate<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Callable(_) => f.write_str("Predicate::Callable(..)"),
            Predicate::Pattern(p) => f.debug_tuple("Predicate::Pattern").field(p.fields()).finish(),
        }
    }
}
