//! Predicate matching
//!
//! Records are tested either by a caller-supplied closure or by a
//! partial-object [`Pattern`] compared against the record's JSON form.
//!
//! # Matching rules
//!
//! - Every pattern key must be present in the record
//! - Extra record keys are ignored
//! - Nested objects match partially
//! - Scalars compare strictly, numbers by value

mod filters;
mod id;
mod pattern;
mod predicate;

pub use filters::{MatchOptions, PredicateFilter};
pub use id::RecordId;
pub use pattern::Pattern;
pub use predicate::Predicate;
