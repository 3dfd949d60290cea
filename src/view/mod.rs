//! Immutable views over records
//!
//! - [`CollectionView`] wraps an ordered sequence of records
//! - [`RecordView`] wraps one record or its absence
//!
//! # Invariants
//!
//! - A view's payload is never mutated after construction
//! - Derived views own a freshly built payload
//! - "Not found" is an absent [`RecordView`], never an error

mod collection;
mod container;
mod record;

pub use collection::CollectionView;
pub use container::Container;
pub use record::{RecordView, Slot};
