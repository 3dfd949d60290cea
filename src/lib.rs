//! casualdb - Immutable, predicate-driven views over in-memory records
//!
//! ```
//! use casualdb::matcher::Pattern;
//! use casualdb::view::{CollectionView, Container};
//! use serde_json::json;
//!
//! let users = CollectionView::new(vec![
//!     json!({"id": 1, "name": "a"}),
//!     json!({"id": 2, "name": "b"}),
//! ]);
//!
//! assert!(!users.find_by_id(2).is_null());
//! assert!(users.find(Pattern::eq("name", "c")).is_null());
//!
//! let renamed = users.find_by_id_and_update(1, |r| {
//!     let mut r = r.clone();
//!     r["name"] = json!("z");
//!     r
//! });
//! assert_eq!(renamed.value()[0]["name"], "z");
//! assert_eq!(users.value()[0]["name"], "a");
//! ```

pub mod config;
pub mod errors;
pub mod matcher;
pub mod observability;
pub mod view;

pub use config::ViewConfig;
pub use errors::{ViewError, ViewResult};
pub use matcher::{MatchOptions, Pattern, Predicate, RecordId};
pub use view::{CollectionView, Container, RecordView, Slot};
