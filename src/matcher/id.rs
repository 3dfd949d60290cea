//! Record identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of a record's `id` field: a string or an integer
///
/// Unsigned ids that fit in `i64` are stored as `Num`, so equal ids always
/// compare equal regardless of the integer type they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Num(i64),
    /// Unsigned identifier above `i64::MAX`
    Big(u64),
    /// String identifier
    Str(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Num(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        RecordId::Num(i64::from(id))
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId::Num(i64::from(id))
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        match i64::try_from(id) {
            Ok(n) => RecordId::Num(n),
            Err(_) => RecordId::Big(id),
        }
    }
}

impl From<usize> for RecordId {
    fn from(id: usize) -> Self {
        match u64::try_from(id) {
            Ok(n) => RecordId::from(n),
            Err(_) => RecordId::Str(id.to_string()),
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Str(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Str(id)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Num(n) => Value::from(n),
            RecordId::Big(n) => Value::from(n),
            RecordId::Str(s) => Value::String(s),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Big(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_to_json() {
        assert_eq!(Value::from(RecordId::from(7)), json!(7));
        assert_eq!(Value::from(RecordId::from("u-1")), json!("u-1"));
    }

    #[test]
    fn test_id_deserializes_untagged() {
        let n: RecordId = serde_json::from_value(json!(42)).unwrap();
        let s: RecordId = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(n, RecordId::Num(42));
        assert_eq!(s, RecordId::Str("42".to_string()));
        assert_ne!(n, s);
    }

    #[test]
    fn test_unsigned_ids() {
        assert_eq!(RecordId::from(7u64), RecordId::Num(7));
        assert_eq!(RecordId::from(7usize), RecordId::from(7i64));
        assert_eq!(RecordId::from(u64::MAX), RecordId::Big(u64::MAX));
        assert_eq!(Value::from(RecordId::from(u64::MAX)), json!(u64::MAX));
    }

    #[test]
    fn test_big_id_deserializes() {
        let id: RecordId = serde_json::from_value(json!(u64::MAX)).unwrap();
        assert_eq!(id, RecordId::Big(u64::MAX));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(RecordId::from(3u32).to_string(), "3");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }
}
