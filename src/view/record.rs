//! Single-record view

use super::container::Container;

/// A record or the explicit absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// A record is present
    Present(T),
    /// No record
    Absent,
}

impl<T> Slot<T> {
    /// Returns true if no record is held
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Slot::Present(record) => Some(record),
            Slot::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Present(record) => Some(record),
            Slot::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(record) => Slot::Present(record),
            None => Slot::Absent,
        }
    }
}

/// Immutable view over one record or its absence.
///
/// Returned by collection lookups; branch on [`RecordView::is_null`] to tell
/// "found" from "not found".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordView<T> {
    data: Slot<T>,
}

impl<T> RecordView<T> {
    /// Wraps a present record
    pub fn new(record: T) -> Self {
        Self {
            data: Slot::Present(record),
        }
    }

    /// Wraps the absence marker
    pub fn absent() -> Self {
        Self { data: Slot::Absent }
    }

    /// Returns a new view over `data`; the replacement may have another shape
    pub fn update<U>(&self, data: impl Into<Slot<U>>) -> RecordView<U> {
        RecordView { data: data.into() }
    }

    /// Returns a new view over a present `record`
    pub fn update_with<U>(&self, record: U) -> RecordView<U> {
        RecordView::new(record)
    }

    /// Returns true iff the wrapped payload is the absence marker
    pub fn is_null(&self) -> bool {
        self.data.is_absent()
    }

    pub fn get(&self) -> Option<&T> {
        self.data.as_option()
    }

    pub fn into_option(self) -> Option<T> {
        self.data.into_option()
    }

    /// Returns a new view over `f(record)`, or an absent view
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> RecordView<U> {
        RecordView {
            data: self.data.as_option().map(f).into(),
        }
    }
}

impl<T> From<Option<T>> for RecordView<T> {
    fn from(value: Option<T>) -> Self {
        Self { data: value.into() }
    }
}

impl<T> Container for RecordView<T> {
    type Payload = Slot<T>;

    fn value(&self) -> &Slot<T> {
        &self.data
    }

    fn into_value(self) -> Slot<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_and_absent() {
        let view = RecordView::new(json!({"id": 1}));
        assert!(!view.is_null());
        assert_eq!(view.get(), Some(&json!({"id": 1})));

        let view: RecordView<serde_json::Value> = RecordView::absent();
        assert!(view.is_null());
        assert_eq!(view.value(), &Slot::Absent);
    }

    #[test]
    fn test_update_leaves_original() {
        let original = RecordView::new(json!({"id": 1, "name": "a"}));
        let updated = original.update(Some(json!({"id": 1, "name": "z"})));

        assert_eq!(original.get(), Some(&json!({"id": 1, "name": "a"})));
        assert_eq!(updated.get(), Some(&json!({"id": 1, "name": "z"})));
    }

    #[test]
    fn test_update_may_change_shape() {
        let original = RecordView::new(json!({"id": 1}));
        let updated: RecordView<u32> = original.update(Slot::Present(7));
        assert_eq!(updated.into_option(), Some(7));
    }

    #[test]
    fn test_update_with_plain_record() {
        let original = RecordView::new(json!({"id": 1, "name": "a"}));
        let updated = original.update_with(json!({"id": 1, "name": "z"}));
        assert_eq!(updated.get(), Some(&json!({"id": 1, "name": "z"})));
        assert_eq!(original.get(), Some(&json!({"id": 1, "name": "a"})));

        let absent: RecordView<u8> = RecordView::absent();
        assert!(!absent.update_with("filled").is_null());
    }

    #[test]
    fn test_update_to_absent() {
        let original = RecordView::new(1);
        let cleared = original.update(None::<i32>);
        assert!(cleared.is_null());
        assert!(!original.is_null());
    }

    #[test]
    fn test_map() {
        let view = RecordView::new(json!({"id": 4}));
        assert_eq!(view.map(|r| r["id"].clone()).into_value(), Slot::Present(json!(4)));

        let absent: RecordView<serde_json::Value> = RecordView::absent();
        assert!(absent.map(|r| r["id"].clone()).is_null());
    }

    #[test]
    fn test_from_option() {
        assert!(RecordView::<u8>::from(None).is_null());
        assert!(!RecordView::from(Some(1u8)).is_null());
    }
}
