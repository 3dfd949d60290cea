//! Record-set view
//!
//! Every operation that looks like a mutation builds a new backing vector and
//! returns a new view. The receiver and its vector are never touched.

use serde::Serialize;

use super::container::Container;
use super::record::RecordView;
use crate::matcher::{Pattern, Predicate, RecordId};
use crate::observability::{log_counts, Event};

/// Immutable view over an ordered sequence of records.
///
/// Entries are cloned into derived views. Use `T = Arc<R>` when records are
/// large and should be shared between views instead of copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionView<T> {
    data: Vec<T>,
}

impl<T> CollectionView<T> {
    /// Creates a view over an initial sequence
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of records
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Serialize> CollectionView<T> {
    /// Returns the first record matching `predicate`, in sequence order.
    ///
    /// The result is absent when nothing matches.
    pub fn find<'a>(&self, predicate: impl Into<Predicate<'a, T>>) -> RecordView<T>
    where
        T: Clone + 'a,
    {
        let test = predicate.into().resolve();
        let position = self.data.iter().position(|record| test(record));

        log_counts(
            Event::FindComplete,
            &[
                ("matched", usize::from(position.is_some())),
                ("scanned", position.map_or(self.data.len(), |p| p + 1)),
            ],
        );

        match position {
            Some(p) => RecordView::new(self.data[p].clone()),
            None => RecordView::absent(),
        }
    }

    /// `find` with the pattern `{id}`
    pub fn find_by_id(&self, id: impl Into<RecordId>) -> RecordView<T>
    where
        T: Clone,
    {
        self.find(Pattern::by_id(id))
    }

    /// Replaces every record matching `predicate` with `update_fn(record)`.
    ///
    /// Order and length are preserved; non-matching records pass through.
    pub fn find_and_update<'a>(
        &self,
        predicate: impl Into<Predicate<'a, T>>,
        mut update_fn: impl FnMut(&T) -> T,
    ) -> CollectionView<T>
    where
        T: Clone + 'a,
    {
        let test = predicate.into().resolve();
        let mut matched = 0;

        let updated: Vec<T> = self
            .data
            .iter()
            .map(|record| {
                if test(record) {
                    matched += 1;
                    update_fn(record)
                } else {
                    record.clone()
                }
            })
            .collect();

        log_counts(
            Event::UpdateComplete,
            &[("matched", matched), ("size", updated.len())],
        );
        CollectionView::new(updated)
    }

    /// `find_and_update` with the pattern `{id}`
    pub fn find_by_id_and_update(
        &self,
        id: impl Into<RecordId>,
        update_fn: impl FnMut(&T) -> T,
    ) -> CollectionView<T>
    where
        T: Clone,
    {
        self.find_and_update(Pattern::by_id(id), update_fn)
    }

    /// Returns a view over every record matching `predicate`, order preserved
    pub fn filter<'a>(&self, predicate: impl Into<Predicate<'a, T>>) -> CollectionView<T>
    where
        T: Clone + 'a,
    {
        let test = predicate.into().resolve();
        let kept: Vec<T> = self.data.iter().filter(|&r| test(r)).cloned().collect();

        log_counts(
            Event::FilterComplete,
            &[("matched", kept.len()), ("scanned", self.data.len())],
        );
        CollectionView::new(kept)
    }

    /// Number of records matching `predicate`
    pub fn count<'a>(&self, predicate: impl Into<Predicate<'a, T>>) -> usize
    where
        T: 'a,
    {
        let test = predicate.into().resolve();
        self.data.iter().filter(|&r| test(r)).count()
    }
}

impl<T: Clone> CollectionView<T> {
    /// Returns a view over this sequence followed by `items`, in order.
    ///
    /// Identifiers are not checked for duplicates.
    pub fn insert(&self, items: impl IntoIterator<Item = T>) -> CollectionView<T> {
        let mut data = self.data.clone();
        data.extend(items);

        log_counts(
            Event::InsertComplete,
            &[("added", data.len() - self.data.len()), ("size", data.len())],
        );
        CollectionView::new(data)
    }
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for CollectionView<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for CollectionView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'v, T> IntoIterator for &'v CollectionView<T> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Container for CollectionView<T> {
    type Payload = Vec<T>;

    fn value(&self) -> &Vec<T> {
        &self.data
    }

    fn into_value(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        id: u32,
        name: String,
    }

    fn user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    fn users() -> CollectionView<User> {
        CollectionView::new(vec![user(1, "a"), user(2, "b")])
    }

    #[test]
    fn test_size() {
        assert_eq!(users().size(), 2);
        assert_eq!(CollectionView::<User>::default().size(), 0);
    }

    #[test]
    fn test_find_by_id() {
        let found = users().find_by_id(2);
        assert!(!found.is_null());
        assert_eq!(found.get(), Some(&user(2, "b")));
    }

    #[test]
    fn test_find_missing_is_null() {
        assert!(users().find_by_id(9).is_null());
        assert!(users().find(Pattern::eq("name", "zz")).is_null());
    }

    #[test]
    fn test_find_first_match_wins() {
        let view = CollectionView::new(vec![user(1, "a"), user(2, "a"), user(3, "a")]);
        let found = view.find(Pattern::eq("name", "a"));
        assert_eq!(found.get().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_find_with_callable() {
        let found = users().find(Predicate::from_fn(|u: &User| u.id > 1));
        assert_eq!(found.into_option(), Some(user(2, "b")));
    }

    #[test]
    fn test_find_by_id_and_update() {
        let original = users();
        let updated = original.find_by_id_and_update(1, |u| User {
            name: "z".to_string(),
            ..u.clone()
        });

        assert_eq!(updated.value(), &vec![user(1, "z"), user(2, "b")]);
        assert_eq!(updated.size(), 2);
        assert_eq!(original.value(), &vec![user(1, "a"), user(2, "b")]);
    }

    #[test]
    fn test_find_and_update_applies_to_every_match() {
        let view = CollectionView::new(vec![
            json!({"id": 1, "role": "admin"}),
            json!({"id": 2, "role": "user"}),
            json!({"id": 3, "role": "admin"}),
        ]);
        let updated = view.find_and_update(Pattern::eq("role", "admin"), |r| {
            let mut r = r.clone();
            r["active"] = json!(false);
            r
        });

        let active: Vec<Option<&Value>> = updated.iter().map(|r| r.get("active")).collect();
        assert_eq!(active, vec![Some(&json!(false)), None, Some(&json!(false))]);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let original = users();
        let inserted = original.insert([user(3, "c"), user(4, "d")]);

        assert_eq!(inserted.size(), 4);
        let ids: Vec<u32> = inserted.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(original.size(), 2);
    }

    #[test]
    fn test_insert_allows_duplicate_ids() {
        let inserted = users().insert([user(1, "dup")]);
        assert_eq!(inserted.size(), 3);
        assert_eq!(inserted.find_by_id(1).get(), Some(&user(1, "a")));
    }

    #[test]
    fn test_filter_and_count() {
        let view = CollectionView::new(vec![user(1, "a"), user(2, "b"), user(3, "a")]);
        let only_a = view.filter(Pattern::eq("name", "a"));
        assert_eq!(only_a.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(view.count(Pattern::eq("name", "b")), 1);
        assert_eq!(view.count(Predicate::any()), 3);
    }

    #[test]
    fn test_find_by_index_id() {
        let view = users();
        let wanted: usize = 2;
        assert_eq!(view.find_by_id(wanted).get(), Some(&user(2, "b")));
        assert!(view.find_by_id(u64::MAX).is_null());
    }

    #[test]
    fn test_string_ids() {
        let view = CollectionView::new(vec![json!({"id": "u-1"}), json!({"id": 1})]);
        assert_eq!(view.find_by_id("u-1").get(), Some(&json!({"id": "u-1"})));
        assert_eq!(view.find_by_id(1).get(), Some(&json!({"id": 1})));
    }

    #[test]
    fn test_collect_and_into_value() {
        let view: CollectionView<u32> = (1..=3).collect();
        assert_eq!(view.into_value(), vec![1, 2, 3]);
    }
}
