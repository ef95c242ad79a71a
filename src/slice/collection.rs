//! Immutable, structurally shared record collection.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::mvi::UiState;

use super::record::SliceRecord;

/// Ordered collection of records keyed by id.
///
/// Both the sequence and each record live behind an [`Arc`]: cloning a
/// collection is a pointer copy, and an update only allocates the records it
/// actually replaces. Every operation consumes the collection and returns
/// either a new one or, when nothing changed, the input itself.
pub struct SliceCollection<R> {
    records: Arc<Vec<Arc<R>>>,
}

impl<R> SliceCollection<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter().map(|record| &**record)
    }

    /// True when both collections are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<R: SliceRecord> SliceCollection<R> {
    /// Build a collection from records, keeping the first record of any
    /// duplicated id.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        records
            .into_iter()
            .fold(Self::new(), |collection, record| collection.insert(record))
    }

    /// Linear lookup by id.
    pub fn find(&self, id: &str) -> Option<&R> {
        self.shared(id).map(|record| &**record)
    }

    /// Lookup returning the shared handle, for identity checks.
    pub fn shared(&self, id: &str) -> Option<&Arc<R>> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.id())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Append a record.
    ///
    /// A record whose id is already registered is ignored and the collection
    /// is returned unchanged.
    pub fn insert(self, record: R) -> Self {
        if self.contains(record.id()) {
            tracing::debug!(id = record.id(), "Duplicate registration ignored");
            return self;
        }

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(Arc::new(record));
        Self {
            records: Arc::new(records),
        }
    }

    /// Remove the record with `id`. Unknown ids are a no-op.
    pub fn remove(self, id: &str) -> Self {
        if !self.contains(id) {
            return self;
        }

        let records = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        Self {
            records: Arc::new(records),
        }
    }

    /// Replace the record with `id` by `f(record)`.
    ///
    /// Unknown ids and updates yielding an equal record return the input.
    pub fn update<F>(self, id: &str, f: F) -> Self
    where
        F: FnOnce(&R) -> R,
    {
        let Some(index) = self.position(id) else {
            return self;
        };

        let updated = f(&*self.records[index]);
        if updated == *self.records[index] {
            return self;
        }

        let mut records = Vec::clone(&self.records);
        records[index] = Arc::new(updated);
        Self {
            records: Arc::new(records),
        }
    }

    /// Offer every record to `f`; `Some` replaces it, `None` keeps it.
    ///
    /// Allocates a new collection only if at least one record really changed.
    pub fn update_where<F>(self, mut f: F) -> Self
    where
        F: FnMut(&R) -> Option<R>,
    {
        let mut changed: Option<Vec<Arc<R>>> = None;

        for (index, record) in self.records.iter().enumerate() {
            let Some(updated) = f(&**record) else {
                continue;
            };
            if updated == **record {
                continue;
            }
            let records = changed.get_or_insert_with(|| Vec::clone(&self.records));
            records[index] = Arc::new(updated);
        }

        match changed {
            Some(records) => Self {
                records: Arc::new(records),
            },
            None => self,
        }
    }
}

impl<R> Clone for SliceCollection<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R> Default for SliceCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for SliceCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<R: PartialEq> PartialEq for SliceCollection<R> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.records == other.records
    }
}

impl<R: Serialize> Serialize for SliceCollection<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.iter() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<R: SliceRecord> UiState for SliceCollection<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        id: String,
        group: &'static str,
        value: u32,
    }

    impl SliceRecord for Counter {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn counter(id: &str, group: &'static str, value: u32) -> Counter {
        Counter {
            id: id.to_string(),
            group,
            value,
        }
    }

    fn sample() -> SliceCollection<Counter> {
        SliceCollection::from_records([counter("a", "g1", 1), counter("b", "g1", 2), counter("c", "g2", 3)])
    }

    #[test]
    fn default_is_empty() {
        let collection = SliceCollection::<Counter>::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn insert_appends_in_registration_order() {
        let collection = sample().insert(counter("d", "g2", 4));
        let ids: Vec<&str> = collection.ids().collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_duplicate_is_ignored() {
        let before = sample();
        let after = before.clone().insert(counter("b", "g1", 99));
        assert!(after.ptr_eq(&before));
        assert_eq!(after.find("b").map(|c| c.value), Some(2));
    }

    #[test]
    fn from_records_keeps_first_duplicate() {
        let collection = SliceCollection::from_records([counter("a", "g1", 1), counter("a", "g1", 2)]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.find("a").map(|c| c.value), Some(1));
    }

    #[test]
    fn remove_unknown_returns_same_collection() {
        let before = sample();
        let after = before.clone().remove("missing");
        assert!(after.ptr_eq(&before));
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let before = sample();
        let after = before.clone().remove("b");
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.find("b").is_none());
        assert!(!after.ptr_eq(&before));
    }

    #[test]
    fn update_keeps_untouched_records_shared() {
        let before = sample();
        let after = before.clone().update("b", |c| Counter {
            value: 20,
            ..c.clone()
        });

        assert_eq!(after.find("b").map(|c| c.value), Some(20));
        assert!(Arc::ptr_eq(before.shared("a").unwrap(), after.shared("a").unwrap()));
        assert!(Arc::ptr_eq(before.shared("c").unwrap(), after.shared("c").unwrap()));
    }

    #[test]
    fn update_unknown_returns_same_collection() {
        let before = sample();
        let after = before.clone().update("zzz", |c| Counter {
            value: 0,
            ..c.clone()
        });
        assert!(after.ptr_eq(&before));
    }

    #[test]
    fn update_to_equal_record_returns_same_collection() {
        let before = sample();
        let after = before.clone().update("a", Counter::clone);
        assert!(after.ptr_eq(&before));
    }

    #[test]
    fn update_where_touches_only_matching_records() {
        let before = sample();
        let after = before.clone().update_where(|c| {
            (c.group == "g1").then(|| Counter {
                value: c.value * 10,
                ..c.clone()
            })
        });

        let values: Vec<u32> = after.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![10, 20, 3]);
        assert!(Arc::ptr_eq(before.shared("c").unwrap(), after.shared("c").unwrap()));
    }

    #[test]
    fn update_where_without_change_returns_same_collection() {
        let before = sample();
        let after = before.clone().update_where(|c| Some(c.clone()));
        assert!(after.ptr_eq(&before));
    }

    #[test]
    fn equality_compares_values() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample().remove("a"));
    }
}
