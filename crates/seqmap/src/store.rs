//! The insertion-ordered key-value store.
//!
//! A [`SeqMap`] owns exactly one sequence of records. Positional access and
//! key lookup are two views over that sequence: indexing reads it directly,
//! key and value lookups scan it from the front. There is no secondary map
//! that could drift out of sync with the order.

use std::ops::Index;

use crate::error::{Result, StoreError};
use crate::record::Record;

/// An insertion-ordered sequence of key-value records with map-style lookup.
///
/// Keys are unique: inserting an existing key updates its value in place
/// without moving the record, so the uniqueness invariant is enforced by
/// collapsing, never by rejecting input. Values may repeat; lookups by value
/// resolve ties to the earliest record. All lookups are linear scans using
/// `PartialEq`, so key and value types need neither `Hash` nor `Ord`.
///
/// Mutation requires `&mut self`, which means the borrow checker statically
/// rules out mutating the store while iterating over it, the caller hazard
/// that list-backed dictionaries can otherwise only document.
///
/// # Examples
///
/// ```
/// use seqmap::SeqMap;
///
/// let mut map = SeqMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// map.insert("a", 3); // update in place, "a" stays at index 0
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get_at(0).unwrap().value, 3);
/// assert_eq!(map.try_get(&"b"), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqMap<K, V> {
    records: Vec<Record<K, V>>,
}

impl<K, V> SeqMap<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Number of records, which equals the number of distinct keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The record at `index` in store order.
    ///
    /// This is the one operation with a hard failure mode: an out-of-range
    /// index is a caller bug, reported as
    /// [`StoreError::IndexOutOfRange`] carrying the index and the valid
    /// bound. Key and value lookups never error.
    pub fn get_at(&self, index: usize) -> Result<&Record<K, V>> {
        self.records.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Iterate over records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Record<K, V>> {
        self.records.iter()
    }

    /// Iterate over keys in store order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.iter().map(|record| &record.key)
    }

    /// Iterate over values in store order.
    ///
    /// Each call starts a fresh pass over the current contents. The borrow
    /// rules keep the store immutable for as long as the iterator lives.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.records.iter().map(|record| &record.value)
    }
}

impl<K: PartialEq, V> SeqMap<K, V> {
    /// Insert a key-value pair.
    ///
    /// If a record with an equal key exists, its value is replaced in place
    /// and the record keeps its position; otherwise a new record is appended
    /// at the end.
    pub fn insert(&mut self, key: K, value: V) {
        match self.records.iter_mut().find(|record| record.key == key) {
            Some(record) => record.value = value,
            None => self.records.push(Record { key, value }),
        }
    }

    /// Look up the value for `key`, or `None` if absent.
    ///
    /// This is the canonical, ambiguity-free lookup; prefer it over
    /// [`get`](Self::get) whenever the caller must distinguish "absent" from
    /// "present with the default value".
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.records
            .iter()
            .find(|record| record.key == *key)
            .map(|record| &record.value)
    }

    /// Whether a record with an equal key exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Position of the record with an equal key, or `None` if absent.
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.records.iter().position(|record| record.key == *key)
    }

    /// Remove the record with an equal key, returning its value.
    ///
    /// Absence is a no-op reported as `None`, not an error. Remaining
    /// records keep their relative order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.index_of_key(key)?;
        Some(self.records.remove(index).value)
    }
}

impl<K: PartialEq, V: Clone + Default> SeqMap<K, V> {
    /// Look up the value for `key`, or `V::default()` if absent.
    ///
    /// Kept for parity with the soft-miss convention of list-backed
    /// dictionaries. A stored value equal to the default is
    /// indistinguishable from a miss here; callers who care must use
    /// [`try_get`](Self::try_get).
    pub fn get(&self, key: &K) -> V {
        self.try_get(key).cloned().unwrap_or_default()
    }
}

impl<K, V: PartialEq> SeqMap<K, V> {
    /// Key of the first record whose value equals `value`, or `None`.
    ///
    /// Values may repeat; the earliest record wins.
    pub fn try_key_for(&self, value: &V) -> Option<&K> {
        self.records
            .iter()
            .find(|record| record.value == *value)
            .map(|record| &record.key)
    }

    /// Position of the first record whose value equals `value`, or `None`.
    pub fn index_of_value(&self, value: &V) -> Option<usize> {
        self.records.iter().position(|record| record.value == *value)
    }
}

impl<K: Clone + Default, V: PartialEq> SeqMap<K, V> {
    /// Key of the first record whose value equals `value`, or `K::default()`
    /// if no record matches.
    ///
    /// Same default-value ambiguity as [`get`](Self::get); prefer
    /// [`try_key_for`](Self::try_key_for) when it matters.
    pub fn key_for(&self, value: &V) -> K {
        self.try_key_for(value).cloned().unwrap_or_default()
    }
}

impl<K, V> Default for SeqMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trusted restore path: the sequence is taken as-is, order and all.
///
/// A producer that hands over duplicate keys violates the store invariant
/// and is out of contract; nothing is collapsed or reordered here.
impl<K, V> From<Vec<Record<K, V>>> for SeqMap<K, V> {
    fn from(records: Vec<Record<K, V>>) -> Self {
        Self { records }
    }
}

impl<K, V> From<SeqMap<K, V>> for Vec<Record<K, V>> {
    fn from(map: SeqMap<K, V>) -> Self {
        map.records
    }
}

/// Builds through [`SeqMap::insert`], so duplicate keys collapse exactly as
/// repeated inserts would: first occurrence fixes the position, last
/// occurrence fixes the value.
impl<K: PartialEq, V> FromIterator<(K, V)> for SeqMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SeqMap::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for SeqMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for SeqMap<K, V> {
    type Item = Record<K, V>;
    type IntoIter = std::vec::IntoIter<Record<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SeqMap<K, V> {
    type Item = &'a Record<K, V>;
    type IntoIter = std::slice::Iter<'a, Record<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Panicking counterpart of [`SeqMap::get_at`], for display-layer code that
/// treats an out-of-range index as fatal. Both forms agree on what is out of
/// range.
impl<K, V> Index<usize> for SeqMap<K, V> {
    type Output = Record<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get_at(index) {
            Ok(record) => record,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<'a>(map: &SeqMap<&'a str, i32>) -> Vec<(&'a str, i32)> {
        map.iter().map(|r| (r.key, r.value)).collect()
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        assert_eq!(pairs(&map), vec![("a", 1), ("b", 2), ("c", 3)]);
        // A never-seen key always lands at the end.
        map.insert("d", 4);
        assert_eq!(map.index_of_key(&"d"), Some(map.len() - 1));
    }

    #[test]
    fn test_insert_existing_key_updates_in_place() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_at(0).unwrap(), &Record::new("a", 3));
        assert_eq!(map.get_at(1).unwrap(), &Record::new("b", 2));
    }

    #[test]
    fn test_key_uniqueness_across_inserts() {
        let mut map = SeqMap::new();
        for round in 0..3 {
            map.insert("x", round);
            map.insert("y", round);
        }

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().filter(|&&k| k == "x").count(), 1);
    }

    #[test]
    fn test_remove_then_lookup() {
        let mut map = SeqMap::new();
        map.insert("x", 10);
        assert_eq!(map.remove(&"x"), Some(10));

        assert_eq!(map.len(), 0);
        assert!(!map.contains_key(&"x"));
        assert_eq!(map.get(&"x"), 0);
        // Removing again is a no-op, not an error.
        assert_eq!(map.remove(&"x"), None);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        map.insert("d", 4);

        map.remove(&"b");
        assert_eq!(pairs(&map), vec![("a", 1), ("c", 3), ("d", 4)]);
        assert_eq!(map.index_of_key(&"c"), Some(1));
    }

    #[test]
    fn test_first_match_wins_on_duplicate_values() {
        let mut map = SeqMap::new();
        map.insert("p", 5);
        map.insert("q", 5);

        assert_eq!(map.key_for(&5), "p");
        assert_eq!(map.try_key_for(&5), Some(&"p"));
        assert_eq!(map.index_of_value(&5), Some(0));
    }

    #[test]
    fn test_empty_store_contract() {
        let map: SeqMap<&str, i32> = SeqMap::new();

        assert_eq!(
            map.get_at(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(map.try_get(&"anything"), None);
        assert_eq!(map.get(&"anything"), 0);
    }

    #[test]
    fn test_get_at_out_of_range() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        assert!(map.get_at(map.len() - 1).is_ok());
        assert_eq!(
            map.get_at(map.len()),
            Err(StoreError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for store of 1 records")]
    fn test_index_panics_out_of_range() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        let _ = &map[3];
    }

    #[test]
    fn test_index_round_trip() {
        let mut map = SeqMap::new();
        map.insert("a", 10);
        map.insert("b", 20);
        map.insert("c", 30);
        map.insert("b", 25);

        for i in 0..map.len() {
            let record = map.get_at(i).unwrap();
            assert_eq!(map.index_of_key(&record.key), Some(i));
        }
    }

    #[test]
    fn test_soft_miss_consistency() {
        let mut map = SeqMap::new();
        map.insert("present", 7);

        assert_eq!(map.try_get(&"absent"), None);
        assert!(!map.contains_key(&"absent"));
        assert_eq!(map.get(&"absent"), 0);

        assert_eq!(map.try_get(&"present"), Some(&7));
        assert!(map.contains_key(&"present"));
    }

    #[test]
    fn test_default_value_ambiguity() {
        let mut map = SeqMap::new();
        map.insert("zero", 0);

        // `get` cannot tell a stored default from a miss; `try_get` can.
        assert_eq!(map.get(&"zero"), 0);
        assert_eq!(map.get(&"missing"), 0);
        assert_eq!(map.try_get(&"zero"), Some(&0));
        assert_eq!(map.try_get(&"missing"), None);
    }

    #[test]
    fn test_clear_empties_fully() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key(&"a"));
        assert_eq!(map.try_get(&"b"), None);
    }

    #[test]
    fn test_values_iterate_in_store_order() {
        let mut map = SeqMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        map.insert("c", 3);

        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
        // Restartable: a second pass sees the same current state.
        assert_eq!(map.values().count(), 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"b", &"a", &"c"]);
    }

    #[test]
    fn test_from_iterator_collapses_duplicates() {
        let map: SeqMap<&str, i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

        assert_eq!(pairs(&map), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_trusted_restore_round_trip() {
        let records = vec![Record::new("b", 2), Record::new("a", 1)];
        let map = SeqMap::from(records.clone());

        assert_eq!(pairs(&map), vec![("b", 2), ("a", 1)]);
        assert_eq!(Vec::from(map), records);
    }

    #[test]
    fn test_into_iterator() {
        let mut map = SeqMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        let borrowed: Vec<_> = (&map).into_iter().map(|r| r.key).collect();
        assert_eq!(borrowed, vec!["a", "b"]);

        let owned: Vec<_> = map.into_iter().map(Record::into_pair).collect();
        assert_eq!(owned, vec![("a", 1), ("b", 2)]);
    }
}
