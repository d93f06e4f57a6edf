//! The record type: one key-value pair in store order.
//!
//! A record is plain data with no identity beyond its position in the
//! owning store and the contents of its two fields.

use serde::{Deserialize, Serialize};

/// One key-value pair.
///
/// Serializes as a plain two-field struct, which is what makes the store's
/// wire form a homogeneous list any host serializer can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<K, V> {
    /// The lookup key. Unique within a store.
    pub key: K,
    /// The stored value. May repeat across records.
    pub value: V,
}

impl<K, V> Record<K, V> {
    /// Create a record from its two fields.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Borrow the record as a `(key, value)` pair.
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Split the record into its two fields.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Record<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<Record<K, V>> for (K, V) {
    fn from(record: Record<K, V>) -> Self {
        (record.key, record.value)
    }
}
