//! List-shaped serde support for the store.
//!
//! The wire form of a store is an ordered sequence of two-field records,
//! never a native map. That is the whole persistence contract: any format
//! that can hold a homogeneous list of `{key, value}` structs round-trips
//! the store with order intact, which is exactly what editor serialization
//! layers offer when native maps are off the table.
//!
//! Deserialization is a trusted restore. The incoming sequence is kept
//! as-is (order preserved, nothing collapsed) and is expected to already
//! satisfy the key-uniqueness invariant; a producer that restores duplicate
//! keys is out of contract.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::record::Record;
use crate::store::SeqMap;

impl<K: Serialize, V: Serialize> Serialize for SeqMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.iter() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'de, K, V> Deserialize<'de> for SeqMap<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Record<K, V>>::deserialize(deserializer).map(SeqMap::from)
    }
}
