//! Ready-made stores for tests.

use seqmap::SeqMap;

/// Build a store by inserting each pair in turn.
///
/// Duplicate keys collapse exactly as repeated `insert` calls would.
pub fn store_from_pairs<K, V, I>(pairs: I) -> SeqMap<K, V>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Three distinct keys with distinct values, deliberately not in
/// alphabetical order so ordering bugs show up.
pub fn small_store() -> SeqMap<String, i64> {
    store_from_pairs([
        ("beta".to_string(), 2),
        ("alpha".to_string(), 1),
        ("gamma".to_string(), 3),
    ])
}

/// Two records sharing one value, for first-match-wins tests.
pub fn duplicate_value_store() -> SeqMap<String, i64> {
    store_from_pairs([
        ("first".to_string(), 5),
        ("second".to_string(), 5),
        ("third".to_string(), 7),
    ])
}
