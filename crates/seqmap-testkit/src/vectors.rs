//! Golden vectors for the persistence shape.
//!
//! The wire form of a store is an ordered list of two-field records. These
//! vectors pin that shape down, byte for byte under JSON, so a host
//! serializer written against one version keeps reading the next.

use seqmap::SeqMap;

/// A golden vector: a store's pairs and its expected JSON wire form.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// The pairs, in insertion order.
    pub pairs: &'static [(&'static str, i64)],
    /// Expected serde_json encoding of the resulting store.
    pub json: &'static str,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty",
            description: "no records",
            pairs: &[],
            json: "[]",
        },
        GoldenVector {
            name: "single",
            description: "one record",
            pairs: &[("a", 1)],
            json: r#"[{"key":"a","value":1}]"#,
        },
        GoldenVector {
            name: "insertion_order",
            description: "order is insertion order, not key order",
            pairs: &[("beta", 2), ("alpha", 1), ("gamma", 3)],
            json: r#"[{"key":"beta","value":2},{"key":"alpha","value":1},{"key":"gamma","value":3}]"#,
        },
        GoldenVector {
            name: "duplicate_values",
            description: "values may repeat across records",
            pairs: &[("p", 5), ("q", 5)],
            json: r#"[{"key":"p","value":5},{"key":"q","value":5}]"#,
        },
        GoldenVector {
            name: "default_value_present",
            description: "a stored zero is a real record, not a miss",
            pairs: &[("zero", 0), ("neg", -7)],
            json: r#"[{"key":"zero","value":0},{"key":"neg","value":-7}]"#,
        },
    ]
}

/// Build the store a vector describes.
pub fn store_from_vector(vector: &GoldenVector) -> SeqMap<String, i64> {
    vector
        .pairs
        .iter()
        .map(|&(key, value)| (key.to_string(), value))
        .collect()
}

/// Verify every vector in both directions: store-to-JSON and JSON-to-store.
///
/// Returns `(name, ok)` per vector so a failing run names the drifted one.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|vector| {
            let store = store_from_vector(vector);
            let encoded = serde_json::to_string(&store);
            let restored: Result<SeqMap<String, i64>, _> = serde_json::from_str(vector.json);

            let ok = encoded.is_ok_and(|json| json == vector.json)
                && restored.is_ok_and(|map| map == store);
            (vector.name.to_string(), ok)
        })
        .collect()
}
