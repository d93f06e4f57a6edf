//! A naive reference model of the store contract.
//!
//! [`ModelMap`] restates the container's observable behavior with the most
//! literal association-list code possible, over concrete `String`/`i64`
//! records. Property tests drive a real `SeqMap` and a `ModelMap` with the
//! same edit script and require identical observable state; any divergence
//! is a bug in one of the two.

/// The reference model: an association list edited by explicit scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMap {
    pairs: Vec<(String, i64)>,
}

impl ModelMap {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update in place if the key exists, append otherwise.
    pub fn insert(&mut self, key: String, value: i64) {
        for (existing, slot) in self.pairs.iter_mut() {
            if *existing == key {
                *slot = value;
                return;
            }
        }
        self.pairs.push((key, value));
    }

    /// Drop the record with this key, if any.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(existing, _)| existing != key);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Value for `key`, scanning from the front.
    pub fn get(&self, key: &str) -> Option<i64> {
        for (existing, value) in &self.pairs {
            if existing == key {
                return Some(*value);
            }
        }
        None
    }

    /// First key holding `value`, scanning from the front.
    pub fn key_for(&self, value: i64) -> Option<&str> {
        for (key, existing) in &self.pairs {
            if *existing == value {
                return Some(key);
            }
        }
        None
    }

    /// The pairs in model order.
    pub fn pairs(&self) -> &[(String, i64)] {
        &self.pairs
    }
}
