//! # seqmap
//!
//! An insertion-ordered key-value store for editor and tooling hosts.
//!
//! Many serialization layers in editor environments cannot persist a native
//! hash map but handle an ordered list of records fine. [`SeqMap`] is a map
//! built on exactly that shape: one owned sequence of key-value [`Record`]s,
//! with dictionary-style lookup by key or by value layered over it as linear
//! scans. There are no `Hash` or `Ord` bounds anywhere: equality is the only
//! capability a key or value type needs.
//!
//! ## Key behaviors
//!
//! - **Insertion order**: records stay in the order their keys first arrived.
//! - **Update in place**: inserting an existing key replaces its value
//!   without moving the record.
//! - **Soft-miss lookups**: key and value lookups signal absence through
//!   `Option` or a default value, never through an error.
//! - **One hard failure**: only positional access ([`SeqMap::get_at`]) can
//!   fail, with [`StoreError::IndexOutOfRange`].
//! - **List-shaped persistence**: serde sees the store as an ordered
//!   sequence of two-field records, never as a map.
//!
//! ## Usage
//!
//! ```
//! use seqmap::SeqMap;
//!
//! let mut slots: SeqMap<String, u32> = SeqMap::new();
//! slots.insert("health".into(), 100);
//! slots.insert("mana".into(), 50);
//! slots.insert("health".into(), 75); // updates in place, stays first
//!
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots.try_get(&"health".into()), Some(&75));
//! assert_eq!(slots.index_of_key(&"health".into()), Some(0));
//! ```

pub mod error;
pub mod record;
mod serial;
pub mod store;

pub use error::{Result, StoreError};
pub use record::Record;
pub use store::SeqMap;
