//! # seqmap Testkit
//!
//! Testing utilities for the seqmap container.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for edit scripts against the store
//! - **Model**: A naive reference implementation of the store contract
//! - **Fixtures**: Ready-made stores for unit and integration tests
//! - **Golden vectors**: Known stores with their expected wire form
//!
//! ## Property testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use seqmap_testkit::generators::{run_script, Script};
//!
//! proptest! {
//!     #[test]
//!     fn keys_stay_unique(script: Script) {
//!         let map = run_script(&script);
//!         // every key appears at most once
//!     }
//! }
//! ```
//!
//! ## Golden vectors
//!
//! Golden vectors pin down the list-shaped wire form so host serializers
//! written against one version keep reading the next:
//!
//! ```rust
//! use seqmap_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector '{name}' drifted");
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod model;
pub mod vectors;

pub use fixtures::{duplicate_value_store, small_store, store_from_pairs};
pub use generators::{apply, run_script, Op, Script};
pub use model::ModelMap;
pub use vectors::{all_vectors, store_from_vector, verify_all_vectors, GoldenVector};
