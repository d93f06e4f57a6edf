//! Error types for the store.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Absence of a key or value is never an error: lookups report it through
/// `Option` or a default value. The only hard failure mode is positional
/// access outside the stored range, which is a caller bug rather than a
/// data condition and is expected to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Positional access outside `0..len`.
    #[error("index {index} out of range for store of {len} records")]
    IndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// Number of records in the store at the time of the call.
        len: usize,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
