//! Errors reported by the index.
//!
//! Every error path leaves the index exactly as it was before the call.
//! Lookups and removals of absent keys are not errors and are reported as
//! [`None`] instead.

use std::fmt;

use thiserror::Error;

use crate::level_generator::uniform::UniformError;

/// Errors that can occur when constructing a
/// [`SkipListIndex`](crate::SkipListIndex) from [`Options`](crate::Options).
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The index needs at least two levels: the base chain and one level
    /// above it.
    #[error("max_level must be at least 2, got {0}.")]
    MaxLevelTooSmall(usize),
    /// The number of levels is capped to keep towers bounded.
    #[error("max_level must be at most {max}, got {got}.")]
    MaxLevelTooLarge {
        /// The largest accepted value.
        max: usize,
        /// The value that was requested.
        got: usize,
    },
    /// The level generator could not be created.
    #[error(transparent)]
    Generator(#[from] UniformError),
}

/// An insertion that was rejected.
///
/// The key and value are handed back so that the caller keeps ownership of
/// them.
#[derive(Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InsertError<K, V> {
    /// The key is already present. The stored value is left untouched.
    #[error("key already present in the index.")]
    DuplicateKey {
        /// The rejected key.
        key: K,
        /// The rejected value.
        value: V,
    },
    /// The key does not sort strictly before the footer key.
    #[error("key does not sort before the footer key.")]
    OutOfRange {
        /// The rejected key.
        key: K,
        /// The rejected value.
        value: V,
    },
}

impl<K, V> InsertError<K, V> {
    /// Recover the rejected key and value.
    #[inline]
    pub fn into_inner(self) -> (K, V) {
        match self {
            InsertError::DuplicateKey { key, value } | InsertError::OutOfRange { key, value } => {
                (key, value)
            }
        }
    }
}

// Only the key is shown; values are often large payloads.
impl<K: fmt::Debug, V> fmt::Debug for InsertError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicateKey { key, .. } => {
                f.debug_struct("DuplicateKey").field("key", key).finish_non_exhaustive()
            }
            InsertError::OutOfRange { key, .. } => {
                f.debug_struct("OutOfRange").field("key", key).finish_non_exhaustive()
            }
        }
    }
}
