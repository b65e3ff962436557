//! A sorted in-memory index built on a skiplist, in which entries can be
//! searched for, inserted and removed in `O(log(n))` on average without any
//! rebalancing.
//!
//! Conceptually, the index resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------> <tail>
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------> <tail>
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] -> <tail>
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] -> <tail>
//! ```
//!
//! where each node `[x]` has links to nodes further down the list, allowing
//! the algorithm to skip ahead. The head reaches every level and the tail
//! holds a *footer key* which sorts after every stored key, so that no walk
//! ever runs off the end of a level.
//!
//! Keys are ordered by their [`Ord`] implementation, which **must** be a
//! total order. Two keys comparing [`Equal`][std::cmp::Ordering::Equal] are
//! the same key.
//!
//! The height of each new node is drawn by a [`LevelGenerator`]. The default,
//! [`Uniform`], draws uniformly over the available levels from a seeded
//! source, so that indexes fed the same data have the same shape.
//!
//! The index is single threaded. Mutation takes `&mut self`, so sharing it
//! between threads requires external synchronisation.
//!
//! With the `tracing` feature enabled, insertions and removals emit
//! `TRACE`-level events through the [`tracing`](https://docs.rs/tracing)
//! crate. The `dump` feature adds `SkipListIndex::dump`, which lays out
//! every entry with its height and forward links for debugging.
//!
//! # Examples
//!
//! ```
//! use skipindex::{Options, SkipListIndex};
//!
//! let mut index = SkipListIndex::with_options(u64::MAX, Options::new().with_seed(7)).unwrap();
//! index.insert(5, "a");
//! index.insert(3, "b");
//! index.insert(8, "c");
//!
//! assert_eq!(index.get(&3), Some(&"b"));
//! assert_eq!(index.get(&1), None);
//! assert_eq!(index.len(), 3);
//! ```

#[cfg(any(test, feature = "dump"))]
mod dump;
mod error;
pub mod level_generator;
mod options;
mod skiplist_index;
mod skipnode;

#[cfg(any(test, feature = "dump"))]
pub use dump::NodeDump;
pub use error::{Error, InsertError};
pub use level_generator::{LevelGenerator, Uniform, uniform::UniformError};
pub use options::{DEFAULT_MAX_LEVEL, MAX_LEVEL_LIMIT, Options};
pub use skiplist_index::SkipListIndex;
