//! Diagnostic snapshots of the index's internal layout.
//!
//! Dumps are only ever produced on request through
//! [`SkipListIndex::dump`](crate::SkipListIndex::dump), which needs the
//! `dump` feature; no operation of the index produces one on its own.

use std::fmt;

/// The layout of one entry of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDump<'a, K, V> {
    /// The entry's key.
    pub key: &'a K,
    /// The entry's value.
    pub value: &'a V,
    /// The highest level the entry participates in.
    pub height: usize,
    /// For each level from 0 to `height`, the key of the next node on that
    /// level. A link to the tail sentinel shows the footer key.
    pub forward: Vec<&'a K>,
}

impl<K, V> fmt::Display for NodeDump<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {} (height {}) -> [", self.key, self.value, self.height)?;
        for (i, key) in self.forward.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "]")
    }
}
