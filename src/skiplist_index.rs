//! The sorted index: unique keys mapped to values, bounded by a head and a
//! tail sentinel.

use std::{borrow::Borrow, cmp::Ordering, fmt, iter};

#[cfg(any(test, feature = "dump"))]
use crate::dump::NodeDump;
use crate::{
    error::{Error, InsertError},
    level_generator::{LevelGenerator, Uniform},
    options::{MAX_LEVEL_LIMIT, Options},
    skipnode::{HEAD, NodeArena, NodeId, SkipNode, TAIL},
};

// ////////////////////////////////////////////////////////////////////////////
// SkipListIndex
// ////////////////////////////////////////////////////////////////////////////

/// A sorted index of unique keys, each mapped to a value.
///
/// The index is bounded by two sentinels. The head reaches every level and
/// the tail carries the *footer key* given at construction, which must sort
/// after every key ever stored. Keys that do not sort strictly before the
/// footer are rejected on insertion and never found.
///
/// Lookups, insertions and removals walk down from the highest level in use,
/// skipping ahead as far as possible on each level before descending.
///
/// # Examples
///
/// ```
/// use skipindex::SkipListIndex;
///
/// let mut index = SkipListIndex::new(u32::MAX);
/// assert!(index.insert(5, "a"));
/// assert!(index.insert(3, "b"));
/// assert!(!index.insert(5, "x"));
///
/// assert_eq!(index.get(&5), Some(&"a"));
/// assert_eq!(index.remove(&3), Some("b"));
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Clone)]
pub struct SkipListIndex<K, V, G = Uniform> {
    // Storage for every node, sentinels included.
    nodes: NodeArena<K, V>,
    // The highest level currently in use.
    level: usize,
    len: usize,
    level_generator: G,
}

// ///////////////////////////////////////////////
// Constructors
// ///////////////////////////////////////////////

impl<K, V> SkipListIndex<K, V> {
    /// Create a new index with 16 levels and a fixed seed.
    ///
    /// `footer` becomes the key of the tail sentinel and must sort after
    /// every key to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let index: SkipListIndex<i64, String> = SkipListIndex::new(i64::MAX);
    /// assert!(index.is_empty());
    /// assert_eq!(index.max_level(), 16);
    /// ```
    #[inline]
    pub fn new(footer: K) -> Self {
        Self::with_level_generator(footer, Uniform::default())
    }

    /// Create a new index from the given [`Options`].
    ///
    /// # Errors
    ///
    /// Fails if the options do not describe a usable index, see
    /// [`Options::with_max_level`].
    #[inline]
    pub fn with_options(footer: K, options: Options) -> Result<Self, Error> {
        options.validate()?;
        let level_generator = Uniform::new(options.max_level(), options.seed())?;
        Ok(Self::with_level_generator(footer, level_generator))
    }
}

impl<K, V, G: LevelGenerator> SkipListIndex<K, V, G> {
    /// Create a new index whose tower heights are drawn from
    /// `level_generator`.
    ///
    /// The head sentinel gets [`LevelGenerator::total`] links, at least one
    /// and at most [`MAX_LEVEL_LIMIT`].
    #[inline]
    pub fn with_level_generator(footer: K, level_generator: G) -> Self {
        let total = level_generator.total().clamp(1, MAX_LEVEL_LIMIT);
        SkipListIndex {
            nodes: NodeArena::new(footer, total),
            level: 0,
            len: 0,
            level_generator,
        }
    }
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<K, V, G> SkipListIndex<K, V, G> {
    /// Returns the number of entries in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the highest level currently in use.
    ///
    /// This is 0 for an empty index and always less than
    /// [`max_level`](Self::max_level).
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of levels available, i.e. the number of links held
    /// by the head sentinel.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.nodes.get(HEAD).links.len()
    }

    /// Returns the footer key the index was created with.
    #[inline]
    #[expect(clippy::expect_used, reason = "The tail always holds the footer key")]
    pub fn footer(&self) -> &K {
        self.nodes.get(TAIL).key.as_ref().expect("tail without a footer key")
    }

    /// Removes every entry.
    ///
    /// The level generator is left as is, so it does not replay the heights
    /// it has already produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(100);
    /// index.extend((0..10).map(|x| (x, x)));
    /// index.clear();
    /// assert!(index.is_empty());
    /// assert_eq!(index.level(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.reset();
        self.level = 0;
        self.len = 0;
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(u32::MAX);
    /// index.insert(3, "b");
    /// assert_eq!(index.get(&3), Some(&"b"));
    /// assert_eq!(index.get(&1), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        self.nodes.get(id).value.as_ref()
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(u32::MAX);
    /// index.insert(3, 30);
    /// if let Some(value) = index.get_mut(&3) {
    ///     *value += 1;
    /// }
    /// assert_eq!(index.get(&3), Some(&31));
    /// ```
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        self.nodes.get_mut(id).value.as_mut()
    }

    /// Returns `true` if an entry is stored under `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// Returns `None`, leaving the index untouched, if there is no such entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(u32::MAX);
    /// index.insert(1, "a");
    /// index.insert(2, "b");
    /// assert_eq!(index.remove(&1), Some("a"));
    /// assert_eq!(index.remove(&1), None);
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut update = [HEAD; MAX_LEVEL_LIMIT];
        let last_lt = self.walk(key, |level, id| update[level] = id);
        let target = self.nodes.next(last_lt, 0);
        if !self.matches(target, key) {
            return None;
        }

        // A node missing from some level is missing from every level above.
        for (level, &prev) in update.iter().enumerate().take(self.level + 1) {
            if self.nodes.next(prev, level) != target {
                break;
            }
            let after = self.nodes.next(target, level);
            self.nodes.link(prev, level, after);
        }
        let removed = self.nodes.release(target);

        while self.level > 0 && self.nodes.next(HEAD, self.level) == TAIL {
            self.level -= 1;
        }
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            height = removed.height(),
            level = self.level,
            len = self.len,
            "removed entry"
        );

        removed.value
    }

    /// Returns the layout of every entry, in key order.
    ///
    /// This walks the whole base level and is meant for debugging and tests.
    /// It is only available with the `dump` feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(100);
    /// index.insert(2, "b");
    /// index.insert(1, "a");
    ///
    /// let dump = index.dump();
    /// assert_eq!(dump.len(), 2);
    /// assert_eq!((dump[0].key, dump[0].value), (&1, &"a"));
    /// assert_eq!(dump[1].forward[0], &100);
    /// ```
    #[cfg(any(test, feature = "dump"))]
    pub fn dump(&self) -> Vec<NodeDump<'_, K, V>> {
        self.entries()
            .filter_map(|node| {
                Some(NodeDump {
                    key: node.key.as_ref()?,
                    value: node.value.as_ref()?,
                    height: node.height(),
                    forward: node
                        .links
                        .iter()
                        .filter_map(|&next| self.nodes.get(next).key.as_ref())
                        .collect(),
                })
            })
            .collect()
    }
}

impl<K: Ord, V, G: LevelGenerator> SkipListIndex<K, V, G> {
    /// Insert `value` under `key`.
    ///
    /// Returns `false`, leaving the index untouched, if `key` is already
    /// present or does not sort before the footer key. An existing value is
    /// never replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::SkipListIndex;
    ///
    /// let mut index = SkipListIndex::new(u32::MAX);
    /// assert!(index.insert(5, "a"));
    /// assert!(!index.insert(5, "x"));
    /// assert_eq!(index.get(&5), Some(&"a"));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Insert `value` under `key` and return a mutable reference to the
    /// stored value, or hand both back if the insertion is rejected.
    ///
    /// # Errors
    ///
    /// - [`InsertError::DuplicateKey`] if `key` is already present.
    /// - [`InsertError::OutOfRange`] if `key` does not sort strictly before
    ///   the footer key.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipindex::{InsertError, SkipListIndex};
    ///
    /// let mut index = SkipListIndex::new(10);
    /// *index.try_insert(1, "a").unwrap() = "z";
    /// assert_eq!(index.get(&1), Some(&"z"));
    /// assert_eq!(
    ///     index.try_insert(1, "b"),
    ///     Err(InsertError::DuplicateKey { key: 1, value: "b" })
    /// );
    /// assert_eq!(
    ///     index.try_insert(10, "c"),
    ///     Err(InsertError::OutOfRange { key: 10, value: "c" })
    /// );
    /// ```
    #[expect(clippy::expect_used, reason = "Entries always hold a value")]
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, InsertError<K, V>> {
        if self.footer() <= &key {
            return Err(InsertError::OutOfRange { key, value });
        }

        // Levels above the current one keep the head as their predecessor.
        let mut update = [HEAD; MAX_LEVEL_LIMIT];
        let last_lt = self.walk(&key, |level, id| update[level] = id);
        if self.matches(self.nodes.next(last_lt, 0), &key) {
            return Err(InsertError::DuplicateKey { key, value });
        }

        let height = self.random_height();
        if height > self.level {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = self.level, to = height, "raising level");
            self.level = height;
        }

        let new_node = self.nodes.alloc(SkipNode::new(key, value, height));
        for (level, &prev) in update.iter().enumerate().take(height + 1).rev() {
            let next = self.nodes.next(prev, level);
            self.nodes.link(new_node, level, next);
            self.nodes.link(prev, level, new_node);
        }
        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(height, level = self.level, len = self.len, "inserted entry");

        Ok(self
            .nodes
            .get_mut(new_node)
            .value
            .as_mut()
            .expect("new entry without a value"))
    }

    /// Draw a tower height, capped below the number of levels.
    fn random_height(&mut self) -> usize {
        self.level_generator.level().min(self.max_level() - 1)
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<K, V, G> SkipListIndex<K, V, G> {
    /// Walk down from the highest level in use, moving right on each level
    /// while the next node's key is strictly less than `key`.
    ///
    /// `visit` is called with each level and the last node visited on it,
    /// which is the node whose link on that level would be rewritten to
    /// insert or remove `key`. Returns the last node visited on level 0.
    fn walk<Q>(&self, key: &Q, mut visit: impl FnMut(usize, NodeId)) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = HEAD;
        for level in (0..=self.level).rev() {
            loop {
                let next = self.nodes.next(node, level);
                if next == TAIL || !self.precedes(next, key) {
                    break;
                }
                node = next;
            }
            visit(level, node);
        }
        node
    }

    /// Find the node holding `key`.
    fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let last_lt = self.walk(key, |_, _| {});
        let candidate = self.nodes.next(last_lt, 0);
        self.matches(candidate, key).then_some(candidate)
    }

    /// Whether the key of node `id` sorts strictly before `key`.
    #[inline]
    fn precedes<Q>(&self, id: NodeId, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.nodes
            .get(id)
            .key
            .as_ref()
            .is_some_and(|node_key| node_key.borrow().cmp(key) == Ordering::Less)
    }

    /// Whether node `id` is an entry (not a sentinel) whose key equals `key`.
    #[inline]
    fn matches<Q>(&self, id: NodeId, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        id != TAIL
            && id != HEAD
            && self
                .nodes
                .get(id)
                .key
                .as_ref()
                .is_some_and(|node_key| node_key.borrow().cmp(key) == Ordering::Equal)
    }

    /// The entries along the base level, in order.
    fn entries(&self) -> impl Iterator<Item = &SkipNode<K, V>> {
        iter::successors(Some(self.nodes.next(HEAD, 0)), move |&id| {
            Some(self.nodes.next(id, 0))
        })
        .take_while(|&id| id != TAIL)
        .map(move |id| self.nodes.get(id))
    }
}

impl<K: Ord, V, G> SkipListIndex<K, V, G> {
    /// Checks the integrity of the index.
    #[cfg(test)]
    fn check(&self) {
        let max_level = self.max_level();
        assert!(self.level < max_level);
        assert_eq!(self.entries().count(), self.len);

        for level in 0..max_level {
            let mut node = HEAD;
            let mut prev_key: Option<&K> = None;
            loop {
                let next = self.nodes.next(node, level);
                if next == TAIL {
                    break;
                }
                assert!(level <= self.level, "link above the current level");
                let next_node = self.nodes.get(next);
                assert!(next_node.height() >= level);
                let key = next_node.key.as_ref().unwrap();
                if let Some(prev_key) = prev_key {
                    assert!(prev_key < key, "keys out of order on level {level}");
                }
                assert!(key < self.footer());
                prev_key = Some(key);
                node = next;
            }
        }
        if self.level > 0 {
            assert_ne!(self.nodes.next(HEAD, self.level), TAIL);
        }
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<K: Ord, V, G: LevelGenerator> Extend<(K, V)> for SkipListIndex<K, V, G> {
    /// Insert every pair; pairs whose key is rejected are dropped.
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            let _inserted = self.insert(key, value);
        }
    }
}

impl<K, V, G> fmt::Debug for SkipListIndex<K, V, G>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries()
                    .filter_map(|node| Some((node.key.as_ref()?, node.value.as_ref()?))),
            )
            .finish()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
