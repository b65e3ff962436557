//! Nodes and the arena that owns them.

/// Index of a node within a [`NodeArena`].
pub(crate) type NodeId = usize;

/// Slot of the head sentinel. It is always the first node allocated.
pub(crate) const HEAD: NodeId = 1;

/// Slot of the tail sentinel. It is allocated before the head.
pub(crate) const TAIL: NodeId = 0;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the index. Each node holds one entry, except for the two
/// sentinels: the head (no key, no value) and the tail (the footer key, no
/// value).
///
/// A node of height `n` has `n + 1` links to next nodes, one per level it
/// participates in. Links are indices into the owning [`NodeArena`], so they
/// never own the node they point at.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<K, V> {
    // `None` only for the head.
    pub key: Option<K>,
    // `None` for both sentinels.
    pub value: Option<V>,
    // Links to the next node at the respective level.  This vector *must* be
    // of length `self.height() + 1`.
    pub links: Vec<NodeId>,
}

impl<K, V> SkipNode<K, V> {
    /// Create the head sentinel with `total_levels` links, all to the tail.
    pub fn head(total_levels: usize) -> Self {
        SkipNode {
            key: None,
            value: None,
            links: vec![TAIL; total_levels],
        }
    }

    /// Create the tail sentinel. Its only link points back at itself and is
    /// never followed.
    pub fn tail(footer: K) -> Self {
        SkipNode {
            key: Some(footer),
            value: None,
            links: vec![TAIL],
        }
    }

    /// Create a new node reaching up to `height`.
    /// All links default to the tail.
    pub fn new(key: K, value: V, height: usize) -> Self {
        SkipNode {
            key: Some(key),
            value: Some(value),
            links: vec![TAIL; height + 1],
        }
    }

    /// How high the node reaches.
    #[inline]
    pub fn height(&self) -> usize {
        self.links.len() - 1
    }
}

// ////////////////////////////////////////////////////////////////////////////
// NodeArena
// ////////////////////////////////////////////////////////////////////////////

/// Owns every node of an index.
///
/// Released slots are recycled through a free list, so a [`NodeId`] stays
/// valid for exactly as long as its node is linked into the index.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Option<SkipNode<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    /// Create an arena holding only the two sentinels.
    pub fn new(footer: K, total_levels: usize) -> Self {
        let mut arena = NodeArena {
            slots: Vec::new(),
            free: Vec::new(),
        };
        let tail = arena.alloc(SkipNode::tail(footer));
        let head = arena.alloc(SkipNode::head(total_levels));
        debug_assert_eq!((tail, head), (TAIL, HEAD));
        arena
    }

    /// Store `node` and return its id.
    pub fn alloc(&mut self, node: SkipNode<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Take the node out of its slot and make the slot available again.
    ///
    /// The sentinels are never released.
    #[expect(clippy::expect_used, reason = "Only linked nodes are released")]
    pub fn release(&mut self, id: NodeId) -> SkipNode<K, V> {
        debug_assert!(id != HEAD && id != TAIL, "sentinels cannot be released");
        let node = self.slots[id].take();
        self.free.push(id);
        node.expect("released a vacant slot")
    }

    /// Drop every entry, keeping only the sentinels and resetting the head
    /// links to the tail.
    pub fn reset(&mut self) {
        self.slots.truncate(2);
        self.free.clear();
        self.get_mut(HEAD).links.fill(TAIL);
    }

    /// Number of occupied slots, sentinels included.
    #[cfg(test)]
    pub fn occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    #[expect(clippy::expect_used, reason = "Links only ever refer to occupied slots")]
    pub fn get(&self, id: NodeId) -> &SkipNode<K, V> {
        self.slots[id].as_ref().expect("dangling node id")
    }

    #[inline]
    #[expect(clippy::expect_used, reason = "Links only ever refer to occupied slots")]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SkipNode<K, V> {
        self.slots[id].as_mut().expect("dangling node id")
    }

    /// The node linked from `id` at `level`.
    #[inline]
    pub fn next(&self, id: NodeId, level: usize) -> NodeId {
        self.get(id).links[level]
    }

    /// Point `id` at `to` on `level`.
    #[inline]
    pub fn link(&mut self, id: NodeId, level: usize, to: NodeId) {
        self.get_mut(id).links[level] = to;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{HEAD, NodeArena, SkipNode, TAIL};

    #[test]
    fn sentinels() {
        let arena: NodeArena<u32, &str> = NodeArena::new(u32::MAX, 4);
        let head = arena.get(HEAD);
        assert_eq!(head.height(), 3);
        assert!(head.key.is_none() && head.value.is_none());
        assert_eq!(head.links, vec![TAIL; 4]);

        let tail = arena.get(TAIL);
        assert_eq!(tail.height(), 0);
        assert_eq!(tail.key, Some(u32::MAX));
        assert!(tail.value.is_none());
        assert_eq!(arena.occupied(), 2);
    }

    #[test]
    fn node_height() {
        let node = SkipNode::new(1, "a", 3);
        assert_eq!(node.height(), 3);
        assert_eq!(node.links.len(), 4);
    }

    #[test]
    fn slots_are_recycled() {
        let mut arena: NodeArena<u32, String> = NodeArena::new(u32::MAX, 4);
        let a = arena.alloc(SkipNode::new(1, "a".to_owned(), 1));
        let b = arena.alloc(SkipNode::new(2, "b".to_owned(), 2));
        assert_eq!(arena.occupied(), 4);

        let released = arena.release(a);
        assert_eq!(released.value.as_deref(), Some("a"));
        assert_eq!(arena.occupied(), 3);

        let c = arena.alloc(SkipNode::new(3, "c".to_owned(), 1));
        assert_eq!(c, a);
        assert_eq!(arena.get(b).key, Some(2));
        assert_eq!(arena.get(c).key, Some(3));
    }

    #[test]
    fn link_and_next() {
        let mut arena: NodeArena<u32, ()> = NodeArena::new(u32::MAX, 2);
        let a = arena.alloc(SkipNode::new(1, (), 1));
        arena.link(HEAD, 1, a);
        assert_eq!(arena.next(HEAD, 1), a);
        assert_eq!(arena.next(HEAD, 0), TAIL);
        assert_eq!(arena.next(a, 0), TAIL);
    }

    #[test]
    fn reset() {
        let mut arena: NodeArena<u32, ()> = NodeArena::new(u32::MAX, 3);
        let a = arena.alloc(SkipNode::new(1, (), 2));
        arena.link(HEAD, 2, a);
        let b = arena.alloc(SkipNode::new(2, (), 1));
        let _ = arena.release(b);
        arena.reset();
        assert_eq!(arena.occupied(), 2);
        assert_eq!(arena.get(HEAD).links, vec![TAIL; 3]);
        assert_eq!(arena.alloc(SkipNode::new(4, (), 1)), 2);
    }
}
