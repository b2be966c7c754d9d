//! ChainBucket: one singly linked chain of entries sharing a home index.
//!
//! Nodes live in a `SlotMap` arena owned by the enclosing table; a bucket
//! only holds the key of its head node. Every operation takes the arena
//! explicitly, so buckets stay `Copy` and the table can relink nodes during
//! a rehash without moving values.

use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    next: Option<DefaultKey>,
}

pub(crate) type NodeArena<V> = SlotMap<DefaultKey, Node<V>>;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct ChainBucket {
    head: Option<DefaultKey>,
}

/// Iterator over a chain, head first.
pub(crate) struct ChainIter<'a, V> {
    arena: &'a NodeArena<V>,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = &arena[self.cur?];
        self.cur = node.next;
        Some((node.key.as_str(), &node.value))
    }
}

impl ChainBucket {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    fn find<V>(&self, arena: &NodeArena<V>, key: &str) -> Option<DefaultKey> {
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &arena[id];
            if node.key == key {
                return Some(id);
            }
            cur = node.next;
        }
        None
    }

    /// Overwrites and returns the old value if `key` is present; otherwise
    /// prepends a new node.
    pub(crate) fn insert<V>(&mut self, arena: &mut NodeArena<V>, key: String, value: V) -> Option<V> {
        if let Some(id) = self.find(arena, &key) {
            return Some(core::mem::replace(&mut arena[id].value, value));
        }
        let id = arena.insert(Node {
            key,
            value,
            next: self.head,
        });
        self.head = Some(id);
        None
    }

    pub(crate) fn search<'a, V>(&self, arena: &'a NodeArena<V>, key: &str) -> Option<&'a V> {
        self.find(arena, key).map(|id| &arena[id].value)
    }

    pub(crate) fn search_mut<'a, V>(
        &self,
        arena: &'a mut NodeArena<V>,
        key: &str,
    ) -> Option<&'a mut V> {
        let id = self.find(arena, key)?;
        Some(&mut arena[id].value)
    }

    /// Unlinks the node holding `key` and returns its value; `None` when the
    /// key is not in this chain.
    pub(crate) fn delete<V>(&mut self, arena: &mut NodeArena<V>, key: &str) -> Option<V> {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let (hit, next) = {
                let node = &arena[id];
                (node.key == key, node.next)
            };
            if hit {
                match prev {
                    Some(p) => arena[p].next = next,
                    None => self.head = next,
                }
                return arena.remove(id).map(|node| node.value);
            }
            prev = cur;
            cur = next;
        }
        None
    }

    pub(crate) fn iter<'a, V>(&self, arena: &'a NodeArena<V>) -> ChainIter<'a, V> {
        ChainIter {
            arena,
            cur: self.head,
        }
    }

    pub(crate) fn len<V>(&self, arena: &NodeArena<V>) -> usize {
        self.iter(arena).count()
    }

    /// Node ids in chain order. Used by rehash, which relinks nodes into
    /// fresh buckets and leaves this bucket dangling.
    pub(crate) fn node_ids<V>(&self, arena: &NodeArena<V>) -> Vec<DefaultKey> {
        let mut ids = Vec::new();
        let mut cur = self.head;
        while let Some(id) = cur {
            ids.push(id);
            cur = arena[id].next;
        }
        ids
    }

    /// Prepends an existing arena node to this chain.
    pub(crate) fn link<V>(&mut self, arena: &mut NodeArena<V>, id: DefaultKey) {
        arena[id].next = self.head;
        self.head = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<V>(b: &ChainBucket, arena: &NodeArena<V>) -> Vec<String> {
        b.iter(arena).map(|(k, _)| k.to_string()).collect()
    }

    /// Invariant: new keys are prepended, so the newest key is found first.
    #[test]
    fn insert_prepends_distinct_keys() {
        let mut arena = NodeArena::new();
        let mut b = ChainBucket::new();
        assert_eq!(b.insert(&mut arena, "a".to_string(), 1), None);
        assert_eq!(b.insert(&mut arena, "b".to_string(), 2), None);
        assert_eq!(b.insert(&mut arena, "c".to_string(), 3), None);
        assert_eq!(keys(&b, &arena), ["c", "b", "a"]);
        assert_eq!(b.len(&arena), 3);
    }

    /// Invariant: re-inserting a key overwrites in place without reordering
    /// or growing the chain.
    #[test]
    fn insert_existing_key_updates_in_place() {
        let mut arena = NodeArena::new();
        let mut b = ChainBucket::new();
        b.insert(&mut arena, "a".to_string(), 1);
        b.insert(&mut arena, "b".to_string(), 2);
        assert_eq!(b.insert(&mut arena, "a".to_string(), 10), Some(1));
        assert_eq!(keys(&b, &arena), ["b", "a"]);
        assert_eq!(b.search(&arena, "a"), Some(&10));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn search_missing_is_none() {
        let mut arena: NodeArena<i32> = NodeArena::new();
        let mut b = ChainBucket::new();
        assert_eq!(b.search(&arena, "x"), None);
        b.insert(&mut arena, "a".to_string(), 1);
        assert_eq!(b.search(&arena, "x"), None);
    }

    /// Invariant: deleting the head, a middle node, and the tail each keep
    /// the rest of the chain reachable.
    #[test]
    fn delete_head_middle_tail() {
        let mut arena = NodeArena::new();
        let mut b = ChainBucket::new();
        for (i, k) in ["a", "b", "c", "d"].iter().enumerate() {
            b.insert(&mut arena, (*k).to_string(), i);
        }
        // chain: d c b a
        assert_eq!(b.delete(&mut arena, "d"), Some(3));
        assert_eq!(keys(&b, &arena), ["c", "b", "a"]);
        assert_eq!(b.delete(&mut arena, "b"), Some(1));
        assert_eq!(keys(&b, &arena), ["c", "a"]);
        assert_eq!(b.delete(&mut arena, "a"), Some(0));
        assert_eq!(keys(&b, &arena), ["c"]);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn delete_missing_leaves_chain_unchanged() {
        let mut arena = NodeArena::new();
        let mut b = ChainBucket::new();
        b.insert(&mut arena, "a".to_string(), 1);
        assert_eq!(b.delete(&mut arena, "zz"), None);
        assert_eq!(keys(&b, &arena), ["a"]);
    }

    /// Invariant: relinking node ids into another bucket moves the whole
    /// chain without touching the arena's contents.
    #[test]
    fn relink_moves_nodes_between_buckets() {
        let mut arena = NodeArena::new();
        let mut from = ChainBucket::new();
        from.insert(&mut arena, "a".to_string(), 1);
        from.insert(&mut arena, "b".to_string(), 2);

        let mut to = ChainBucket::new();
        for id in from.node_ids(&arena) {
            to.link(&mut arena, id);
        }
        // relinking in chain order (b, a) by prepend reverses the order
        assert_eq!(keys(&to, &arena), ["a", "b"]);
        assert_eq!(to.search(&arena, "b"), Some(&2));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn search_mut_updates_value() {
        let mut arena = NodeArena::new();
        let mut b = ChainBucket::new();
        b.insert(&mut arena, "a".to_string(), 1);
        if let Some(v) = b.search_mut(&mut arena, "a") {
            *v += 41;
        }
        assert_eq!(b.search(&arena, "a"), Some(&42));
        assert!(b.search_mut(&mut arena, "b").is_none());
    }
}
