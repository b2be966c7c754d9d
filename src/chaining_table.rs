//! ChainingTable: separate chaining over a fixed array of buckets.

use crate::chain_bucket::{ChainBucket, NodeArena};
use crate::error::TableError;
use crate::hash_fn::{
    bucket_index, doubled, resize_target, validate_capacity, DEFAULT_NONZERO_CAPACITY,
};
use core::num::NonZeroUsize;
use log::debug;

/// Hash table resolving collisions with one linked chain per bucket.
///
/// Load factor is unbounded; the table only grows when the caller asks
/// via [`resize`](Self::resize) or [`resize_to`](Self::resize_to).
#[derive(Debug)]
pub struct ChainingTable<V> {
    capacity: NonZeroUsize,
    buckets: Vec<ChainBucket>,
    nodes: NodeArena<V>, // every entry of every chain
}

impl<V> ChainingTable<V> {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        validate_capacity(capacity).map(Self::with_nonzero_capacity)
    }

    pub fn with_default_capacity() -> Self {
        Self::with_nonzero_capacity(DEFAULT_NONZERO_CAPACITY)
    }

    fn with_nonzero_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            buckets: vec![ChainBucket::new(); capacity.get()],
            nodes: NodeArena::new(),
        }
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        bucket_index(key, self.capacity)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Inserts or updates `key`. Returns the previous value on update.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        let b = self.bucket_of(&key);
        self.buckets[b].insert(&mut self.nodes, key, value)
    }

    pub fn search(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_of(key)].search(&self.nodes, key)
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let b = self.bucket_of(key);
        self.buckets[b].search_mut(&mut self.nodes, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let b = self.bucket_of(key);
        self.buckets[b].delete(&mut self.nodes, key)
    }

    /// Doubles the capacity and rehashes every entry.
    pub fn resize(&mut self) -> Result<(), TableError> {
        self.resize_to(doubled(self.capacity)?)
    }

    /// Grows to `new_capacity` and rehashes every entry under it.
    ///
    /// Old buckets are walked in order and each node is relinked at the head
    /// of its new bucket, exactly as a fresh insert would place it. Nodes
    /// never leave the arena, so values are neither cloned nor dropped.
    pub fn resize_to(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let target = resize_target(self.capacity, new_capacity)?;
        if target == self.capacity {
            return Ok(());
        }
        let old = core::mem::replace(&mut self.buckets, vec![ChainBucket::new(); target.get()]);
        let old_capacity = core::mem::replace(&mut self.capacity, target);
        for bucket in &old {
            for id in bucket.node_ids(&self.nodes) {
                let b = bucket_index(&self.nodes[id].key, target);
                self.buckets[b].link(&mut self.nodes, id);
            }
        }
        debug!(
            "chaining table resized {} -> {} buckets, {} entries rehashed",
            old_capacity,
            target,
            self.len()
        );
        Ok(())
    }

    /// Length of every chain, indexed by bucket.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.len(&self.nodes)).collect()
    }

    /// Iterates entries bucket by bucket, each chain head first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets.iter().flat_map(move |b| b.iter(&self.nodes))
    }
}

impl<V> Default for ChainingTable<V> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
