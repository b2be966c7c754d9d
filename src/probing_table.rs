//! ProbingTable: open addressing with linear probing and wraparound.
//!
//! Invariants
//! - Every live key sits on the forward probe sequence from its home index
//!   with no empty slot in between. Search relies on this to stop at the
//!   first empty slot.
//! - There are no tombstones. Delete restores the first invariant by
//!   re-placing every entry of the cluster that followed the freed slot.
//! - A scan visits at most `capacity` slots, so a fully occupied table
//!   terminates with `Probe::Full` instead of looping.

use crate::error::{TableError, TableFull};
use crate::hash_fn::{
    bucket_index, doubled, resize_target, validate_capacity, DEFAULT_NONZERO_CAPACITY,
};
use core::num::NonZeroUsize;
use log::{debug, trace};

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Outcome of walking a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

/// Hash table resolving collisions by scanning forward to the next slot.
#[derive(Debug)]
pub struct ProbingTable<V> {
    capacity: NonZeroUsize,
    slots: Vec<Option<Entry<V>>>,
    len: usize,
}

fn empty_slots<V>(n: usize) -> Vec<Option<Entry<V>>> {
    core::iter::repeat_with(|| None).take(n).collect()
}

impl<V> ProbingTable<V> {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        validate_capacity(capacity).map(Self::with_nonzero_capacity)
    }

    pub fn with_default_capacity() -> Self {
        Self::with_nonzero_capacity(DEFAULT_NONZERO_CAPACITY)
    }

    fn with_nonzero_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            slots: empty_slots(capacity.get()),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    #[inline]
    fn next_slot(&self, i: usize) -> usize {
        (i + 1) % self.capacity.get()
    }

    fn probe(&self, key: &str) -> Probe {
        let start = bucket_index(key, self.capacity);
        let mut i = start;
        loop {
            match &self.slots[i] {
                None => return Probe::Vacant(i),
                Some(e) if e.key == key => return Probe::Found(i),
                Some(_) => {}
            }
            i = self.next_slot(i);
            if i == start {
                return Probe::Full;
            }
        }
    }

    /// First empty slot on the probe sequence from `home`.
    fn vacant_from(&self, home: usize) -> Option<usize> {
        let cap = self.capacity.get();
        (0..cap)
            .map(|step| (home + step) % cap)
            .find(|&i| self.slots[i].is_none())
    }

    /// Places an entry whose key is known to be absent.
    fn place(&mut self, entry: Entry<V>) {
        let home = bucket_index(&entry.key, self.capacity);
        match self.vacant_from(home) {
            Some(i) => self.slots[i] = Some(entry),
            None => unreachable!("placing into a table with no free slot"),
        }
    }

    /// Inserts or updates `key`. Returns the previous value on update.
    ///
    /// A new key that finds no empty slot after a full wraparound is rejected
    /// with [`TableFull`], which hands the pair back for a retry after
    /// [`resize`](Self::resize). Updating an existing key always succeeds.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Result<Option<V>, TableFull<V>> {
        let key = key.into();
        match self.probe(&key) {
            Probe::Found(i) => {
                let slot = self.slots[i].as_mut().map(|e| &mut e.value);
                Ok(slot.map(|v| core::mem::replace(v, value)))
            }
            Probe::Vacant(i) => {
                self.slots[i] = Some(Entry { key, value });
                self.len += 1;
                Ok(None)
            }
            Probe::Full => {
                debug!(
                    "probing table full ({} slots), rejecting key {:?}",
                    self.capacity, key
                );
                Err(TableFull::new(key, value, self.capacity.get()))
            }
        }
    }

    pub fn search(&self, key: &str) -> Option<&V> {
        match self.probe(key) {
            Probe::Found(i) => self.slots[i].as_ref().map(|e| &e.value),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Found(i) => self.slots[i].as_mut().map(|e| &mut e.value),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Steps between `key`'s home index and the slot holding it.
    pub fn probe_distance(&self, key: &str) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(i) => {
                let home = bucket_index(key, self.capacity);
                Some((i + self.capacity.get() - home) % self.capacity.get())
            }
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Removes `key` and returns its value, or `None` if it was absent.
    ///
    /// The freed slot would otherwise split the cluster and hide any later
    /// entry whose probe sequence passes through it, so the remainder of
    /// the cluster is lifted out and placed again from each entry's home.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let hole = match self.probe(key) {
            Probe::Found(i) => i,
            Probe::Vacant(_) | Probe::Full => return None,
        };
        let removed = self.slots[hole].take()?;
        self.len -= 1;
        self.recompact_after(hole);
        Some(removed.value)
    }

    fn recompact_after(&mut self, hole: usize) {
        let mut displaced = Vec::new();
        let mut i = self.next_slot(hole);
        while i != hole {
            match self.slots[i].take() {
                Some(e) => displaced.push(e),
                None => break,
            }
            i = self.next_slot(i);
        }
        if displaced.is_empty() {
            return;
        }
        trace!(
            "re-placing {} entries after freeing slot {}",
            displaced.len(),
            hole
        );
        for e in displaced {
            self.place(e);
        }
    }

    /// Doubles the capacity and rehashes every entry.
    pub fn resize(&mut self) -> Result<(), TableError> {
        self.resize_to(doubled(self.capacity)?)
    }

    /// Grows to `new_capacity` and re-places every entry, in old slot order,
    /// on its probe sequence under the new capacity.
    pub fn resize_to(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let target = resize_target(self.capacity, new_capacity)?;
        if target == self.capacity {
            return Ok(());
        }
        let old = core::mem::replace(&mut self.slots, empty_slots(target.get()));
        let old_capacity = core::mem::replace(&mut self.capacity, target);
        for e in old.into_iter().flatten() {
            self.place(e);
        }
        debug!(
            "probing table resized {} -> {} slots, {} entries rehashed",
            old_capacity, target, self.len
        );
        Ok(())
    }

    /// Iterates live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.slots
            .iter()
            .filter_map(|s| s.as_ref().map(|e| (e.key.as_str(), &e.value)))
    }
}

impl<V> Default for ProbingTable<V> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
