//! Error types returned by table construction, resizing and probing inserts.
//!
//! A missing key is never an error: `search` and `delete` return `Option`.

use core::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    #[error("cannot grow a table of capacity {capacity}: size overflows usize")]
    CapacityOverflow { capacity: usize },
    #[error("cannot shrink table from capacity {current} to {requested}")]
    WouldShrink { current: usize, requested: usize },
}

/// A probing insert found no free slot after a full wraparound.
///
/// The rejected pair is handed back so the caller can `resize()` and retry.
pub struct TableFull<V> {
    key: String,
    value: V,
    capacity: usize,
}

impl<V> TableFull<V> {
    pub(crate) fn new(key: String, value: V, capacity: usize) -> Self {
        Self {
            key,
            value,
            capacity,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Capacity of the table at the time of rejection.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_inner(self) -> (String, V) {
        (self.key, self.value)
    }
}

// Value is elided so these impls place no bounds on `V`.
impl<V> fmt::Debug for TableFull<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFull")
            .field("key", &self.key)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<V> fmt::Display for TableFull<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "table is full ({} slots occupied); resize before inserting {:?}",
            self.capacity, self.key
        )
    }
}

impl<V> std::error::Error for TableFull<V> {}
