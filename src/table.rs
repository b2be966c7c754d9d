//! Table: façade over one collision strategy chosen at construction.

use crate::chaining_table::ChainingTable;
use crate::error::{TableError, TableFull};
use crate::hash_fn::DEFAULT_CAPACITY;
use crate::probing_table::ProbingTable;
use core::convert::Infallible;

/// Collision-resolution discipline.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// One linked chain per bucket; never full.
    #[default]
    Chaining,
    /// Linear probing with wraparound; full once every slot is taken.
    Probing,
}

/// Construction parameters for a [`Table`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    pub strategy: Strategy,
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Capability set shared by both strategies and the façade.
pub trait KeyValueTable<V> {
    /// Why an insert of a new key can be refused.
    type InsertError;

    fn insert(&mut self, key: String, value: V) -> Result<Option<V>, Self::InsertError>;
    fn search(&self, key: &str) -> Option<&V>;
    fn search_mut(&mut self, key: &str) -> Option<&mut V>;
    fn delete(&mut self, key: &str) -> Option<V>;
    fn resize(&mut self) -> Result<(), TableError>;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> KeyValueTable<V> for ChainingTable<V> {
    type InsertError = Infallible;

    fn insert(&mut self, key: String, value: V) -> Result<Option<V>, Infallible> {
        Ok(ChainingTable::insert(self, key, value))
    }
    fn search(&self, key: &str) -> Option<&V> {
        ChainingTable::search(self, key)
    }
    fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        ChainingTable::search_mut(self, key)
    }
    fn delete(&mut self, key: &str) -> Option<V> {
        ChainingTable::delete(self, key)
    }
    fn resize(&mut self) -> Result<(), TableError> {
        ChainingTable::resize(self)
    }
    fn len(&self) -> usize {
        ChainingTable::len(self)
    }
    fn capacity(&self) -> usize {
        ChainingTable::capacity(self)
    }
}

impl<V> KeyValueTable<V> for ProbingTable<V> {
    type InsertError = TableFull<V>;

    fn insert(&mut self, key: String, value: V) -> Result<Option<V>, TableFull<V>> {
        ProbingTable::insert(self, key, value)
    }
    fn search(&self, key: &str) -> Option<&V> {
        ProbingTable::search(self, key)
    }
    fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        ProbingTable::search_mut(self, key)
    }
    fn delete(&mut self, key: &str) -> Option<V> {
        ProbingTable::delete(self, key)
    }
    fn resize(&mut self) -> Result<(), TableError> {
        ProbingTable::resize(self)
    }
    fn len(&self) -> usize {
        ProbingTable::len(self)
    }
    fn capacity(&self) -> usize {
        ProbingTable::capacity(self)
    }
}

#[derive(Debug)]
enum Inner<V> {
    Chaining(ChainingTable<V>),
    Probing(ProbingTable<V>),
}

/// String-keyed table holding exactly one strategy for its lifetime.
///
/// Every operation forwards to the strategy unchanged. The only
/// strategy-visible difference is that a probing table can refuse a new
/// key with [`TableFull`]; a chaining table never does.
#[derive(Debug)]
pub struct Table<V> {
    inner: Inner<V>,
}

impl<V> Table<V> {
    pub fn new(strategy: Strategy, capacity: usize) -> Result<Self, TableError> {
        let inner = match strategy {
            Strategy::Chaining => Inner::Chaining(ChainingTable::new(capacity)?),
            Strategy::Probing => Inner::Probing(ProbingTable::new(capacity)?),
        };
        Ok(Self { inner })
    }

    pub fn with_default_capacity(strategy: Strategy) -> Self {
        let inner = match strategy {
            Strategy::Chaining => Inner::Chaining(ChainingTable::with_default_capacity()),
            Strategy::Probing => Inner::Probing(ProbingTable::with_default_capacity()),
        };
        Self { inner }
    }

    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        Self::new(config.strategy, config.capacity)
    }

    pub fn strategy(&self) -> Strategy {
        match self.inner {
            Inner::Chaining(_) => Strategy::Chaining,
            Inner::Probing(_) => Strategy::Probing,
        }
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Result<Option<V>, TableFull<V>> {
        match &mut self.inner {
            Inner::Chaining(t) => Ok(t.insert(key, value)),
            Inner::Probing(t) => t.insert(key, value),
        }
    }

    pub fn search(&self, key: &str) -> Option<&V> {
        match &self.inner {
            Inner::Chaining(t) => t.search(key),
            Inner::Probing(t) => t.search(key),
        }
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        match &mut self.inner {
            Inner::Chaining(t) => t.search_mut(key),
            Inner::Probing(t) => t.search_mut(key),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match &self.inner {
            Inner::Chaining(t) => t.contains_key(key),
            Inner::Probing(t) => t.contains_key(key),
        }
    }

    pub fn delete(&mut self, key: &str) -> Option<V> {
        match &mut self.inner {
            Inner::Chaining(t) => t.delete(key),
            Inner::Probing(t) => t.delete(key),
        }
    }

    pub fn resize(&mut self) -> Result<(), TableError> {
        match &mut self.inner {
            Inner::Chaining(t) => t.resize(),
            Inner::Probing(t) => t.resize(),
        }
    }

    pub fn resize_to(&mut self, new_capacity: usize) -> Result<(), TableError> {
        match &mut self.inner {
            Inner::Chaining(t) => t.resize_to(new_capacity),
            Inner::Probing(t) => t.resize_to(new_capacity),
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Chaining(t) => t.len(),
            Inner::Probing(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.inner {
            Inner::Chaining(t) => t.capacity(),
            Inner::Probing(t) => t.capacity(),
        }
    }

    pub fn load_factor(&self) -> f64 {
        match &self.inner {
            Inner::Chaining(t) => t.load_factor(),
            Inner::Probing(t) => t.load_factor(),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        match &self.inner {
            Inner::Chaining(t) => Box::new(t.iter()),
            Inner::Probing(t) => Box::new(t.iter()),
        }
    }
}

impl<V> KeyValueTable<V> for Table<V> {
    type InsertError = TableFull<V>;

    fn insert(&mut self, key: String, value: V) -> Result<Option<V>, TableFull<V>> {
        Table::insert(self, key, value)
    }
    fn search(&self, key: &str) -> Option<&V> {
        Table::search(self, key)
    }
    fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        Table::search_mut(self, key)
    }
    fn delete(&mut self, key: &str) -> Option<V> {
        Table::delete(self, key)
    }
    fn resize(&mut self) -> Result<(), TableError> {
        Table::resize(self)
    }
    fn len(&self) -> usize {
        Table::len(self)
    }
    fn capacity(&self) -> usize {
        Table::capacity(self)
    }
}
