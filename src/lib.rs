//! strategy-table: a string-keyed hash table built from scratch, with a
//! choice of separate chaining or linear probing and caller-driven
//! rehashing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the collision disciplines small and separately testable,
//!   behind one façade that never switches strategy after construction.
//! - Layers:
//!   - `hash_fn`: `(sum of code points) mod capacity`. Capacity is always an
//!     explicit argument so both sides of a resize use the same function.
//!   - `ChainBucket`: singly linked chain whose nodes live in a
//!     `slotmap::SlotMap` arena owned by the table.
//!   - `ChainingTable<V>`: fixed array of buckets plus the node arena.
//!   - `ProbingTable<V>`: fixed array of optional entries, forward scan with
//!     wraparound.
//!   - `Table<V>`: holds one of the two and forwards every call.
//!
//! Constraints
//! - Single-threaded; every mutation takes `&mut self`, so resize cannot
//!   interleave with any other operation.
//! - Keys are unique table-wide; inserting an existing key updates its value
//!   in place and returns the old one.
//! - Capacity never shrinks and only grows when the caller asks
//!   (`resize` doubles, `resize_to` picks an explicit size).
//!
//! Result types
//! - An absent key is `None`, never an error.
//! - A probing insert that finds no free slot after a full wraparound
//!   returns `TableFull<V>`, which gives the key and value back so the
//!   caller can resize and retry.
//! - Zero capacity, shrinking, and capacity overflow are `TableError`s.
//!
//! Probing deletion
//! - There are no tombstones. Clearing a slot in the middle of a cluster
//!   would hide every later key whose probe sequence crosses it, so delete
//!   lifts out the rest of the cluster and places each entry again from its
//!   home index. Search may then always stop at the first empty slot.
//!
//! Rehashing
//! - Chaining relinks arena nodes into fresh buckets under the new capacity;
//!   values are never cloned or dropped.
//! - Probing moves every entry, in old slot order, onto its probe sequence
//!   under the new capacity. This also closes any gaps left by earlier
//!   deletions.
//!
//! Notes and non-goals
//! - The hash is a checksum, not a quality hash; anagrams always collide.
//! - No automatic growth on a load-factor threshold.
//! - No persistence, no thread-safety.

mod chain_bucket;
pub mod chaining_table;
pub mod error;
pub mod hash_fn;
pub mod probing_table;
pub mod table;
mod table_proptest;

// Public surface
pub use chaining_table::ChainingTable;
pub use error::{TableError, TableFull};
pub use hash_fn::{bucket_index, index_histogram, DEFAULT_CAPACITY};
pub use probing_table::ProbingTable;
pub use table::{KeyValueTable, Strategy, Table, TableConfig};
