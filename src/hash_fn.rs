//! Character-sum hash: `(sum of code points) mod capacity`.
//!
//! Capacity is always passed explicitly so the same function serves both
//! sides of a resize.

use crate::error::TableError;
use core::num::NonZeroUsize;

/// Capacity used when a caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 11;

pub(crate) const DEFAULT_NONZERO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(c) => c,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

pub fn validate_capacity(capacity: usize) -> Result<NonZeroUsize, TableError> {
    NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity(capacity))
}

/// Checks a resize target: non-zero and not below `current`.
pub(crate) fn resize_target(
    current: NonZeroUsize,
    requested: usize,
) -> Result<NonZeroUsize, TableError> {
    let target = validate_capacity(requested)?;
    if target < current {
        return Err(TableError::WouldShrink {
            current: current.get(),
            requested,
        });
    }
    Ok(target)
}

pub(crate) fn doubled(current: NonZeroUsize) -> Result<usize, TableError> {
    current
        .get()
        .checked_mul(2)
        .ok_or(TableError::CapacityOverflow {
            capacity: current.get(),
        })
}

/// Home index of `key` in a table of `capacity` slots. Empty keys map to 0.
#[inline]
pub fn bucket_index(key: &str, capacity: NonZeroUsize) -> usize {
    let sum = key
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c)));
    (sum % capacity.get() as u64) as usize
}

/// Number of keys landing on each index under `capacity`.
pub fn index_histogram<I, K>(keys: I, capacity: NonZeroUsize) -> Vec<usize>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut counts = vec![0; capacity.get()];
    for k in keys {
        counts[bucket_index(k.as_ref(), capacity)] += 1;
    }
    counts
}
