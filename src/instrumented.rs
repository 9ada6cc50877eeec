//! A chaining table that keeps count of its collisions and reports a lookup
//! miss as [`TableError::KeyNotFound`] rather than `None`.

use std::{borrow::Borrow, fmt, hash::Hash};

use log::trace;

use crate::{
    chain::Chains,
    error::TableError,
    hashing::{CharSumHashing, KeyHashing, StdHashing},
};

/// Capacity used by `Default`.
pub const DEFAULT_CAPACITY: usize = 16;

/// A snapshot of how full and how clumpy an [`InstrumentedTable`] is.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    /// Number of buckets.
    pub size: usize,
    /// Live entries.
    pub entries: usize,
    /// Inserts that landed in a bucket which already had something in it.
    pub collisions: usize,
    pub load_factor: f64,
    /// Mean chain length over every bucket, empty ones included.
    pub avg_chain_length: f64,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size={} entries={} collisions={} load_factor={:.3} avg_chain_length={:.3}",
            self.size, self.entries, self.collisions, self.load_factor, self.avg_chain_length
        )
    }
}

/// Chaining table with a pluggable [`KeyHashing`] strategy, chosen when the
/// table is built.
pub struct InstrumentedTable<K, V, H = StdHashing>
where
    K: Eq,
    H: KeyHashing<K>,
{
    chains: Chains<K, V>,
    hashing: H,
    collisions: usize,
}

impl<K, V> InstrumentedTable<K, V, StdHashing>
where
    K: Eq + Hash,
{
    /// A table that hashes keys through their `Hash` impl.
    pub fn with_capacity(capacity: usize) -> Self {
        InstrumentedTable::with_capacity_and_hashing(capacity, StdHashing::default())
    }
}

impl<K, V> Default for InstrumentedTable<K, V, StdHashing>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V> InstrumentedTable<K, V, CharSumHashing>
where
    K: Eq + AsRef<str>,
{
    /// A table for string keys that hashes by summing character codes.
    pub fn with_char_sum_hashing(capacity: usize) -> Self {
        InstrumentedTable::with_capacity_and_hashing(capacity, CharSumHashing)
    }
}

impl<K, V, H> InstrumentedTable<K, V, H>
where
    K: Eq,
    H: KeyHashing<K>,
{
    /// Makes a new table with a fixed number of buckets and a hashing
    /// strategy. A capacity of zero is bumped up to a single bucket.
    pub fn with_capacity_and_hashing(capacity: usize, hashing: H) -> Self {
        InstrumentedTable {
            chains: Chains::with_size(capacity.max(1)),
            hashing,
            collisions: 0,
        }
    }

    /// Puts a pair into the table, returning the value it replaced. Landing
    /// in an occupied bucket counts as a collision whether or not the key was
    /// already there.
    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        let idx = self.hashing.bucket_for(&k, self.chains.size());

        if self.chains.chain_len(idx) > 0 {
            self.collisions += 1;
            trace!(
                "Collision in bucket {} (chain length {})",
                idx,
                self.chains.chain_len(idx)
            );
        }

        self.chains.insert(idx, k, v)
    }

    pub fn search<Q>(&self, k: &Q) -> Result<&V, TableError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHashing<Q>,
    {
        let idx = self.hashing.bucket_for(k, self.chains.size());
        self.chains.get(idx, k).ok_or(TableError::KeyNotFound)
    }

    pub fn search_mut<Q>(&mut self, k: &Q) -> Result<&mut V, TableError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHashing<Q>,
    {
        let idx = self.hashing.bucket_for(k, self.chains.size());
        self.chains.get_mut(idx, k).ok_or(TableError::KeyNotFound)
    }

    /// Removes `k`, handing back the value it held.
    pub fn delete<Q>(&mut self, k: &Q) -> Result<V, TableError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHashing<Q>,
    {
        let idx = self.hashing.bucket_for(k, self.chains.size());
        self.chains.remove(idx, k).ok_or(TableError::KeyNotFound)
    }

    pub fn stats(&self) -> TableStats {
        let size = self.chains.size();
        let entries = self.chains.len();
        let avg = entries as f64 / size as f64;

        TableStats {
            size,
            entries,
            collisions: self.collisions,
            load_factor: avg,
            avg_chain_length: avg,
        }
    }

    /// Cumulative collisions since the table was built.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.chains.size()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.chains.iter()
    }
}
