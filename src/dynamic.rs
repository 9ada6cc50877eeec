//! A chaining table that doubles its bucket count whenever the load factor
//! climbs past [`LOAD_FACTOR_THRESHOLD`].

use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    mem,
};

use log::debug;

use crate::{chain::Chains, hashing::bucket_index, table::Table};

/// Capacity used by `Default`.
pub const DEFAULT_CAPACITY: usize = 8;

/// Once `len / capacity` goes above this, the table grows.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.7;

/// Chaining table that keeps its load factor at or under
/// [`LOAD_FACTOR_THRESHOLD`]. The check runs at the end of every insert that
/// adds a new key, and any resize finishes before `insert` returns, so the
/// bound holds whenever you can observe the table.
pub struct DynamicTable<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    chains: Chains<K, V>,
    hash_builder: S,
}

impl<K, V> DynamicTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Make a new table with an initial number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicTable::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V> Default for DynamicTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V, S> DynamicTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Makes a new table with an initial number of buckets and a hasher. A
    /// capacity of zero is bumped up to a single bucket.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        DynamicTable {
            chains: Chains::with_size(capacity.max(1)),
            hash_builder,
        }
    }

    /// Every live pair, bucket by bucket. The order changes across resizes.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.chains.iter()
    }

    fn idx<Q>(&self, k: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        bucket_index(&self.hash_builder, k, self.chains.size())
    }

    /// Doubles the bucket count and rehashes every live pair into the new
    /// buckets.
    fn resize(&mut self) {
        let new_size = self.chains.size() * 2;
        let old = mem::replace(&mut self.chains, Chains::with_size(new_size));

        debug!(
            "Resizing table from {} to {} buckets ({} entries)",
            old.size(),
            new_size,
            old.len()
        );

        for (k, v) in old.into_entries() {
            let idx = bucket_index(&self.hash_builder, &k, new_size);
            self.chains.insert(idx, k, v);
        }
    }
}

impl<K, V, S> Table<K, V> for DynamicTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, k: K, v: V) -> Option<V> {
        let idx = self.idx(&k);
        let previous = self.chains.insert(idx, k, v);

        if previous.is_none() {
            while self.load_factor() > LOAD_FACTOR_THRESHOLD {
                self.resize();
            }
        }

        previous
    }

    fn search<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chains.get(self.idx(k), k)
    }

    fn search_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.idx(k);
        self.chains.get_mut(idx, k)
    }

    fn delete<Q>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.idx(k);
        self.chains.remove(idx, k).is_some()
    }

    fn clear(&mut self) {
        self.chains.clear();
    }

    fn len(&self) -> usize {
        self.chains.len()
    }

    fn capacity(&self) -> usize {
        self.chains.size()
    }
}
