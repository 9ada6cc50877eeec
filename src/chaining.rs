//! A fixed number of buckets, each holding a chain of the pairs that hashed
//! there. Chains grow without bound; nothing ever resizes.

use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
};

use crate::{chain::Chains, hashing::bucket_index, table::Table};

/// Capacity used by `Default`.
pub const DEFAULT_CAPACITY: usize = 10;

pub struct ChainingTable<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    chains: Chains<K, V>,
    hash_builder: S,
}

impl<K, V> ChainingTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Make a new table with a fixed number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        ChainingTable::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V> Default for ChainingTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V, S> ChainingTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Makes a new table with a fixed number of buckets and a hasher. A
    /// capacity of zero is bumped up to a single bucket.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        ChainingTable {
            chains: Chains::with_size(capacity.max(1)),
            hash_builder,
        }
    }

    /// Every live pair, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.chains.iter()
    }

    fn idx<Q>(&self, k: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        bucket_index(&self.hash_builder, k, self.chains.size())
    }
}

impl<K, V, S> Table<K, V> for ChainingTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, k: K, v: V) -> Option<V> {
        let idx = self.idx(&k);
        self.chains.insert(idx, k, v)
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
