//! Bucket storage shared by the chaining tables. Callers work out which bucket
//! a key belongs in; this only keeps the chains and the entry count straight.

use std::{borrow::Borrow, mem};

/// One chain: the pairs that hashed to the same bucket, in insertion order.
type Bucket<K, V> = Vec<(K, V)>;

pub(crate) struct Chains<K, V> {
    buckets: Vec<Bucket<K, V>>,

    /// Live entries across every bucket.
    count: usize,
}

impl<K, V> Chains<K, V>
where
    K: Eq,
{
    /// Allocates `size` empty buckets.
    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            buckets: (0..size).map(|_| Vec::new()).collect(),
            count: 0,
        }
    }

    /// Number of buckets.
    pub(crate) fn size(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    /// How many pairs are chained in bucket `idx`.
    pub(crate) fn chain_len(&self, idx: usize) -> usize {
        self.buckets[idx].len()
    }

    /// Replaces the value if the bucket already holds `k`, otherwise appends
    /// the pair to the end of the chain.
    pub(crate) fn insert(&mut self, idx: usize, k: K, v: V) -> Option<V> {
        let bucket = &mut self.buckets[idx];

        if let Some(pos) = position(bucket, &k) {
            return Some(mem::replace(&mut bucket[pos].1, v));
        }

        bucket.push((k, v));
        self.count += 1;
        None
    }

    pub(crate) fn get<Q>(&self, idx: usize, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let bucket = &self.buckets[idx];
        position(bucket, k).map(|pos| &bucket[pos].1)
    }

    pub(crate) fn get_mut<Q>(&mut self, idx: usize, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let bucket = &mut self.buckets[idx];
        position(bucket, k).map(move |pos| &mut bucket[pos].1)
    }

    /// Takes `k` out of its chain. The pairs behind it keep their order.
    pub(crate) fn remove<Q>(&mut self, idx: usize, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let bucket = &mut self.buckets[idx];
        let pos = position(bucket, k)?;
        self.count -= 1;
        Some(bucket.remove(pos).1)
    }

    /// Empties every bucket, keeping the bucket count.
    pub(crate) fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.count = 0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Consumes the storage, yielding every live pair. Used when rehashing.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.buckets.into_iter().flatten()
    }
}

fn position<K, V, Q>(bucket: &[(K, V)], k: &Q) -> Option<usize>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    bucket.iter().position(|(key, _)| Borrow::<Q>::borrow(key) == k)
}
