//! Everything that turns a key into a bucket index. Tables generic over a
//! `BuildHasher` go through [`bucket_index`]; the instrumented table picks a
//! [`KeyHashing`] strategy when it's built.

use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash, Hasher},
};

/// Hashes `k` with a fresh hasher from `hash_builder` and folds it into
/// `[0, size)`.
pub(crate) fn bucket_index<Q, S>(hash_builder: &S, k: &Q, size: usize) -> usize
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    let mut h = hash_builder.build_hasher();
    k.hash(&mut h);
    (h.finish() % size as u64) as usize
}

/// Proxies integers for themselves, so a key that hashes as a single integer
/// lands in bucket `key % size`. Handy whenever you need to know where a key
/// will go, which is mostly in tests. Every further write is folded into the
/// state, so strings and compound keys still spread out, just not anywhere
/// you'd predict by eye.
#[derive(Debug, Default)]
pub struct IdentityHasher(u64);

impl IdentityHasher {
    fn fold(&mut self, i: u64) {
        self.0 = self.0.rotate_left(8) ^ i;
    }
}

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.fold(*byte as u64);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.fold(i as u64);
    }

    fn write_u16(&mut self, i: u16) {
        self.fold(i as u64);
    }

    fn write_u32(&mut self, i: u32) {
        self.fold(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.fold(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new IdentityHashers on demand.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildIdentityHasher;

impl BuildHasher for BuildIdentityHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher(0)
    }
}

/// A way of hashing keys of type `K`. Equal keys must produce equal hashes.
pub trait KeyHashing<K>
where
    K: ?Sized,
{
    fn hash_key(&self, k: &K) -> u64;

    /// The bucket `k` belongs in for a table of `size` buckets.
    fn bucket_for(&self, k: &K, size: usize) -> usize {
        (self.hash_key(k) % size as u64) as usize
    }
}

/// Hashes through the key's `Hash` impl with whatever `BuildHasher` you give
/// it.
#[derive(Debug, Default, Clone)]
pub struct StdHashing<S = RandomState>(S);

impl<S> StdHashing<S>
where
    S: BuildHasher,
{
    pub fn with_hash_builder(hash_builder: S) -> Self {
        Self(hash_builder)
    }
}

impl<K, S> KeyHashing<K> for StdHashing<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    fn hash_key(&self, k: &K) -> u64 {
        let mut h = self.0.build_hasher();
        k.hash(&mut h);
        h.finish()
    }
}

/// For string keys: the sum of the key's character code points. Anagrams
/// collide, which is rather the point when you want to watch collisions
/// happen.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharSumHashing;

impl<K> KeyHashing<K> for CharSumHashing
where
    K: AsRef<str> + ?Sized,
{
    fn hash_key(&self, k: &K) -> u64 {
        k.as_ref().chars().map(|c| c as u64).sum()
    }
}
