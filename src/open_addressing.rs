//! A fixed-size table that resolves collisions by linear probing.
//!
//! Deleting an entry empties its slot outright; there are no tombstones. Any
//! key that probed past that slot on its way in can no longer be found by
//! `search`, even though it still sits in the table and still counts towards
//! `len`. Size the table generously and delete sparingly.

use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    mem,
};

use crate::{error::TableError, hashing::bucket_index, table::Table};

/// Capacity used by `Default`.
pub const DEFAULT_CAPACITY: usize = 10;

enum Slot<K, V> {
    Empty,
    Occupied(K, V),
}

/// Where a walk along the probe sequence stopped.
enum Probe {
    /// The slot holding the key.
    Found(usize),
    /// The first empty slot; the key isn't reachable from its home index.
    Vacant(usize),
    /// Went all the way around without finding the key or a hole.
    Exhausted,
}

pub struct OpenAddressingTable<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    slots: Vec<Slot<K, V>>,
    count: usize,
    hash_builder: S,
}

impl<K, V> OpenAddressingTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Make a new table with a fixed number of slots.
    pub fn with_capacity(capacity: usize) -> Self {
        OpenAddressingTable::with_capacity_and_hash_builder(capacity, Default::default())
    }
}

impl<K, V> Default for OpenAddressingTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K, V, S> OpenAddressingTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Makes a new table with a fixed number of slots and a hasher. A capacity
    /// of zero is bumped up to a single slot.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Self {
        OpenAddressingTable {
            slots: (0..capacity.max(1)).map(|_| Slot::Empty).collect(),
            count: 0,
            hash_builder,
        }
    }

    /// Like [`Table::insert`], but reports a saturated table instead of
    /// panicking. An update of a key that is already present always succeeds.
    pub fn try_insert(&mut self, k: K, v: V) -> Result<Option<V>, TableError> {
        match self.probe(&k) {
            Probe::Found(idx) => Ok(self.value_at_mut(idx).map(|value| mem::replace(value, v))),
            Probe::Vacant(idx) => {
                self.slots[idx] = Slot::Occupied(k, v);
                self.count += 1;
                Ok(None)
            }
            Probe::Exhausted => Err(TableError::CapacityExhausted {
                capacity: self.slots.len(),
            }),
        }
    }

    /// Every occupied slot, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(k, v) => Some((k, v)),
            Slot::Empty => None,
        })
    }

    fn value_at(&self, idx: usize) -> Option<&V> {
        match &self.slots[idx] {
            Slot::Occupied(_, v) => Some(v),
            Slot::Empty => None,
        }
    }

    fn value_at_mut(&mut self, idx: usize) -> Option<&mut V> {
        match &mut self.slots[idx] {
            Slot::Occupied(_, v) => Some(v),
            Slot::Empty => None,
        }
    }

    /// Walks from the home index of `k` over occupied slots, one at a time,
    /// wrapping at the end. Gives up after one lap.
    fn probe<Q>(&self, k: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let size = self.slots.len();
        let mut idx = bucket_index(&self.hash_builder, k, size);

        for _ in 0..size {
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(idx),
                Slot::Occupied(key, _) if Borrow::<Q>::borrow(key) == k => return Probe::Found(idx),
                Slot::Occupied(..) => idx = (idx + 1) % size,
            }
        }

        Probe::Exhausted
    }
}

impl<K, V, S> Table<K, V> for OpenAddressingTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// # Panics
    ///
    /// If `k` is new and every slot is already occupied. Use
    /// [`OpenAddressingTable::try_insert`] to handle that case yourself.
    fn insert(&mut self, k: K, v: V) -> Option<V> {
        match self.try_insert(k, v) {
            Ok(previous) => previous,
            Err(e) => panic!("{}", e),
        }
    }

    fn search<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(k) {
            Probe::Found(idx) => self.value_at(idx),
            _ => None,
        }
    }

    fn search_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(k) {
            Probe::Found(idx) => self.value_at_mut(idx),
            _ => None,
        }
    }

    fn delete<Q>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(k) {
            Probe::Found(idx) => {
                // no tombstone: whatever probed past this slot is now cut off
                self.slots[idx] = Slot::Empty;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.count = 0;
    }

    fn len(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}
