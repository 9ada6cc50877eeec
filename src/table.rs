use std::{borrow::Borrow, hash::Hash};

/// Describes what a table is. A miss is `None` (or `false`), never an error;
/// see [`InstrumentedTable`](crate::InstrumentedTable) for the variant that
/// treats a miss as a failure.
pub trait Table<K, V>
where
    K: Eq + Hash,
{
    /// Put a pair into the table. Returns the previous value if the key
    /// already had one there.
    fn insert(&mut self, k: K, v: V) -> Option<V>;

    /// Look up the value stored under `k`.
    fn search<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Look up a mutable reference to the value stored under `k`.
    fn search_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Remove `k` from the table, returning whether there was anything to
    /// remove.
    fn delete<Q>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.search(k).is_some()
    }

    /// Drops every entry. The capacity stays where it is.
    fn clear(&mut self);

    /// The number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of slots or buckets the table has right now.
    fn capacity(&self) -> usize;

    /// Live entries divided by capacity.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}
