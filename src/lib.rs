//! Hash tables four ways, and the traversals that tend to travel with them.
//!
//! The tables share one [`Table`] contract where a miss is `None`:
//! [`OpenAddressingTable`] (linear probing, fixed size), [`ChainingTable`]
//! (fixed buckets, unbounded chains) and [`DynamicTable`] (chaining that grows
//! to keep its load factor under 0.7). [`InstrumentedTable`] stands apart: it
//! counts collisions and reports a miss as [`TableError::KeyNotFound`].
//!
//! The [`traversal`] module covers binary trees, directed graphs, linked lists
//! and, with the `fs` feature, directory hierarchies.

mod chain;
mod chaining;
mod dynamic;
mod error;
mod hashing;
mod instrumented;
#[cfg(test)]
mod logger;
mod open_addressing;
mod table;
pub mod traversal;

pub use chaining::ChainingTable;
pub use dynamic::{DynamicTable, LOAD_FACTOR_THRESHOLD};
pub use error::TableError;
pub use hashing::{BuildIdentityHasher, CharSumHashing, IdentityHasher, KeyHashing, StdHashing};
pub use instrumented::{InstrumentedTable, TableStats};
pub use open_addressing::OpenAddressingTable;
pub use table::Table;
