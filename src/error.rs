use thiserror::Error;

/// Failures a table can report instead of a plain `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The instrumented table treats a lookup miss as an error.
    #[error("key not found")]
    KeyNotFound,

    /// Every slot of an open-addressing table is taken and the key being
    /// inserted isn't one of them.
    #[error("open-addressing table is saturated ({capacity} slots, none free)")]
    CapacityExhausted { capacity: usize },
}
