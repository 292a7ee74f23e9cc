use std::fmt::Debug;

use crate::error::TableError;
use crate::footprint::Footprint;

/// Keys are host-width signed integers. Any value is accepted, negatives included.
pub type Key = isize;

/// A stored key/value pair. Entries are never modified once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    key: Key,
    value: T,
}

impl<T> Entry<T> {
    pub(crate) fn new(key: Key, value: T) -> Self {
        Entry { key, value }
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// The fixed-capacity table contract shared by both collision strategies.
///
/// Duplicate keys are appended rather than replaced and `search` returns the value of the
/// first matching entry it reaches, which is the earliest inserted one for both strategies.
pub trait Table<T>
where
    T: Debug + Footprint,
{
    /// Human readable name used to label benchmark results.
    const LABEL: &'static str;

    fn with_capacity(capacity: usize) -> Result<Self, TableError>
    where
        Self: Sized;

    fn insert(&mut self, key: Key, value: T) -> Result<(), TableError>;

    fn search(&self, key: Key) -> Option<&T>;

    /// Approximate bytes used by the backing storage and the stored values.
    fn memory_footprint(&self) -> usize;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dumps the table's contents at `trace` level.
    fn log_layout(&self) {}

    fn load_factor(&self) -> f64 {
        if self.capacity() == 0 {
            0.0
        } else {
            self.len() as f64 / self.capacity() as f64
        }
    }
}
