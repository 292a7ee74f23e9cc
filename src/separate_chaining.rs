use std::fmt::Debug;
use std::mem::size_of;

use log::trace;

use crate::error::TableError;
use crate::footprint::Footprint;
use crate::hash::hash;
use crate::table::{Entry, Key, Table};

type Chain<T> = Vec<Entry<T>>;

/// A fixed-capacity table that resolves collisions by appending to a per-slot chain.
///
/// Chains are unbounded, so inserts never fail. Entries in a chain stay in insertion order.
#[derive(Debug, Clone)]
pub struct SeparateChainingTable<T>
where
    T: Debug + Footprint,
{
    count: usize,
    chains: Vec<Chain<T>>,
}

impl<T> SeparateChainingTable<T>
where
    T: Debug + Footprint,
{
    pub const CHAIN_SIZE: usize = size_of::<Chain<T>>();
    pub const ENTRY_SIZE: usize = size_of::<Entry<T>>();

    /// The entries chained at `index`, oldest first. Out of range indices yield an empty slice.
    pub fn chain(&self, index: usize) -> &[Entry<T>] {
        match self.chains.get(index) {
            Some(chain) => chain.as_slice(),
            None => &[],
        }
    }

    pub fn longest_chain(&self) -> usize {
        self.chains.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<T> Table<T> for SeparateChainingTable<T>
where
    T: Debug + Footprint,
{
    const LABEL: &'static str = "Separate Chaining";

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut chains: Vec<Chain<T>> = Vec::with_capacity(capacity);
        chains.resize_with(capacity, Vec::new);
        Ok(SeparateChainingTable { count: 0, chains })
    }

    #[inline]
    fn insert(&mut self, key: Key, value: T) -> Result<(), TableError> {
        let h: usize = hash(key, self.chains.len());
        self.chains[h].push(Entry::new(key, value));
        self.count += 1;
        Ok(())
    }

    #[inline]
    fn search(&self, key: Key) -> Option<&T> {
        let h: usize = hash(key, self.chains.len());
        self.chains[h]
            .iter()
            .find(|entry| entry.key() == key)
            .map(Entry::value)
    }

    /// `size_of::<Vec<Chain<T>>>() + capacity * CHAIN_SIZE
    ///   + Σ chain.capacity() * ENTRY_SIZE + Σ heap bytes of stored values`
    fn memory_footprint(&self) -> usize {
        let mut total: usize = size_of::<Vec<Chain<T>>>() + self.chains.len() * Self::CHAIN_SIZE;
        for chain in self.chains.iter() {
            total += chain.capacity() * Self::ENTRY_SIZE;
            for entry in chain.iter() {
                total += entry.value().heap_bytes();
            }
        }
        total
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.chains.len()
    }

    fn log_layout(&self) {
        trace!(
            "separate chaining: count {}, cap {}, load {}, longest chain {}",
            self.count,
            self.chains.len(),
            self.load_factor(),
            self.longest_chain()
        );
        for (i, chain) in self.chains.iter().enumerate() {
            if !chain.is_empty() {
                trace!("{:>6} {:?}", i, chain);
            }
        }
    }
}
