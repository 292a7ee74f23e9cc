use std::fmt::Debug;
use std::mem::size_of;

use log::trace;

use crate::error::TableError;
use crate::footprint::Footprint;
use crate::hash::hash;
use crate::table::{Entry, Key, Table};

#[derive(Debug, Clone)]
enum Slot<T>
where
    T: Debug,
{
    Empty,
    Occupied(Entry<T>),
}

impl<T> Default for Slot<T>
where
    T: Debug,
{
    fn default() -> Self {
        Slot::Empty
    }
}

/// A fixed-capacity table that resolves collisions with linear probing.
///
/// Every key starts at its home slot `hash(key, capacity)` and walks forward one slot at a time,
/// wrapping at the end of the array, until it finds an empty slot. Slots only ever go from
/// empty to occupied; there is no deletion and no resizing.
#[derive(Debug, Clone)]
pub struct OpenAddressingTable<T>
where
    T: Debug + Footprint,
{
    count: usize,
    slots: Vec<Slot<T>>,
}

impl<T> OpenAddressingTable<T>
where
    T: Debug + Footprint,
{
    pub const SLOT_SIZE: usize = size_of::<Slot<T>>();

    /// The slot index following `i`, wrapping to zero at the end of the array.
    #[inline]
    fn next(&self, i: usize) -> usize {
        let n: usize = i + 1;
        if n == self.slots.len() {
            0
        } else {
            n
        }
    }

    /// Returns the entry stored at `index`, or `None` if the slot is empty or out of range.
    pub fn slot(&self, index: usize) -> Option<&Entry<T>> {
        match self.slots.get(index) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    /// The largest distance, in slots, between any stored entry and its home slot.
    pub fn longest_probe(&self) -> usize {
        let capacity: usize = self.slots.len();
        let mut longest: usize = 0;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied(entry) = slot {
                let home: usize = hash(entry.key(), capacity);
                let distance: usize = if i >= home { i - home } else { capacity - home + i };
                longest = longest.max(distance);
            }
        }
        longest
    }
}

impl<T> Table<T> for OpenAddressingTable<T>
where
    T: Debug + Footprint,
{
    const LABEL: &'static str = "Open Addressing";

    fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut slots: Vec<Slot<T>> = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);
        Ok(OpenAddressingTable { count: 0, slots })
    }

    /// Stores the pair in the first empty slot at or after the key's home slot.
    ///
    /// Fails with [`TableError::CapacityExhausted`] when every slot is occupied.
    fn insert(&mut self, key: Key, value: T) -> Result<(), TableError> {
        let capacity: usize = self.slots.len();
        if self.count == capacity {
            return Err(TableError::CapacityExhausted { capacity });
        }
        let mut i: usize = hash(key, capacity);
        let mut probes: usize = 0;
        while probes < capacity {
            if let Slot::Empty = self.slots[i] {
                self.slots[i] = Slot::Occupied(Entry::new(key, value));
                self.count += 1;
                return Ok(());
            }
            i = self.next(i);
            probes += 1;
        }
        Err(TableError::CapacityExhausted { capacity })
    }

    /// Walks the probe sequence from the key's home slot and returns the first match.
    ///
    /// The walk ends at the first empty slot, or after visiting every slot once.
    fn search(&self, key: Key) -> Option<&T> {
        let capacity: usize = self.slots.len();
        let mut i: usize = hash(key, capacity);
        let mut probes: usize = 0;
        while probes < capacity {
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.key() == key => return Some(entry.value()),
                Slot::Occupied(_) => {}
            }
            i = self.next(i);
            probes += 1;
        }
        None
    }

    /// `size_of::<Vec<Slot<T>>>() + capacity * SLOT_SIZE + Σ heap bytes of stored values`
    ///
    /// Entries live inline in their slot, so an occupied slot adds only its value's heap bytes
    /// and never a `size_of::<Entry<T>>()`; chained tables pay that per entry on top of the
    /// per-slot cost.
    fn memory_footprint(&self) -> usize {
        let mut total: usize = size_of::<Vec<Slot<T>>>() + self.slots.len() * Self::SLOT_SIZE;
        for slot in self.slots.iter() {
            if let Slot::Occupied(entry) = slot {
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
        self.slots.len()
    }

    fn log_layout(&self) {
        trace!(
            "open addressing: count {}, cap {}, load {}, longest probe {}",
            self.count,
            self.slots.len(),
            self.load_factor(),
            self.longest_probe()
        );
        for (i, slot) in self.slots.iter().enumerate() {
            trace!("{:>6} {:?}", i, slot);
        }
    }
}
