//! Explicit memory accounting for table payloads.
//!
//! Rust has no runtime reflection over object sizes, so each table sums a formula instead:
//! the inline size of its backing storage (via `size_of`) plus the heap bytes owned by every
//! stored value. The numbers are an approximation of what the allocator hands out; allocator
//! headers and alignment padding between allocations are not counted.

/// Heap memory owned by a value, beyond its inline `size_of`.
pub trait Footprint {
    fn heap_bytes(&self) -> usize;
}

impl Footprint for String {
    #[inline]
    fn heap_bytes(&self) -> usize {
        self.capacity()
    }
}

impl Footprint for Box<str> {
    #[inline]
    fn heap_bytes(&self) -> usize {
        self.len()
    }
}

impl Footprint for Vec<u8> {
    #[inline]
    fn heap_bytes(&self) -> usize {
        self.capacity()
    }
}

impl Footprint for &str {
    #[inline]
    fn heap_bytes(&self) -> usize {
        0
    }
}

macro_rules! inline_footprint {
    ($($t:ty),*) => {
        $(
            impl Footprint for $t {
                #[inline]
                fn heap_bytes(&self) -> usize {
                    0
                }
            }
        )*
    };
}

inline_footprint!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
