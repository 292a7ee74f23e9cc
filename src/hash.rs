use crate::table::Key;

/// Maps a key onto a slot index in `[0, capacity)`.
///
/// This is the identity hash reduced modulo the capacity. Sequential or otherwise structured
/// keys will cluster; that clustering is part of what the tables are benchmarked against.
///
/// Negative keys are folded into the non-negative range, so `hash(-1, 4) == 3`. The magnitude
/// is taken with `unsigned_abs` which keeps `isize::MIN` from overflowing.
///
/// # Panics
///
/// Panics if `capacity` is zero.
#[inline]
pub fn hash(key: Key, capacity: usize) -> usize {
    assert!(capacity != 0, "hash capacity must be non-zero");
    if key >= 0 {
        key as usize % capacity
    } else {
        let r: usize = key.unsigned_abs() % capacity;
        if r == 0 {
            0
        } else {
            capacity - r
        }
    }
}
