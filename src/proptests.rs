use super::*;

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

use crate::hash::hash;

fn distinct_keys_are_found<T>(keys: &[Key], capacity: usize) -> Result<(), TestCaseError>
where
    T: Table<String>,
{
    let mut t: T = T::with_capacity(capacity).unwrap();
    for &key in keys {
        let inserted: bool = t.insert(key, format!("v{key}")).is_ok();
        prop_assert!(inserted, "insert of key {} failed", key);
    }
    prop_assert_eq!(t.len(), keys.len());
    for &key in keys {
        let expected: String = format!("v{key}");
        prop_assert_eq!(t.search(key), Some(&expected));
    }
    Ok(())
}

fn empty_table_finds_nothing<T>(capacity: usize, probes: &[Key]) -> Result<(), TestCaseError>
where
    T: Table<String>,
{
    let t: T = T::with_capacity(capacity).unwrap();
    for &key in probes {
        prop_assert_eq!(t.search(key), None);
    }
    Ok(())
}

fn first_duplicate_wins<T>(key: Key, capacity: usize) -> Result<(), TestCaseError>
where
    T: Table<String>,
{
    let mut t: T = T::with_capacity(capacity).unwrap();
    t.insert(key, "first".to_string()).unwrap();
    t.insert(key, "second".to_string()).unwrap();
    prop_assert_eq!(t.len(), 2);
    prop_assert_eq!(t.search(key).map(String::as_str), Some("first"));
    Ok(())
}

fn footprint_never_shrinks<T>(keys: &[Key], capacity: usize) -> Result<(), TestCaseError>
where
    T: Table<String>,
{
    let mut t: T = T::with_capacity(capacity).unwrap();
    let mut last: usize = t.memory_footprint();
    for (i, &key) in keys.iter().enumerate() {
        t.insert(key, format!("value{i}")).unwrap();
        let now: usize = t.memory_footprint();
        prop_assert!(now >= last, "footprint shrank from {} to {}", last, now);
        last = now;
    }
    Ok(())
}

/// Distinct keys together with a capacity large enough to hold them all.
fn keys_and_capacity() -> impl Strategy<Value = (Vec<Key>, usize)> {
    btree_set(any::<Key>(), 0..64).prop_flat_map(|set| {
        let keys: Vec<Key> = set.into_iter().collect();
        let min: usize = keys.len().max(1);
        (Just(keys), min..min + 64)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_hash_in_range(key in any::<Key>(), capacity in 1usize..10_000) {
        prop_assert!(hash(key, capacity) < capacity);
    }

    #[test]
    fn prop_hash_matches_euclidean_remainder(key in any::<i32>(), capacity in 1usize..10_000) {
        let expected: usize = (key as i64).rem_euclid(capacity as i64) as usize;
        prop_assert_eq!(hash(key as Key, capacity), expected);
    }

    #[test]
    fn prop_open_addressing_finds_distinct_keys((keys, capacity) in keys_and_capacity()) {
        distinct_keys_are_found::<OpenAddressingTable<String>>(&keys, capacity)?;
    }

    #[test]
    fn prop_separate_chaining_finds_distinct_keys((keys, capacity) in keys_and_capacity()) {
        distinct_keys_are_found::<SeparateChainingTable<String>>(&keys, capacity)?;
    }

    #[test]
    fn prop_empty_tables_find_nothing(capacity in 1usize..512, probes in vec(any::<Key>(), 0..32)) {
        empty_table_finds_nothing::<OpenAddressingTable<String>>(capacity, &probes)?;
        empty_table_finds_nothing::<SeparateChainingTable<String>>(capacity, &probes)?;
    }

    #[test]
    fn prop_first_duplicate_wins(key in any::<Key>(), capacity in 2usize..64) {
        first_duplicate_wins::<OpenAddressingTable<String>>(key, capacity)?;
        first_duplicate_wins::<SeparateChainingTable<String>>(key, capacity)?;
    }

    #[test]
    fn prop_footprint_monotonic(keys in vec(-1000isize..1000, 0..48), extra in 0usize..16) {
        let capacity: usize = keys.len().max(1) + extra;
        footprint_never_shrinks::<OpenAddressingTable<String>>(&keys, capacity)?;
        footprint_never_shrinks::<SeparateChainingTable<String>>(&keys, capacity)?;
    }

    #[test]
    fn prop_open_addressing_rejects_overflow(keys in vec(any::<Key>(), 1..32)) {
        let capacity: usize = keys.len();
        let mut t: OpenAddressingTable<String> =
            OpenAddressingTable::with_capacity(capacity).unwrap();
        for &key in keys.iter() {
            t.insert(key, String::new()).unwrap();
        }
        prop_assert_eq!(
            t.insert(keys[0], String::new()),
            Err(TableError::CapacityExhausted { capacity })
        );
        for &key in keys.iter() {
            prop_assert!(t.search(key).is_some());
        }
    }
}
