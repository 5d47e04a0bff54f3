use std::collections::HashMap;

use kvtable::prelude::*;
use proptest::prelude::*;

fn modulo(key: &u32, buckets: usize) -> usize {
    *key as usize % buckets
}

#[test]
fn test_string_keys_example() {
    let mut table = KeyValueTable::new(8);

    table.insert("foo", 0);
    table.insert("bar", 1);
    table.insert("baz", 2);

    assert_eq!(table.get_or_default(&"foo"), (0, true));
    assert_eq!(table.get_or_default(&"bar"), (1, true));
    assert_eq!(table.get_or_default(&"baz"), (2, true));
    assert_eq!(table.get_or_default(&"nope!"), (0, false));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_integer_keys_example() {
    let mut table = KeyValueTable::with_hasher(8, modulo);

    table.insert(0, String::from("foo"));

    assert_eq!(table.get_or_default(&0), (String::from("foo"), true));
    assert_eq!(table.get_or_default(&3), (String::new(), false));
}

#[test]
fn test_present_but_default_is_distinguishable() {
    let mut table = KeyValueTable::with_hasher(8, modulo);
    table.insert(1, 0);

    assert_eq!(table.get(&1), Some(&0));
    assert_eq!(table.get(&2), None);
}

#[test]
fn test_collisions_resolved_by_equality() {
    let mut table = KeyValueTable::with_hasher(8, byte_sum::<&str>);

    // Anagrams sum to the same bucket.
    for (i, key) in ["stop", "pots", "tops", "spot", "opts"].into_iter().enumerate() {
        assert!(table.insert(key, i).is_none());
    }

    let bucket = table.bucket_of(&"stop");
    assert_eq!(table.bucket_len(bucket), Some(5));
    assert_eq!(table.get(&"spot"), Some(&3));
    assert_eq!(table.get(&"post"), None);

    let untouched = (0..table.bucket_count())
        .filter(|i| *i != bucket)
        .all(|i| table.bucket_len(i) == Some(0));
    assert!(untouched);
}

#[test]
fn test_overwrite_does_not_grow_chain() {
    let mut table = KeyValueTable::with_hasher(2, modulo);
    table.insert(4, 'a');
    table.insert(6, 'b');

    let bucket = table.bucket_of(&4);
    assert_eq!(table.bucket_len(bucket), Some(2));

    assert_eq!(table.insert(4, 'z'), Some('a'));
    assert_eq!(table.bucket_len(bucket), Some(2));
    assert_eq!(table[&4], 'z');
    assert_eq!(table.len(), 2);
}

#[test]
fn test_bucket_count_is_fixed() {
    let mut table = KeyValueTable::new(3);
    for i in 0..10_000u64 {
        table.insert(i, i);
    }

    assert_eq!(table.bucket_count(), 3);
    assert_eq!(table.buckets().map(<[_]>::len).sum::<usize>(), 10_000);
}

#[test]
fn test_with_config() {
    let config = TableConfig::new(5).unwrap();
    let table: KeyValueTable<u32, (), _> = KeyValueTable::with_config(&config, modulo).unwrap();
    assert_eq!(table.bucket_count(), 5);
}

#[test]
fn test_borrowed_hash_state() {
    let salt = 7usize;
    let hash = |key: &u32, buckets: usize| (*key as usize + salt) % buckets;

    let mut table = KeyValueTable::with_hasher(4, hash);
    table.insert(1, "one");

    assert_eq!(table.bucket_of(&1), 0);
    assert_eq!(table.get(&1), Some(&"one"));
}

proptest! {
    #[test]
    fn prop_matches_std_hashmap(
        buckets in 1usize..32,
        ops in prop::collection::vec((0u32..64, any::<i32>()), 0..200),
        lookups in prop::collection::vec(0u32..96, 0..50),
    ) {
        let mut table = KeyValueTable::with_hasher(buckets, modulo);
        let mut model = HashMap::new();

        for (k, v) in ops {
            prop_assert_eq!(table.insert(k, v), model.insert(k, v));
        }

        prop_assert_eq!(table.len(), model.len());

        for k in lookups {
            prop_assert_eq!(table.get(&k), model.get(&k));
            let expected = model.get(&k).map_or((0, false), |v| (*v, true));
            prop_assert_eq!(table.get_or_default(&k), expected);
        }
    }

    #[test]
    fn prop_every_key_lives_in_its_bucket(
        buckets in 1usize..16,
        keys in prop::collection::vec(any::<u64>(), 0..100),
    ) {
        let mut table = KeyValueTable::new(buckets);
        for k in &keys {
            table.insert(*k, ());
        }

        for (index, chain) in table.buckets().enumerate() {
            for (k, _) in chain {
                prop_assert_eq!(table.bucket_of(k), index);
                prop_assert_eq!(chain.iter().filter(|(other, _)| other == k).count(), 1);
            }
        }
    }
}
