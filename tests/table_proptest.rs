use proptest::prelude::*;
use std::collections::HashMap;
use strategy_table::{bucket_index, ChainingTable, ProbingTable, Strategy as Collision, Table};

// Populate with N distinct keys, resize one or more times, and check every
// key still maps to its original value under the new capacity.
proptest! {
    #[test]
    fn prop_resize_preserves_content(
        keys in proptest::collection::hash_set("[a-z]{0,6}", 0..40),
        start in 1usize..8,
        resizes in 1usize..4,
    ) {
        for strategy in [Collision::Chaining, Collision::Probing] {
            // probing needs room for every key up front
            let capacity = match strategy {
                Collision::Chaining => start,
                Collision::Probing => start.max(keys.len()),
            };
            let mut t = Table::new(strategy, capacity).unwrap();
            let mut model = HashMap::new();
            for (i, k) in keys.iter().enumerate() {
                prop_assert!(t.insert(k.as_str(), i).is_ok());
                model.insert(k.clone(), i);
            }
            for _ in 0..resizes {
                t.resize().unwrap();
            }
            prop_assert_eq!(t.capacity(), capacity << resizes);
            prop_assert_eq!(t.len(), model.len());
            for (k, v) in &model {
                prop_assert_eq!(t.search(k), Some(v));
            }
        }
    }

    // After a chaining resize, every chain holds exactly the keys whose
    // new-capacity index is that bucket.
    #[test]
    fn prop_chaining_resize_is_full_rehash(
        keys in proptest::collection::hash_set("[a-z]{1,5}", 0..30),
        start in 1usize..6,
    ) {
        let mut t = ChainingTable::new(start).unwrap();
        for k in &keys {
            t.insert(k.as_str(), ());
        }
        t.resize().unwrap();
        let cap = std::num::NonZeroUsize::new(start * 2).unwrap();
        let mut expected = vec![0usize; start * 2];
        for k in &keys {
            expected[bucket_index(k, cap)] += 1;
        }
        prop_assert_eq!(t.chain_lengths(), expected);
    }

    // Deleting keys in arbitrary order from a crowded probing table never
    // strands the keys that remain.
    #[test]
    fn prop_probing_delete_keeps_survivors_reachable(
        keys in proptest::collection::vec("[ab]{1,4}", 1..12),
        deletions in proptest::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let mut t = ProbingTable::new(keys.len()).unwrap();
        let mut model: HashMap<String, usize> = HashMap::new();
        for (i, k) in keys.iter().enumerate() {
            prop_assert!(t.insert(k.as_str(), i).is_ok());
            model.insert(k.clone(), i);
        }
        for d in deletions {
            let k = &keys[d.index(keys.len())];
            prop_assert_eq!(t.delete(k), model.remove(k));
            for (k, v) in &model {
                prop_assert_eq!(t.search(k), Some(v));
                prop_assert!(t.probe_distance(k).is_some());
            }
        }
        prop_assert_eq!(t.len(), model.len());
    }
}
