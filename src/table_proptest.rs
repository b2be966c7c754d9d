#![cfg(test)]

// Property tests driving both strategies through the façade against a
// std HashMap model. Keys come from a tiny alphabet so anagram collisions,
// full probing tables and wraparound are common.

use crate::table::{self, Table};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Delete(usize),
    Search(usize),
    Mutate(usize, i32),
    Resize,
    Iterate,
}

// Resizes stop once capacity reaches this bound.
const MAX_CAPACITY: usize = 64;

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (1usize..=6, proptest::collection::vec("[a-d]{0,4}", 1..=10)).prop_flat_map(|(cap, pool)| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => idx.clone().prop_map(Op::Delete),
            2 => idx.clone().prop_map(Op::Search),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => Just(Op::Resize),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

fn fail(e: impl ToString) -> TestCaseError {
    TestCaseError::fail(e.to_string())
}

// Invariants checked after every op:
// - Search parity with the model for every live key (no key stranded by a
//   delete or a rehash).
// - `len` parity.
// - `TableFull` only from probing, only for a new key, only when every
//   slot is taken; after `resize` the same pair is accepted.
fn run_against_model(
    strategy: table::Strategy,
    capacity: usize,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut sut: Table<i32> = Table::new(strategy, capacity).map_err(fail)?;
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = &pool[i];
                match sut.insert(k.as_str(), v) {
                    Ok(prev) => {
                        prop_assert_eq!(prev, model.insert(k.clone(), v));
                    }
                    Err(full) => {
                        prop_assert_eq!(strategy, table::Strategy::Probing);
                        prop_assert!(!model.contains_key(k));
                        prop_assert_eq!(model.len(), sut.capacity());
                        let (key, value) = full.into_inner();
                        sut.resize().map_err(fail)?;
                        prop_assert_eq!(sut.insert(key.clone(), value).ok(), Some(None));
                        model.insert(key, value);
                    }
                }
            }
            Op::Delete(i) => {
                prop_assert_eq!(sut.delete(&pool[i]), model.remove(&pool[i]));
            }
            Op::Search(i) => {
                prop_assert_eq!(sut.search(&pool[i]), model.get(&pool[i]));
            }
            Op::Mutate(i, d) => {
                if let Some(v) = sut.search_mut(&pool[i]) {
                    *v = v.wrapping_add(d);
                }
                if let Some(v) = model.get_mut(&pool[i]) {
                    *v = v.wrapping_add(d);
                }
            }
            Op::Resize => {
                let before = sut.capacity();
                if before < MAX_CAPACITY {
                    sut.resize().map_err(fail)?;
                    prop_assert_eq!(sut.capacity(), before * 2);
                }
            }
            Op::Iterate => {
                let seen: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let expected: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(sut.search(k), Some(v), "key {:?} unreachable", k);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn prop_chaining_matches_model((cap, pool, ops) in arb_scenario()) {
        run_against_model(table::Strategy::Chaining, cap, &pool, ops)?;
    }

    #[test]
    fn prop_probing_matches_model((cap, pool, ops) in arb_scenario()) {
        run_against_model(table::Strategy::Probing, cap, &pool, ops)?;
    }
}
