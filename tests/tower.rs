//! End-to-end checks of the public API against a std reference model.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use skiptower::{InsertError, SkipList};

const MIN: i64 = -1_000_000;
const MAX: i64 = 1_000_000;

fn workload(seed: u64, n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(MIN + 1..MAX)).collect()
}

#[test]
fn agrees_with_btreeset_on_membership_and_predecessors() {
    let keys = workload(77, 2_000);
    let mut list = SkipList::new(MIN, MAX).unwrap();
    let mut model = BTreeSet::new();

    for &key in &keys {
        match list.insert(key) {
            Ok(node) => {
                assert!(model.insert(key), "list accepted a key the model holds");
                assert_eq!(*node.key(), key);
            }
            Err(InsertError::Duplicate(dup)) => {
                assert_eq!(dup, key);
                assert!(model.contains(&key));
            }
            Err(other) => panic!("unexpected rejection: {other}"),
        }
    }

    assert_eq!(list.len(), model.len());
    assert_eq!(list.first(), model.first());
    assert_eq!(list.last(), model.last());

    let stored: Vec<_> = list.iter().copied().collect();
    let expected: Vec<_> = model.iter().copied().collect();
    assert_eq!(stored, expected);

    // search returns the exact node or the immediate predecessor
    let queries = workload(78, 2_000);
    for q in queries {
        let found = list.search(&q);
        match model.range(..=q).next_back() {
            Some(&pred) => {
                assert!(!found.is_sentinel());
                assert_eq!(*found.key(), pred);
            }
            None => assert!(found.is_min_sentinel()),
        }
    }
}

#[test]
fn identical_runs_produce_identical_towers() {
    let keys = workload(5, 500);

    let run = |seed| {
        let mut list = SkipList::with_seed(MIN, MAX, seed).unwrap();
        for &key in &keys {
            let _ = list.insert(key);
        }
        let shape: Vec<Vec<i64>> = (0..list.height())
            .map(|n| list.level(n).unwrap().keys().copied().collect())
            .collect();
        shape
    };

    assert_eq!(run(900), run(900));
    // a different seed is allowed to differ, the bottom level never does
    let a = run(900);
    let b = run(901);
    assert_eq!(a[0], b[0]);
}

#[test]
fn every_level_is_a_subset_of_the_level_below() {
    let keys = workload(13, 1_000);
    let mut list = SkipList::new(MIN, MAX).unwrap();
    for key in keys {
        let _ = list.insert(key);
    }

    for n in 1..list.height() {
        let below: BTreeSet<_> = list.level(n - 1).unwrap().keys().copied().collect();
        for key in list.level(n).unwrap().keys() {
            assert!(below.contains(key), "level {n} holds {key} but level {} does not", n - 1);
        }
    }
}

#[test]
fn diagnostic_dump_lists_every_level() {
    let mut list = SkipList::with_seed(0i32, 1_000, 4).unwrap();
    for key in [5, 900, 42] {
        list.insert(key).unwrap();
    }

    let dump = list.to_string();
    assert_eq!(dump.lines().count(), list.height());
    // the bottom line carries every key between the sentinels
    assert_eq!(dump.lines().last().unwrap(), "0 5 42 900 1000");
}
