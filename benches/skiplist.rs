//! Benchmarks against the std ordered-set baseline.
//!
//! Run with: cargo bench

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use skiptower::SkipList;

const KEYS: usize = 10_000;

fn keyset() -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(12345);
    (0..KEYS).map(|_| rng.random_range(1..u64::MAX - 1)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = keyset();
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(KEYS as u64));

    group.bench_function("skiptower", |b| {
        b.iter(|| {
            let mut list = SkipList::new(0u64, u64::MAX).unwrap();
            for &key in &keys {
                let _ = black_box(list.insert(key));
            }
        });
    });

    group.bench_function("btreeset", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                black_box(set.insert(key));
            }
        });
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let keys = keyset();
    let mut list = SkipList::new(0u64, u64::MAX).unwrap();
    let mut set = BTreeSet::new();
    for &key in &keys {
        let _ = list.insert(key);
        set.insert(key);
    }

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(KEYS as u64));

    group.bench_function("skiptower", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(list.contains(key));
            }
        });
    });

    group.bench_function("btreeset", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
