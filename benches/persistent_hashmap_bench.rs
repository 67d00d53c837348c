//! Benchmarks comparing `PersistentHashMap` against `std::collections::HashMap`.
//!
//! The persistent map pays for path copying on every update; these
//! benchmarks show the constant factor against the mutable baseline for
//! insert-heavy, lookup-heavy, and snapshot-heavy workloads.

use criterion::{Criterion, criterion_group, criterion_main};
use evergreen::persistent::PersistentHashMap;
use std::collections::HashMap;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in SIZES {
        group.bench_function(format!("persistent/{size}"), |bencher| {
            bencher.iter(|| {
                let mut map = PersistentHashMap::new();
                for index in 0..size {
                    map = map.insert(black_box(index), index);
                }
                map
            });
        });

        group.bench_function(format!("std/{size}"), |bencher| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for index in 0..size {
                    map.insert(black_box(index), index);
                }
                map
            });
        });
    }

    group.finish();
}

fn bench_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        let persistent: PersistentHashMap<usize, usize> =
            (0..size).map(|index| (index, index)).collect();
        let std_map: HashMap<usize, usize> = (0..size).map(|index| (index, index)).collect();

        group.bench_function(format!("persistent/{size}"), |bencher| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(persistent.get(black_box(&index)));
                }
            });
        });

        group.bench_function(format!("std/{size}"), |bencher| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(std_map.get(black_box(&index)));
                }
            });
        });
    }

    group.finish();
}

fn bench_snapshot_then_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("snapshot_then_update");

    for size in SIZES {
        let persistent: PersistentHashMap<usize, usize> =
            (0..size).map(|index| (index, index)).collect();
        let std_map: HashMap<usize, usize> = (0..size).map(|index| (index, index)).collect();

        // Persistent snapshot is a refcount bump; one insert copies a path.
        group.bench_function(format!("persistent/{size}"), |bencher| {
            bencher.iter(|| {
                let snapshot = persistent.clone();
                black_box(snapshot.insert(size, 0))
            });
        });

        // The mutable baseline clones every bucket to keep the original.
        group.bench_function(format!("std/{size}"), |bencher| {
            bencher.iter(|| {
                let mut snapshot = std_map.clone();
                snapshot.insert(size, 0);
                black_box(snapshot)
            });
        });
    }

    group.finish();
}

fn bench_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let persistent: PersistentHashMap<usize, usize> =
            (0..size).map(|index| (index, index)).collect();

        group.bench_function(format!("persistent/{size}"), |bencher| {
            bencher.iter(|| {
                let mut map = persistent.clone();
                for index in 0..size {
                    map = map.remove(black_box(&index));
                }
                map
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_snapshot_then_update,
    bench_remove
);
criterion_main!(benches);
