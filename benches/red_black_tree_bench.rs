//! Benchmark for RedBlackTree vs standard BTreeSet.
//!
//! Compares the arena-backed RedBlackTree against Rust's standard BTreeSet
//! for insertion, deletion, lookup and in-order traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use redblack::{DuplicatePolicy, RedBlackTree};
use std::collections::BTreeSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Spreads `0..size` over the key space so insertion order is not sorted.
fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| index * 7919 % size).collect()
}

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in SIZES {
        let keys = scrambled(size);

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::with_capacity(keys.len());
                    for &key in keys {
                        tree.add(black_box(key));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut set = BTreeSet::new();
                    for &key in keys {
                        set.insert(black_box(key));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_add_ascending(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add_ascending");

    for size in SIZES {
        group.bench_with_input(
            BenchmarkId::new("Reject", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for key in 0..size {
                        tree.add(black_box(key));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Allow", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::with_policy(DuplicatePolicy::Allow);
                    for key in 0..size {
                        tree.add(black_box(key / 2));
                    }
                    black_box(tree)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in SIZES {
        let keys = scrambled(size);
        let tree = RedBlackTree::from_values(keys.iter().copied());
        let set: BTreeSet<i32> = keys.iter().copied().collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &keys,
            |bencher, keys| {
                bencher.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        for key in keys {
                            black_box(tree.delete(black_box(key)));
                        }
                        tree
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &keys,
            |bencher, keys| {
                bencher.iter_batched(
                    || set.clone(),
                    |mut set| {
                        for key in keys {
                            black_box(set.remove(black_box(key)));
                        }
                        set
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in SIZES {
        let tree: RedBlackTree<i32> = (0..size).collect();
        let set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut hits = 0;
                    for key in (0..size * 2).step_by(2) {
                        hits += usize::from(tree.contains(black_box(&key)));
                    }
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut hits = 0;
                    for key in (0..size * 2).step_by(2) {
                        hits += usize::from(set.contains(black_box(&key)));
                    }
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in SIZES {
        let tree: RedBlackTree<i32> = (0..size).collect();
        let set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| {
                    let sum: i64 = tree.iter().map(|&value| i64::from(value)).sum();
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree_sort", size),
            &tree,
            |bencher, tree| {
                bencher.iter(|| black_box(tree.sort()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &set,
            |bencher, set| {
                bencher.iter(|| {
                    let sum: i64 = set.iter().map(|&value| i64::from(value)).sum();
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_add,
    benchmark_add_ascending,
    benchmark_delete,
    benchmark_contains,
    benchmark_iteration
);

criterion_main!(benches);
