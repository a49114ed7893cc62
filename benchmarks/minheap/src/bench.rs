//! Heap benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Insert/extract throughput at several heap sizes
//! - Heapsort on random, sorted, and reversed input
//! - Pathological input (all elements equal)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use minheap::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniformly random integers.
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");
    group.sample_size(50);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let values = generate_random(size, 42);

        group.bench_with_input(BenchmarkId::new("fill_drain", size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = Heap::new().capacity(size).build().unwrap();
                heap.extend_from_slice(black_box(&values)).unwrap();
                heap.drain_sorted().fold(0i64, |acc, v| acc.wrapping_add(v))
            })
        });
    }
    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");
    let size = DEFAULT_CAPACITY;
    group.throughput(Throughput::Elements(size as u64));

    let random = generate_random(size, 7);
    let sorted: Vec<i64> = (0..size as i64).collect();
    let reversed: Vec<i64> = sorted.iter().rev().copied().collect();
    let constant = vec![5i64; size];

    for (name, data) in [
        ("random", &random),
        ("sorted", &sorted),
        ("reversed", &reversed),
        ("constant", &constant),
    ] {
        group.bench_function(name, |b| b.iter(|| heapsort(black_box(data)).unwrap()));
    }
    group.finish();
}

criterion_group!(benches, bench_insert_extract, bench_heapsort);

criterion_main!(benches);
