//! Lookup benchmarks: CFS descent against binary search on sorted data

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cfsearch::{cfs_lower_bound, to_cfs};

const RANGE_LOW: u64 = 10_000;
const RANGE_HIGH: u64 = RANGE_LOW * 10_000;

/// Evenly spaced values across [RANGE_LOW, RANGE_HIGH)
fn linear_vector(n: usize) -> Vec<u64> {
    let step = ((RANGE_HIGH - RANGE_LOW) / n as u64).max(1);
    (0..n as u64).map(|i| RANGE_LOW + i * step).collect()
}

/// Deterministic keys scattered over the whole value range
fn probe_keys(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| RANGE_LOW + i.wrapping_mul(2_654_435_761) % (RANGE_HIGH - RANGE_LOW))
        .collect()
}

fn benchmark_lower_bound(c: &mut Criterion) {
    let keys = probe_keys(1024);
    let mut group = c.benchmark_group("lower_bound");

    for size in [1_000usize, 100_000, 1_000_000] {
        let sorted = linear_vector(size);
        let cfs = to_cfs(&sorted);

        group.bench_with_input(BenchmarkId::new("cfs", size), &cfs, |b, cfs| {
            b.iter(|| {
                for key in &keys {
                    black_box(cfs_lower_bound(cfs, black_box(key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, sorted| {
            b.iter(|| {
                for key in &keys {
                    black_box(sorted.partition_point(|value| value < black_box(key)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_layout(c: &mut Criterion) {
    let sorted = linear_vector(100_000);
    c.bench_function("to_cfs_100000", |b| {
        b.iter(|| black_box(to_cfs(black_box(&sorted))));
    });
}

criterion_group!(benches, benchmark_lower_bound, benchmark_layout);
criterion_main!(benches);
