//! Benchmarks for [`SkipListIndex`].

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::prelude::*;
use skipindex::SkipListIndex;

/// Benchmarking sizes
const SIZES: [usize; 5] = [1, 10, 100, 1000, 10_000];

/// Build an index holding the keys `0..size`, each mapped to itself.
fn sequential(size: usize) -> SkipListIndex<u64, u64> {
    let mut index = SkipListIndex::new(u64::MAX);
    index.extend((0..size as u64).map(|k| (k, k)));
    index
}

/// Benchmarking insertion
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipListIndex Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut index = SkipListIndex::new(u64::MAX);
            index.extend(std::iter::repeat_with(|| (rng.random_range(0..u64::MAX), 0)).take(size));

            b.iter(|| {
                black_box(index.insert(rng.random_range(0..u64::MAX), rng.random()));
            });
        });
    }
}

/// Benchmarking random access
pub fn rand_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipListIndex Random Access");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let index = sequential(size);
            let keys: Vec<u64> = std::iter::repeat_with(|| rng.random_range(0..size as u64))
                .take(10)
                .collect();

            b.iter(|| {
                for k in &keys {
                    black_box(index.get(k));
                }
            });
        });
    }
}

/// Benchmarking removal followed by re-insertion
pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipListIndex Remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut index = sequential(size);

            b.iter(|| {
                let k = rng.random_range(0..size as u64);
                if let Some(v) = black_box(index.remove(&k)) {
                    index.insert(k, v);
                }
            });
        });
    }
}
