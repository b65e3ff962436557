//! Benchmarks for the Standard Library's [`BTreeMap`].

use std::collections::BTreeMap;

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::prelude::*;

/// Benchmarking sizes
const SIZES: [usize; 5] = [1, 10, 100, 1000, 10_000];

/// Benchmarking insertion
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeMap Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut map: BTreeMap<u64, u64> = std::iter::repeat_with(|| (rng.random(), 0))
                .take(size)
                .collect();

            b.iter(|| {
                map.insert(rng.random(), rng.random());
            });
        });
    }
}

/// Benchmarking random access
pub fn rand_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeMap Random Access");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let map: BTreeMap<u64, u64> = (0..size as u64).map(|k| (k, k)).collect();
            let keys: Vec<u64> = std::iter::repeat_with(|| rng.random_range(0..size as u64))
                .take(10)
                .collect();

            b.iter(|| {
                for k in &keys {
                    black_box(map.get(k));
                }
            });
        });
    }
}

/// Benchmarking removal followed by re-insertion
pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeMap Remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut map: BTreeMap<u64, u64> = (0..size as u64).map(|k| (k, k)).collect();

            b.iter(|| {
                let k = rng.random_range(0..size as u64);
                if let Some(v) = black_box(map.remove(&k)) {
                    map.insert(k, v);
                }
            });
        });
    }
}
