//! Benchmarks comparing the index against the standard library's ordered map.

use criterion::{criterion_group, criterion_main};

mod btreemap;
mod skiplist_index;

criterion_group!(
    benches,
    crate::btreemap::insert,
    crate::btreemap::rand_access,
    crate::btreemap::remove,
    crate::skiplist_index::insert,
    crate::skiplist_index::rand_access,
    crate::skiplist_index::remove,
);
criterion_main!(benches);
