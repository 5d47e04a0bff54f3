use std::collections::HashMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kvtable::prelude::*;

fn bench_insert_get_table(c: &mut Criterion) {
    c.bench_function("kvtable_insert_get_1024_buckets", |b| {
        b.iter(|| {
            let mut m = KeyValueTable::<u64, u64>::new(1024);
            for i in 0..10_000 {
                m.insert(i, i);
            }
            for i in 0..10_000 {
                let _ = black_box(m.get(&i));
            }
            black_box(m.len())
        })
    });
}

fn bench_insert_get_skewed(c: &mut Criterion) {
    c.bench_function("kvtable_insert_get_8_buckets", |b| {
        b.iter(|| {
            let mut m = KeyValueTable::<u64, u64>::new(8);
            for i in 0..2_000 {
                m.insert(i, i);
            }
            for i in 0..2_000 {
                let _ = black_box(m.get(&i));
            }
            black_box(m.len())
        })
    });
}

fn bench_insert_get_hashmap(c: &mut Criterion) {
    c.bench_function("hashmap_insert_get", |b| {
        b.iter(|| {
            let mut m = HashMap::<u64, u64>::with_capacity(1024);
            for i in 0..10_000 {
                m.insert(i, i);
            }
            for i in 0..10_000 {
                let _ = black_box(m.get(&i));
            }
            black_box(m.len())
        })
    });
}

criterion_group!(
    benches,
    bench_insert_get_table,
    bench_insert_get_skewed,
    bench_insert_get_hashmap
);
criterion_main!(benches);
