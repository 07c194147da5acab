//! Criterion micro-benchmarks for the loam container operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_array::{DynamicArray, FixedArray};
use loam_list::SentinelCircularList;

/// Amortized push: N appends into a fresh array, capacity doubling from 1.
fn bench_dynamic_push(c: &mut Criterion) {
    c.bench_function("dynamic_push_1024", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for v in 0u64..1024 {
                arr.push(black_box(v));
            }
            black_box(arr.len())
        })
    });
}

/// Worst-case insert: every insertion shifts the whole live region.
fn bench_dynamic_insert_front(c: &mut Criterion) {
    c.bench_function("dynamic_insert_front_256", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for v in 0u64..256 {
                arr.insert(0, black_box(v)).unwrap();
            }
            black_box(arr.len())
        })
    });
}

fn bench_fixed_clear(c: &mut Criterion) {
    let mut arr = FixedArray::new(4096, 0.0f64).unwrap();
    c.bench_function("fixed_clear_4096", |b| {
        b.iter(|| {
            arr.clear(black_box(1.0));
            black_box(arr.len())
        })
    });
}

/// Full-cycle membership miss: walks every node back to the sentinel.
fn bench_circular_contains_miss(c: &mut Criterion) {
    let mut list = SentinelCircularList::new();
    for v in 0u64..256 {
        list.add(v);
    }
    c.bench_function("circular_contains_miss_256", |b| {
        b.iter(|| black_box(list.contains(black_box(&1024))))
    });
}

criterion_group!(
    benches,
    bench_dynamic_push,
    bench_dynamic_insert_front,
    bench_fixed_clear,
    bench_circular_contains_miss,
);
criterion_main!(benches);
