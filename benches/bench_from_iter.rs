extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heapmap::HeapMap;

mod generators;
use crate::generators::{build_map, gen_random_usizes, get_random_strings};

pub fn bench_from_iter(c: &mut Criterion) {
    let base_keys = gen_random_usizes(100_000, 0);
    let base_priorities = gen_random_usizes(100_000, 7);

    let mut group = c.benchmark_group("from_iter_usize");
    for &size in &[20_000, 60_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(build_map(&base_keys[..size], &base_priorities[..size])));
        });
    }
    group.finish();

    // Same data inserted one by one for comparison with bottom-up construction
    let mut group = c.benchmark_group("set_each_usize");
    for &size in &[20_000, 60_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HeapMap::with_capacity(size);
                for (i, (&k, &p)) in base_keys[..size]
                    .iter()
                    .zip(base_priorities[..size].iter())
                    .enumerate()
                {
                    map.set(k, i, p);
                }
                black_box(map)
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("from_iter_string");
    let base_keys = get_random_strings(50_000, 0);
    let base_priorities = get_random_strings(50_000, 7);

    for &size in &[10_000, 30_000, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(build_map(&base_keys[..size], &base_priorities[..size])));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_from_iter);
criterion_main!(benches);
