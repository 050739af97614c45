extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

mod generators;
use crate::generators::{build_map, choose_some, gen_random_usizes, get_random_strings};

pub fn bench_remove(c: &mut Criterion) {
    let base_keys = gen_random_usizes(500_000, 0);
    let base_priorities = gen_random_usizes(500_000, 7);

    let mut group = c.benchmark_group("remove_usize");
    for &size in &[10_000, 500_000] {
        let test_keys = choose_some(&base_keys[..size], 500, 500);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_map = build_map(&base_keys[..size], &base_priorities[..size]);
            b.iter_batched(
                || base_map.clone(),
                |mut map| {
                    for k in test_keys.iter() {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("remove_string");
    let base_keys = get_random_strings(50_000, 0);
    let base_priorities = get_random_strings(50_000, 7);

    for &size in &[1_000, 50_000] {
        let test_keys = choose_some(&base_keys[..size], 500, 500);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_map = build_map(&base_keys[..size], &base_priorities[..size]);
            b.iter_batched(
                || base_map.clone(),
                |mut map| {
                    for k in test_keys.iter() {
                        map.remove(k.as_str());
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_remove);
criterion_main!(benches);
