//! Benchmarks for the hot per-request math: great-circle distance and
//! fare pricing.

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farelink::application::services::compute_fare;
use farelink::domain::entities::{ProviderConfig, ProviderTable};
use farelink::domain::value_objects::Coordinate;

fn bench_haversine(c: &mut Criterion) {
    let pickup = Coordinate::new(10.7769, 106.7009).unwrap();
    let destination = Coordinate::new(10.8231, 106.6297).unwrap();

    c.bench_function("haversine_km", |b| {
        b.iter(|| black_box(&pickup).haversine_km(black_box(&destination)))
    });
}

fn bench_pricing(c: &mut Criterion) {
    let config = ProviderConfig::new("grab", 12000, 4500, 1000, "grab://open").unwrap();

    c.bench_function("compute_fare", |b| {
        b.iter(|| {
            compute_fare(
                black_box(&config),
                black_box(9.32),
                black_box(18.6),
                black_box(1.6),
            )
        })
    });
}

fn bench_price_table(c: &mut Criterion) {
    let table = ProviderTable::builtin();

    c.bench_function("price_builtin_table", |b| {
        b.iter(|| {
            table
                .iter()
                .map(|p| compute_fare(p, black_box(9.32), black_box(18.6), black_box(1.3)))
                .sum::<i64>()
        })
    });
}

criterion_group!(benches, bench_haversine, bench_pricing, bench_price_table);
criterion_main!(benches);
