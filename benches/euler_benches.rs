use criterion::{Criterion, criterion_group, criterion_main};
use euler_error::numerical::Euler_error::{estimate, estimate_with_sequences};
use std::hint::black_box;

fn bench_estimate(c: &mut Criterion) {
    c.bench_function("estimate n=200000", |b| b.iter(|| estimate(black_box(200000))));
}

fn bench_estimate_with_sequences(c: &mut Criterion) {
    c.bench_function("estimate_with_sequences n=200000", |b| {
        b.iter(|| estimate_with_sequences(black_box(200000)))
    });
}

criterion_group!(benches, bench_estimate, bench_estimate_with_sequences);
criterion_main!(benches);
