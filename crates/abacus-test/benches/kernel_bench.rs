//! Benchmarks for the ABACUS arithmetic kernel

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abacus_kernel::{ArithmeticEngine, EngineConfig};

fn bench_parse(c: &mut Criterion) {
    let engine = ArithmeticEngine::new().unwrap();

    c.bench_function("parse_standard", |b| {
        b.iter(|| engine.number(10, black_box("-123456789.987654321")))
    });

    c.bench_function("parse_scientific", |b| {
        b.iter(|| engine.number(10, black_box("1.23456789e8")))
    });
}

fn bench_add(c: &mut Criterion) {
    let engine = ArithmeticEngine::new().unwrap();
    let a = engine.number(10, "99999999999999999999.5").unwrap();
    let b = engine.number(10, "12345678901234567890.25").unwrap();

    c.bench_function("add", |bench| {
        bench.iter(|| engine.add(black_box(&a), black_box(&b)))
    });
}

fn bench_subtract(c: &mut Criterion) {
    let engine = ArithmeticEngine::new().unwrap();
    let a = engine.number(10, "100000000000000000000").unwrap();
    let b = engine.number(10, "99999999999999999999").unwrap();

    c.bench_function("subtract_complement_method", |bench| {
        bench.iter(|| engine.subtract(black_box(&a), black_box(&b)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let engine = ArithmeticEngine::new().unwrap();
    let a = engine.number(16, "FEDCBA9876543210.FF").unwrap();
    let b = engine.number(16, "FEDCBA9876543210.FE").unwrap();

    c.bench_function("compare", |bench| {
        bench.iter(|| engine.compare(black_box(&a), black_box(&b)))
    });
}

fn bench_multiply(c: &mut Criterion) {
    let sequential = ArithmeticEngine::new().unwrap();
    let concurrent = ArithmeticEngine::with_config(EngineConfig {
        concurrent_multiplication: true,
    })
    .unwrap();
    let a = sequential.number(10, "987654321").unwrap();
    let b = sequential.number(10, "123456789").unwrap();

    c.bench_function("multiply_sequential", |bench| {
        bench.iter(|| sequential.multiply(black_box(&a), black_box(&b)))
    });

    c.bench_function("multiply_concurrent", |bench| {
        bench.iter(|| concurrent.multiply(black_box(&a), black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_add,
    bench_subtract,
    bench_compare,
    bench_multiply
);
criterion_main!(benches);
