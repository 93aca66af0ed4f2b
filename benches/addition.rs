use criterion::{criterion_group, criterion_main, Criterion};
use exact_decimal::{Addition, Decimal};
use std::hint::black_box;
use std::str::FromStr;

fn addition_benchmark(c: &mut Criterion) {
    let add = Addition::new();

    let small_lhs = Decimal::from_str("12345.678").unwrap();
    let small_rhs = Decimal::from_str("98765.432").unwrap();
    c.bench_function("add_native_fast_path", |b| {
        b.iter(|| add.compute(black_box(&small_lhs), black_box(&small_rhs)))
    });

    let large_lhs = Decimal::from_str(&"9".repeat(1_000)).unwrap();
    let large_rhs = Decimal::from_str(&"1".repeat(1_000)).unwrap();
    c.bench_function("add_digitwise_1000_digits", |b| {
        b.iter(|| add.compute(black_box(&large_lhs), black_box(&large_rhs)))
    });

    let fractional_lhs = Decimal::from_str(&format!("0.{}", "3".repeat(500))).unwrap();
    let fractional_rhs = Decimal::from_str(&format!("{}.5", "7".repeat(500))).unwrap();
    c.bench_function("add_mixed_precision", |b| {
        b.iter(|| add.compute(black_box(&fractional_lhs), black_box(&fractional_rhs)))
    });
}

criterion_group!(benches, addition_benchmark);
criterion_main!(benches);
