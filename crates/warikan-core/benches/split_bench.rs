//! Benchmarks for validation and the split computation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use warikan_core::{compute, validate};
use warikan_types::{Role, SplitConfig};

fn build_roles(count: usize) -> Vec<Role> {
    (0..count)
        .map(|index| {
            Role::new(
                index as u64 + 1,
                format!("role{}", index + 1),
                0.5 + (index % 10) as f64 * 0.25,
                (index % 4) as u32 + 1,
            )
        })
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let roles = build_roles(100);
    let config = SplitConfig::new(1_000_000.0, 100);

    c.bench_function("validate_100_roles", |b| {
        b.iter(|| validate(black_box(&roles), black_box(&config)))
    });
}

fn bench_compute(c: &mut Criterion) {
    let roles = build_roles(100);
    let config = SplitConfig::new(1_000_000.0, 100);
    let input = validate(&roles, &config).expect("valid input");

    c.bench_function("compute_100_roles", |b| b.iter(|| compute(black_box(&input))));
}

fn bench_end_to_end(c: &mut Criterion) {
    let roles = build_roles(10);
    let config = SplitConfig::new(48_000.0, 500);

    c.bench_function("validate_and_compute_10_roles", |b| {
        b.iter(|| {
            let input = validate(black_box(&roles), black_box(&config)).expect("valid input");
            compute(&input)
        })
    });
}

criterion_group!(benches, bench_validate, bench_compute, bench_end_to_end);
criterion_main!(benches);
