//! Criterion micro-benchmarks for trajectory evolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_bench::{reference_row, reference_table};
use weft_engine::evolve;
use weft_rules::RuleSpace;

/// Benchmark: 256 steps over a 512-cell ring, elementary rule 110.
fn bench_evolve_elementary(c: &mut Criterion) {
    let table = RuleSpace::elementary()
        .table_at(&110u64.into())
        .expect("110 < 256");
    let mut row = vec![0u8; 512];
    row[256] = 1;

    c.bench_function("evolve_elementary_512x256", |b| {
        b.iter(|| {
            let traj = evolve(black_box(&table), black_box(&row), 256).unwrap();
            black_box(traj);
        });
    });
}

/// Benchmark: 64 steps over a 512-cell ring, radius-2 three-state rule.
fn bench_evolve_reference(c: &mut Criterion) {
    let table = reference_table(1);
    let row = reference_row(512, 2);

    c.bench_function("evolve_reference_512x64", |b| {
        b.iter(|| {
            let traj = evolve(black_box(&table), black_box(&row), 64).unwrap();
            black_box(traj);
        });
    });
}

criterion_group!(benches, bench_evolve_elementary, bench_evolve_reference);
criterion_main!(benches);
