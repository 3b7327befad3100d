//! Criterion micro-benchmarks for rule identification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_bench::{reference_geometry, reference_row, reference_table};
use weft_engine::evolve;
use weft_infer::identify;

/// Benchmark: lenient scan of a 512x64 reference trajectory.
fn bench_identify_reference(c: &mut Criterion) {
    let hood = reference_geometry();
    let table = reference_table(5);
    let trajectory = evolve(&table, &reference_row(512, 6), 64).expect("valid row");

    c.bench_function("identify_reference_512x64", |b| {
        b.iter(|| {
            let report = identify(black_box(&trajectory), hood).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, bench_identify_reference);
criterion_main!(benches);
