//! Benchmarks for the comparator and the reference kernels.
//!
//! The comparator runs once per verification, often over outputs much
//! larger than 4×4, so its per-element cost matters more than the toy
//! kernels suggest.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kernelcheck::reference::matmul::matmul_ref;
use kernelcheck::reference::transpose::transpose_ref;
use kernelcheck::{Tolerance, compare};

fn bench_compare(c: &mut Criterion) {
    let reference: Vec<f32> = (0..4096).map(|i| (i % 97) as f32 * 0.5).collect();
    let candidate = reference.clone();

    c.bench_function("compare_epsilon_4096", |bench| {
        bench.iter(|| {
            compare(
                black_box(&reference),
                black_box(&candidate),
                Tolerance::Epsilon { max_units: 128.0 },
            )
        })
    });

    c.bench_function("compare_exact_4096", |bench| {
        bench.iter(|| {
            compare(
                black_box(&reference),
                black_box(&candidate),
                Tolerance::Exact,
            )
        })
    });
}

fn bench_reference_kernels(c: &mut Criterion) {
    let n = 64;
    let a: Vec<f32> = (0..n * n).map(|i| (i % 10) as f32).collect();
    let b: Vec<f32> = (0..n * n).map(|i| (i % 7) as f32).collect();
    let mut out = vec![0.0f32; n * n];

    c.bench_function("matmul_ref_64", |bench| {
        bench.iter(|| matmul_ref(black_box(&a), black_box(&b), &mut out, n, n, n))
    });

    let mut m: Vec<f32> = (0..n * n).map(|i| i as f32).collect();
    c.bench_function("transpose_ref_64", |bench| {
        bench.iter(|| transpose_ref(black_box(&mut m), n))
    });
}

criterion_group!(benches, bench_compare, bench_reference_kernels);
criterion_main!(benches);
