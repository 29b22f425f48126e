//! Criterion benchmarks for polynomial multiplication strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use polyfft_core::{FftMultiplier, Multiplier, Polynomial, SchoolbookMultiplier};

fn sample(len: usize, seed: u32) -> Polynomial<f64> {
    (0..len)
        .map(|i| {
            let x = f64::from((i as u32).wrapping_mul(2_654_435_761).wrapping_add(seed) % 21);
            x - 10.0
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let fft = FftMultiplier::default();
    let naive = SchoolbookMultiplier::new();

    let sizes: Vec<usize> = vec![16, 64, 256, 1_024, 4_096];

    let mut group = c.benchmark_group("FFT");
    for &n in &sizes {
        let (a, b) = (sample(n, 1), sample(n, 7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| fft.multiply(&a, &b).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("FFTSquare");
    for &n in &sizes {
        let a = sample(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| fft.square(&a).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Schoolbook");
    for &n in &sizes {
        let (a, b) = (sample(n, 1), sample(n, 7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| naive.multiply(&a, &b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
