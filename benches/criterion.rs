//! Criterion benchmark entry for chabrier-imf.
//!
//! Run with
//! ```bash
//! cargo bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use chabrier_imf::{density, sample_parallel, SamplerBuilder};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: &[usize] = &[100, 10_000];
const SEED: u64 = 42;

fn bench_density(c: &mut Criterion) {
    // Spread across both branches.
    let masses: Vec<f64> = (1..=1_000).map(|i| i as f64 * 0.1).collect();

    let mut group = c.benchmark_group("density");
    group.throughput(Throughput::Elements(masses.len() as u64));
    group.bench_function("both_branches", |b| {
        b.iter(|| masses.iter().map(|&m| density(m)).sum::<f64>())
    });
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let sampler = SamplerBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("rejection_sample");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, &n| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(SEED);
                sampler.sample(&mut rng, n).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel_4", n), &n, |b, &n| {
            b.iter(|| sample_parallel(&sampler, n, 4, SEED).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_density, bench_sample);
criterion_main!(benches);
