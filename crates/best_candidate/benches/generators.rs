mod common;

use std::hint::black_box;

use best_candidate::sampling::{BestCandidateSampling, CandidateSampling, EarlyExitSampling};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 4] = [64, 128, 256, 512];

fn generator_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    for &count in &COUNTS {
        group.throughput(common::baseline_evaluations_throughput(count));

        let baseline = BestCandidateSampling::new(count);
        let mut rng = StdRng::seed_from_u64(0xBEEF ^ count as u64);
        group.bench_with_input(BenchmarkId::new("best_candidate", count), &count, |b, _| {
            b.iter(|| {
                let generation = baseline.generate(&mut rng);
                black_box(generation.distance_evaluations);
            });
        });

        let early_exit = EarlyExitSampling::new(count);
        let mut rng = StdRng::seed_from_u64(0xBEEF ^ count as u64);
        group.bench_with_input(BenchmarkId::new("early_exit", count), &count, |b, _| {
            b.iter(|| {
                let generation = early_exit.generate(&mut rng);
                black_box(generation.distance_evaluations);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = generator_benches
}
criterion_main!(benches);
