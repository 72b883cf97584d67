// Criterion benchmark for the estimation pipeline.
//
// Run with: cargo bench --bench estimate

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yield_estimator_rust::{estimate, estimate_with, FixedVariation, PredictionInput, SoilType};

fn typical_input() -> PredictionInput {
    PredictionInput {
        temperature: 29.0,
        rainfall: 1100.0,
        humidity: 78.0,
        nitrogen: 25.0,
        phosphorus: 18.0,
        potassium: 14.0,
        ph_level: 6.2,
        soil_type: SoilType::Black,
    }
}

fn bench_estimate(c: &mut Criterion) {
    let input = typical_input();

    c.bench_function("estimate_thread_rng", |b| {
        b.iter(|| estimate(black_box(&input)).unwrap())
    });

    c.bench_function("estimate_fixed_variation", |b| {
        let mut variation = FixedVariation { jitter: 1.0, confidence: 90.0 };
        b.iter(|| estimate_with(black_box(&input), &mut variation).unwrap())
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
