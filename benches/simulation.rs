use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use securescope::simulation::{
    build_curve, build_params, run_simulation, simulate_losses, LossModelParams, ThresholdPolicy,
};

fn bench_simulate_losses(c: &mut Criterion) {
    let params = build_params(1_000.0, 250_000.0).expect("valid range");
    let mut group = c.benchmark_group("simulate_losses");

    for trials in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                simulate_losses(&mut rng, black_box(&params), 0.6, trials).expect("simulation")
            });
        });
    }
    group.finish();
}

fn bench_build_curve(c: &mut Criterion) {
    let params = build_params(1_000.0, 250_000.0).expect("valid range");
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("build_curve");

    for trials in [1_000usize, 10_000] {
        let samples = simulate_losses(&mut rng, &params, 0.6, trials).expect("simulation");
        group.bench_with_input(BenchmarkId::from_parameter(trials), &samples, |b, samples| {
            b.iter(|| build_curve(1_000.0, 250_000.0, black_box(samples), trials).expect("curve"));
        });
    }
    group.finish();
}

fn bench_run_simulation(c: &mut Criterion) {
    let params = LossModelParams::new(1_000.0, 250_000.0, 10_000, 0.6, 0.1).expect("valid params");
    let policy = ThresholdPolicy::default();

    c.bench_function("run_simulation_10k", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| run_simulation(black_box(&params), &policy, &mut rng).expect("simulation"));
    });
}

criterion_group!(benches, bench_simulate_losses, bench_build_curve, bench_run_simulation);
criterion_main!(benches);
