use criterion::{criterion_group, criterion_main, Criterion};

use ymg_core::params::Params;
use ymg_model::{mass_gap, sweep_mass_gap, SweepOpts};

fn bench_mass_gap(c: &mut Criterion) {
    let params = Params::default();
    c.bench_function("mass_gap_point", |b| {
        b.iter(|| mass_gap(std::hint::black_box(0.5), &params).unwrap())
    });
}

fn bench_sweep(c: &mut Criterion) {
    let params = Params::default();
    let opts = SweepOpts {
        start: 0.01,
        end: 1.0,
        points: 1000,
    };
    c.bench_function("sweep_1k_points", |b| {
        b.iter(|| sweep_mass_gap(&opts, &params).unwrap())
    });
}

criterion_group!(benches, bench_mass_gap, bench_sweep);
criterion_main!(benches);
