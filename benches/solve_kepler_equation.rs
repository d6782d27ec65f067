use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skyfall::kepler::solve_kepler;

/// Grid of (mean anomaly, eccentricity) pairs covering the elliptical regime.
fn anomaly_grid(ecc_max: f64) -> Vec<(f64, f64)> {
    let mut cases = Vec::new();
    for ke in 0..20 {
        let e = ecc_max * ke as f64 / 19.0;
        for km in 0..50 {
            let m = std::f64::consts::TAU * km as f64 / 50.0;
            cases.push((m, e));
        }
    }
    cases
}

/// Typical regime: e ≤ 0.7
fn bench_typical(c: &mut Criterion) {
    let cases = anomaly_grid(0.7);
    c.bench_function("solve_kepler_equation/typical_e<=0.7", |b| {
        b.iter(|| {
            for &(m, e) in &cases {
                black_box(solve_kepler(black_box(m), black_box(e)));
            }
        })
    });
}

/// Stress regime: near-parabolic eccentricities where Newton needs the most steps.
fn bench_near_parabolic(c: &mut Criterion) {
    let cases = anomaly_grid(0.999);
    c.bench_function("solve_kepler_equation/near_parabolic_e<=0.999", |b| {
        b.iter(|| {
            for &(m, e) in &cases {
                black_box(solve_kepler(black_box(m), black_box(e)));
            }
        })
    });
}

criterion_group!(benches, bench_typical, bench_near_parabolic);
criterion_main!(benches);
