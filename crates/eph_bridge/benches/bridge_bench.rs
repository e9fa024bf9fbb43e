use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eph_bridge::{BridgeConfig, DenseSample, bridge_body};

fn dense_samples() -> Vec<DenseSample> {
    (0..2000)
        .map(|i| {
            let jd = 2_451_545.0 + i as f64 * (64.0 / 1999.0);
            let theta = (jd - 2_451_545.0) / 64.0 * std::f64::consts::TAU;
            DenseSample {
                jd,
                position_au: [theta.cos(), theta.sin(), 0.01 * theta.sin()],
            }
        })
        .collect()
}

fn bridge_benchmarks(c: &mut Criterion) {
    let samples = dense_samples();
    c.bench_function("bridge_body_64_days", |b| {
        let config = BridgeConfig {
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + 64.0,
            interval_days: 16.0,
            degree: 9,
            residual_threshold_au: 1e-8,
            max_halvings: 2,
        };
        b.iter(|| bridge_body(black_box(&samples), black_box(&config)).unwrap());
    });
}

criterion_group!(benches, bridge_benchmarks);
criterion_main!(benches);
