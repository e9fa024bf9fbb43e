use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eph_container::{BodyInput, CoeffBlock, encode_to_path};
use eph_query::QueryEngine;

fn sample_path() -> std::path::PathBuf {
    std::env::temp_dir().join("eph_query_bench.eph")
}

fn build_sample() {
    let degree = 7usize;
    let num_intervals = 64;
    let intervals: Vec<(f64, f64)> = (0..num_intervals)
        .map(|i| (2_451_545.0 + i as f64 * 16.0, 2_451_545.0 + (i + 1) as f64 * 16.0))
        .collect();
    let block = CoeffBlock {
        x: vec![1.0; degree + 1],
        y: vec![1.0; degree + 1],
        z: vec![1.0; degree + 1],
    };
    let bodies = vec![BodyInput {
        id: 399,
        name: "Earth".into(),
        blocks: (0..num_intervals).map(|_| block.clone()).collect(),
    }];
    encode_to_path(sample_path(), &intervals, degree as u32, bodies).unwrap();
}

fn query_benchmarks(c: &mut Criterion) {
    build_sample();
    let path = sample_path();

    c.bench_function("query_compute_uncached", |b| {
        let mut engine = QueryEngine::open(&path).unwrap();
        b.iter(|| engine.compute(black_box(399), black_box(2_451_545.0 + 500.0)).unwrap());
    });

    c.bench_function("query_compute_cached", |b| {
        let mut engine = QueryEngine::open_with_cache(&path, 8).unwrap();
        engine.compute(399, 2_451_545.0 + 500.0).unwrap();
        b.iter(|| engine.compute(black_box(399), black_box(2_451_545.0 + 500.0)).unwrap());
    });

    c.bench_function("query_compute_state", |b| {
        let mut engine = QueryEngine::open_with_cache(&path, 8).unwrap();
        b.iter(|| engine.compute_state(black_box(399), black_box(2_451_545.0 + 500.0)).unwrap());
    });

    std::fs::remove_file(&path).ok();
}

criterion_group!(benches, query_benchmarks);
criterion_main!(benches);
