use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eph_time::{calendar_to_jd, et_to_jd, jd_to_et};

fn jd_et_bench(c: &mut Criterion) {
    let jd = calendar_to_jd(2024, 3, 20.5);

    let mut group = c.benchmark_group("jd_et");
    group.bench_function("jd_to_et", |b| b.iter(|| jd_to_et(black_box(jd))));
    group.bench_function("et_to_jd", |b| {
        b.iter(|| et_to_jd(black_box(jd_to_et(jd))))
    });
    group.finish();
}

criterion_group!(benches, jd_et_bench);
criterion_main!(benches);
