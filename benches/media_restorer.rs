use criterion::{Criterion, criterion_group, criterion_main};
use media_restorer::gps::to_dms;
use media_restorer::time::normalize;
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    c.bench_function("time::normalize", |b| {
        b.iter(|| normalize(black_box("15 июл. 2021 г., 14:30:00")).unwrap());
    });

    c.bench_function("gps::to_dms", |b| {
        b.iter(|| to_dms(black_box(55.7558), true));
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
