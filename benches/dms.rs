use criterion::{Criterion, criterion_group, criterion_main};
use spherical_geodesy::{DmsFormat, dms};
use std::hint::black_box;

fn dms_benchmark(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| dms::parse(black_box("51° 28′ 40.12″ N")))
    });

    c.bench_function("to_lat", |b| {
        b.iter(|| dms::to_lat(black_box(51.477_811), DmsFormat::Dms, Some(2)))
    });
}

criterion_group!(benches, dms_benchmark);
criterion_main!(benches);
