//! Benchmark: integer codecs, Base64 and natural ordering against `core`
//! baselines.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quickprims::{FastInt, base64, natural};

/// Deterministic spread of values covering every digit count.
fn sample_i64() -> Vec<i64> {
    let mut value = 1i64;
    let mut out = Vec::new();
    for digits in 0..19 {
        out.push(value);
        out.push(-value);
        out.push(value * 7 / 3 + digits);
        value = value.saturating_mul(10);
    }
    out.push(i64::MIN);
    out.push(i64::MAX);
    out
}

fn bench_int_codec(c: &mut Criterion) {
    let values = sample_i64();
    let texts: Vec<String> = values.iter().map(ToString::to_string).collect();

    let mut group = c.benchmark_group("int_codec");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("format/fast", |b| {
        b.iter(|| {
            for v in &values {
                black_box(black_box(*v).fast_format());
            }
        });
    });
    group.bench_function("format/display", |b| {
        b.iter(|| {
            for v in &values {
                black_box(black_box(*v).to_string());
            }
        });
    });
    group.bench_function("parse/fast", |b| {
        b.iter(|| {
            for t in &texts {
                black_box(i64::try_parse(black_box(t)));
            }
        });
    });
    group.bench_function("parse/core", |b| {
        b.iter(|| {
            for t in &texts {
                black_box(black_box(t).parse::<i64>().ok());
            }
        });
    });
    group.finish();
}

fn bench_base64(c: &mut Criterion) {
    let mut group = c.benchmark_group("base64");
    for &len in &[16usize, 1_024, 65_536] {
        #[allow(clippy::cast_possible_truncation)]
        let payload: Vec<u8> = (0..len).map(|i| (i * 31) as u8).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("encode", len), &payload, |b, p| {
            b.iter(|| black_box(base64::encode(black_box(p))));
        });
    }
    group.finish();
}

fn bench_natural_sort(c: &mut Criterion) {
    let names: Vec<String> = (0..1_000u32)
        .map(|i| format!("frame{}_v{}.png", (i * 7_919) % 1_000, i % 13))
        .collect();

    c.bench_function("natural/sort_1000", |b| {
        b.iter(|| {
            let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
            sorted.sort_by(|a, b| natural::compare(a, b));
            black_box(sorted);
        });
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_int_codec, bench_base64, bench_natural_sort
}
criterion_main!(benches);
