use canonical::{canonicalize, tokenize, CanonicalizeConfig};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn sample_text(bytes: usize) -> String {
    "The Quick, brown fox! jumps over the lazy dog's back. "
        .repeat(bytes / 54 + 1)
}

fn bench_canonicalize(c: &mut Criterion) {
    let config = CanonicalizeConfig::default();
    let mut group = c.benchmark_group("canonicalize");

    for size in [64, 512, 4096, 32768] {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| canonicalize(black_box(&text), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let text = sample_text(4096);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("bytes_4096", |b| b.iter(|| tokenize(black_box(&text))));
    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_tokenize);
criterion_main!(benches);
