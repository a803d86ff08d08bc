//! Benchmarks for the text helpers in seqmatch/src/text.rs
//!
//! Performance-critical paths:
//! - `remove_urls`: regex replacement over mixed text
//! - `PatternCounter::count`: non-overlapping match counting
//! - `digest_hex`: hashing plus hex encoding

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use seqmatch::{DigestAlgorithm, PatternCounter};

fn mixed_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("item {i} see https://shop.example.com/p/{i}?ref=inv for details\n"))
        .collect()
}

fn bench_remove_urls(c: &mut Criterion) {
    let mut group = c.benchmark_group("text/remove_urls");

    for lines in [1usize, 100, 1000] {
        let text = mixed_text(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| seqmatch::remove_urls(black_box(text)));
        });
    }

    group.finish();
}

fn bench_pattern_count(c: &mut Criterion) {
    let counter = PatternCounter::new(r"item \d+").unwrap();
    let text = mixed_text(1000);

    c.bench_function("text/pattern_count", |b| {
        b.iter(|| counter.count(black_box(&text)));
    });
}

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("text/digest_hex");
    let text = mixed_text(100);

    for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Sha512] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(algorithm.to_string(), |b| {
            b.iter(|| seqmatch::digest_hex(black_box(&text), algorithm));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_remove_urls, bench_pattern_count, bench_digest);
criterion_main!(benches);
