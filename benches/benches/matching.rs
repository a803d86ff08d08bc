//! Benchmarks for the matching functions in seqmatch/src/matching
//!
//! Performance-critical paths:
//! - `lcs`: full table fill plus backtracking
//! - `lcs_len`: rolling two-row fill
//! - `lccs`: diagonal scan without a table
//! - `similarity`: ratio on top of `lcs_len`

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Builds a product-name-like string whose alphabet shifts with `seed`.
fn synthetic(len: usize, seed: usize) -> Vec<char> {
    (0..len)
        .map(|i| char::from(b'a' + u8::try_from((i * 7 + seed) % 26).unwrap()))
        .collect()
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/lcs");

    for len in [16usize, 64, 256, 1024] {
        let left = synthetic(len, 0);
        let right = synthetic(len, 3);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| seqmatch::lcs(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn bench_lcs_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/lcs_len");

    for len in [16usize, 64, 256, 1024, 4096] {
        let left = synthetic(len, 0);
        let right = synthetic(len, 3);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| seqmatch::lcs_len(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn bench_lccs(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/lccs");

    for len in [16usize, 64, 256, 1024, 4096] {
        let left = synthetic(len, 0);
        let right = synthetic(len, 3);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| seqmatch::lccs(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn bench_similarity_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/similarity_str");

    // Typical invoice line items
    let pairs = [
        ("short", "Widget 12oz", "Widget 12 oz"),
        (
            "medium",
            "Stainless steel water bottle, insulated, 750ml, blue",
            "Insulated stainless water bottle 750 ml (blue)",
        ),
    ];

    for (name, left, right) in pairs {
        group.bench_function(name, |b| {
            b.iter(|| seqmatch::similarity_str(black_box(left), black_box(right)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lcs,
    bench_lcs_len,
    bench_lccs,
    bench_similarity_str
);
criterion_main!(benches);
