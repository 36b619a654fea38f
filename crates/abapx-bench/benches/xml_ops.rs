//! Criterion micro-benchmarks for asXML serialization.

use std::hint::black_box;

use abapx_bench::{nested_profile, release_table};
use abapx_core::Value;
use abapx_xml::{abap_to_xml, escape_text, to_xml};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: Serialize a 1K-row record table with the envelope.
fn bench_to_xml_table_1k(c: &mut Criterion) {
    let table = release_table(1_000);

    c.bench_function("to_xml_table_1k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64 * 1024);
            to_xml(&table, &mut buf, None).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: Serialize a nested record with `item` row names.
fn bench_fragment_nested_1k(c: &mut Criterion) {
    let record = nested_profile(1_000);
    let item = |_: &Value| "item".to_owned();

    c.bench_function("fragment_nested_1k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64 * 1024);
            abap_to_xml(&record, &mut buf, "", Some(&item)).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: Escape text with and without markup characters.
fn bench_escape_text(c: &mut Criterion) {
    let clean = "Fedora Linux 39 Workstation".repeat(8);
    let dirty = "<release> & <kernel>".repeat(8);

    c.bench_function("escape_text_clean", |b| {
        b.iter(|| black_box(escape_text(black_box(&clean)).len()));
    });
    c.bench_function("escape_text_dirty", |b| {
        b.iter(|| black_box(escape_text(black_box(&dirty)).len()));
    });
}

criterion_group!(
    benches,
    bench_to_xml_table_1k,
    bench_fragment_nested_1k,
    bench_escape_text,
);
criterion_main!(benches);
