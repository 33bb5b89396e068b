//! End-to-end generation benchmarks.
//!
//! Measures batch generation into memory and SQLite stores across
//! vocabulary sizes and batch sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use katsuyo::{Generator, GeneratorConfig, LexicalEntry, MemoryStore, SqliteStore};

/// Generate a synthetic vocabulary cycling through every class.
fn generate_vocabulary(size: usize) -> Vec<LexicalEntry> {
    const TEMPLATES: &[(&str, &str)] = &[
        ("書く", "他動1"),
        ("読む", "他動1"),
        ("食べる", "他动2"),
        ("勉強する", "名・他動3"),
        ("来る", "カ変"),
        ("高い", "イ形"),
        ("綺麗", "ナ形"),
        ("本", "名"),
    ];

    (0..size)
        .map(|i| {
            let (word, pos) = TEMPLATES[i % TEMPLATES.len()];
            LexicalEntry::new(i as i64 + 1, word, pos)
        })
        .collect()
}

/// Benchmark generation into the in-memory store.
fn bench_generate_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_memory");

    for size in [100, 1_000, 10_000].iter() {
        let entries = generate_vocabulary(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("entries", size), &entries, |b, entries| {
            b.iter_with_setup(
                || (MemoryStore::new(), entries.clone()),
                |(mut store, entries)| {
                    black_box(Generator::new().generate(&mut store, entries).unwrap())
                },
            )
        });
    }

    group.finish();
}

/// Benchmark SQLite writes with varying batch sizes.
fn bench_generate_sqlite_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_sqlite_batch_size");
    let size = 1_000;
    let entries = generate_vocabulary(size);

    for batch_size in [1, 50, 500].iter() {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("batch", batch_size),
            batch_size,
            |b, &batch_size| {
                let config = GeneratorConfig {
                    batch_size,
                    ..GeneratorConfig::default()
                };
                b.iter_with_setup(
                    || (SqliteStore::memory().unwrap(), entries.clone()),
                    |(mut store, entries)| {
                        black_box(
                            Generator::with_config(config.clone())
                                .generate(&mut store, entries)
                                .unwrap(),
                        )
                    },
                )
            },
        );
    }

    group.finish();
}

/// Benchmark the dry-run path (no store).
fn bench_preview(c: &mut Criterion) {
    let entries = generate_vocabulary(10_000);
    c.bench_function("preview_10000", |b| {
        b.iter_with_setup(
            || entries.clone(),
            |entries| black_box(Generator::new().preview(entries)),
        )
    });
}

criterion_group!(
    benches,
    bench_generate_memory,
    bench_generate_sqlite_batches,
    bench_preview,
);
criterion_main!(benches);
