//! Classification and conjugation benchmarks.
//!
//! Measures per-word cost for each class and for tag classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use katsuyo::{classify, conjugate, ConjugationClass};

const SAMPLES: &[(&str, ConjugationClass)] = &[
    ("書く", ConjugationClass::GodanVerb),
    ("行く", ConjugationClass::GodanVerb),
    ("食べる", ConjugationClass::IchidanVerb),
    ("勉強する", ConjugationClass::SuruVerb),
    ("持って来る", ConjugationClass::KuruVerb),
    ("高い", ConjugationClass::IAdjective),
    ("いい", ConjugationClass::IAdjective),
    ("綺麗", ConjugationClass::NaAdjective),
];

const TAGS: &[&str] = &[
    "他動1",
    "自动2",
    "名・他動3",
    "カ変",
    "イ形",
    "名・ナ形",
    "名",
    "副・感",
];

/// Benchmark paradigm generation per class.
fn bench_conjugate(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugate");

    for (word, class) in SAMPLES {
        group.bench_with_input(
            BenchmarkId::new(class.to_string(), word),
            &(word, class),
            |b, (word, class)| b.iter(|| black_box(conjugate(word, **class).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark tag classification.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for tag in TAGS {
        group.bench_with_input(BenchmarkId::new("tag", tag), tag, |b, tag| {
            b.iter(|| black_box(classify("書く", tag)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conjugate, bench_classify);
criterion_main!(benches);
