//! Performance benchmarks for the syllabizer
//!
//! Run with: cargo bench --bench syllabize_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use silaba_core::Syllabizer;
use std::hint::black_box;

/// Words grouped by the part of the scanner they stress
const WORD_SETS: &[(&str, &[&str])] = &[
    ("simple", &["casa", "perro", "mesa", "libro", "camino"]),
    ("clusters", &["instante", "abstracto", "perspectiva", "construir", "transporte"]),
    ("vowel_groups", &["murciélago", "averiguáis", "cantautor", "Uruguay", "biología"]),
    ("silent_letters", &["ahumar", "pingüino", "quiosco", "guerra", "deshacer"]),
];

/// Benchmark each word set
fn bench_word_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_sets");
    let syllabizer = Syllabizer::new();

    for (name, words) in WORD_SETS {
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(BenchmarkId::new("syllabize", name), words, |b, words| {
            b.iter(|| {
                for word in words.iter() {
                    let _ = syllabizer.syllabize(black_box(word)).unwrap();
                }
            });
        });
    }

    group.finish();
}

/// Benchmark word length scaling
fn bench_word_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_length");
    let syllabizer = Syllabizer::new();

    for repeats in [1, 4, 16, 64] {
        let word = "caracol".repeat(repeats);

        group.throughput(Throughput::Bytes(word.len() as u64));
        group.bench_with_input(BenchmarkId::new("syllabize", repeats), &word, |b, word| {
            b.iter(|| {
                let _ = syllabizer.syllabize(black_box(word)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_word_sets, bench_word_length);
criterion_main!(benches);
