//! Benchmarks for phrase sanitization.
//!
//! Measures the masking pass against word lists of increasing size, served
//! from a warm cache over an in-memory store.

// Criterion macros generate items without docs - this is expected for benchmarks
// Benchmarks use expect/unwrap for simplicity - panics are acceptable in benchmarks
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use wordcensor::services::mask_word;
use wordcensor::storage::WordStore;
use wordcensor::{CachedWordRepository, MemoryCache, SanitizeService, SqliteWordStore};

const PHRASE: &str = "The quick brown fox jumps over the lazy dog while the bad cat \
    watches from a category of ugly and mean creatures";

fn sanitizer_with(word_count: usize) -> SanitizeService {
    let store = SqliteWordStore::in_memory().unwrap();
    for i in 0..word_count {
        store.insert(&format!("word{i}")).unwrap();
    }
    store.insert("bad").unwrap();
    store.insert("ugly").unwrap();

    let repository = CachedWordRepository::new(Arc::new(store), Arc::new(MemoryCache::default()));
    SanitizeService::new(Arc::new(repository))
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    for word_count in [10usize, 100, 1_000] {
        let sanitizer = sanitizer_with(word_count);
        // Warm the cache
        sanitizer.sanitize_text(PHRASE).unwrap();

        group.bench_with_input(
            BenchmarkId::new("word_list", word_count),
            &sanitizer,
            |b, sanitizer| b.iter(|| sanitizer.sanitize_text(black_box(PHRASE)).unwrap()),
        );
    }

    group.finish();
}

fn bench_mask_word(c: &mut Criterion) {
    c.bench_function("mask_word_hit", |b| {
        b.iter(|| mask_word(black_box(PHRASE), black_box("CAT")));
    });
    c.bench_function("mask_word_miss", |b| {
        b.iter(|| mask_word(black_box(PHRASE), black_box("zebra")));
    });
}

criterion_group!(benches, bench_sanitize, bench_mask_word);
criterion_main!(benches);
