//! Niihau Benchmarks
//!
//! Benchmarks for the Niihau Trie, implemented with the Criterion framework,
//! which provides statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use niihau_lib::NiihauTrie;
use std::time::Duration;

/// Generates `count` words of roughly `length` chars sharing common prefixes.
fn generate_words(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:0width$}", i, width = length))
        .collect()
}

/// Benchmark the Niihau Trie
fn bench_niihau_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("niihau_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Bulk insert with different word lengths
    for word_length in [8, 16, 32, 64].iter() {
        let words = generate_words(1000, *word_length);
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("insert", word_length),
            &words,
            |b, words| {
                b.iter_batched(
                    NiihauTrie::new,
                    |mut trie| {
                        for word in words {
                            black_box(trie.insert(word));
                        }
                        trie
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    // Exact lookup
    group.bench_function("lookup", |b| {
        let words: Vec<String> = (0..1000).map(|i| format!("key_{}", i)).collect();
        let trie: NiihauTrie = words.iter().collect();

        let mut index = 0;
        b.iter(|| {
            let word = &words[index % words.len()];
            index += 1;
            black_box(trie.lookup(word.as_str()));
        });
    });

    // Eager and lazy autocomplete over a hierarchy of words
    let mut trie = NiihauTrie::new();
    for i in 0..100 {
        for j in 0..10 {
            trie.insert(format!("prefix_{}_key_{}", i, j));
        }
    }

    group.bench_function("auto_complete", |b| {
        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("prefix_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(trie.auto_complete(&prefix));
        });
    });

    group.bench_function("completions_first_3", |b| {
        b.iter(|| {
            let first: Vec<String> = trie
                .completions(black_box("prefix_"))
                .map(|words| words.take(3).collect())
                .unwrap_or_default();
            black_box(first);
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_niihau_trie
}

criterion_main!(benches);
