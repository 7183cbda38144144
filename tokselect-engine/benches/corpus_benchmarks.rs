//! Performance benchmarks for corpus filtering
//!
//! Run with: cargo bench --bench corpus_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tokselect_engine::{
    CorpusProcessor, Dictionary, Document, ExecutionMode, Mode, PartitionPolicy, Window,
};

/// Generate a corpus of `documents` documents of `tokens` tokens each
fn generate_corpus(documents: usize, tokens: usize) -> Vec<Document> {
    (0..documents)
        .map(|d| (0..tokens).map(|t| ((d * 31 + t * 7) % 5_000 + 1) as u32).collect())
        .collect()
}

fn dictionary() -> Dictionary {
    let unigrams = (1..500u32).step_by(3).map(|t| vec![t]);
    let bigrams = (1..2_000u32).step_by(7).map(|t| vec![t, t + 7]);
    Dictionary::from_sequences(unigrams.chain(bigrams)).unwrap()
}

/// Benchmark sequential against parallel execution
fn bench_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_modes");
    let corpus = generate_corpus(2_000, 500);

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let processor = CorpusProcessor::builder()
            .dictionary(dictionary())
            .mode(Mode::Remove)
            .padding(true)
            .execution_mode(mode)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(1_000_000));
        group.bench_with_input(
            BenchmarkId::new("remove", mode.as_str()),
            &corpus,
            |b, corpus| {
                b.iter(|| processor.process(black_box(corpus.clone())).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark parallel processing with different thread counts
fn bench_thread_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_counts");
    let corpus = generate_corpus(4_000, 250);

    for threads in [1, 2, 4, 8] {
        let processor = CorpusProcessor::builder()
            .dictionary(dictionary())
            .mode(Mode::Keep)
            .window(Window::symmetric(2))
            .execution_mode(ExecutionMode::Parallel)
            .partition_policy(PartitionPolicy::PerThread)
            .threads(Some(threads))
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(1_000_000));
        group.bench_with_input(BenchmarkId::new("threads", threads), &corpus, |b, corpus| {
            b.iter(|| processor.process(black_box(corpus.clone())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_execution_modes, bench_thread_counts);
criterion_main!(benches);
