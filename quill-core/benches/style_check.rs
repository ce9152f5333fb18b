//! Performance benchmarks for StyleChecker
//!
//! Run with: cargo bench --bench style_check

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quill_core::{ExecutionMode, StyleChecker};
use std::hint::black_box;

/// Generate prose of roughly `size` bytes with a mix of flagged constructions
fn generate_text(size: usize) -> String {
    let paragraph = "The report was written very quickly. So the results were mixed. \
                     There are many reasons for this, and in order to fix them we need time.\n";
    let repeat_count = size / paragraph.len() + 1;

    let mut text = paragraph.repeat(repeat_count);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let checker = StyleChecker::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("check", size), &text, |b, text| {
            b.iter(|| {
                let _ = checker.check(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark sequential against parallel execution
fn bench_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_modes");
    let checker = StyleChecker::new().unwrap();
    let text = generate_text(102_400);

    for (name, mode) in [
        ("sequential", ExecutionMode::Sequential),
        ("parallel", ExecutionMode::Parallel),
    ] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mode", name), &text, |b, text| {
            b.iter(|| {
                let _ = checker.check_with_mode(black_box(text), mode).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark parallel execution with different thread counts
fn bench_thread_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_counts");
    let text = generate_text(102_400);

    for threads in [1, 2, 4, 8] {
        let checker = StyleChecker::builder()
            .parallel()
            .threads(Some(threads))
            .build()
            .unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &text, |b, text| {
            b.iter(|| {
                let _ = checker.check(black_box(text)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_execution_modes,
    bench_thread_counts
);
criterion_main!(benches);
