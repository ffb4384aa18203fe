//! Benchmark suite for linked sequence operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linked_sequence::LinkedSequence;

const SIZES: [u64; 3] = [100, 1_000, 10_000];

/// Benchmark appending elements to an empty sequence.
fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut seq = LinkedSequence::new();
                for i in 0..size {
                    seq.push(black_box(i));
                }
                seq
            });
        });
    }
    group.finish();
}

/// Benchmark draining a pre-populated sequence from the front.
fn pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");

    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<LinkedSequence<u64>>(),
                |mut seq| {
                    while let Ok(v) = seq.pop() {
                        black_box(v);
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark inserting repeatedly before a cursor in the middle of a sequence.
///
/// Each insert is O(1) once the cursor is known.
fn insert_middle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");

    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut seq: LinkedSequence<u64> = [0, u64::MAX].into_iter().collect();
                let last = seq.advance(seq.begin()).expect("valid cursor");
                for i in 0..size {
                    seq.insert(last, black_box(i)).expect("valid cursor");
                }
                seq
            });
        });
    }
    group.finish();
}

/// Benchmark walking the whole sequence with its iterator and with cursors.
fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in SIZES.iter() {
        let seq: LinkedSequence<u64> = (0..*size).collect();
        group.throughput(Throughput::Elements(*size));

        group.bench_with_input(BenchmarkId::new("iter", size), &seq, |b, seq| {
            b.iter(|| seq.iter().sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("cursor", size), &seq, |b, seq| {
            b.iter(|| {
                let mut sum = 0u64;
                let mut cursor = seq.begin();
                while !cursor.is_end() {
                    sum = sum.wrapping_add(*seq.get(cursor).expect("valid cursor"));
                    cursor = seq.advance(cursor).expect("valid cursor");
                }
                sum
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_benchmark,
    pop_benchmark,
    insert_middle_benchmark,
    iterate_benchmark
);
criterion_main!(benches);
