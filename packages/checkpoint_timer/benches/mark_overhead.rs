//! Measures the cost of marking a checkpoint, which is paid on every iteration of the
//! profiled loop.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use checkpoint_timer::{KeyStrategy, Profiler};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const NAMES: [&str; 4] = ["decode", "transform", "encode", "flush"];

fn mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark");

    for key_strategy in [KeyStrategy::Content, KeyStrategy::Identity] {
        let mut profiler = Profiler::builder().key_strategy(key_strategy).build();

        group.bench_with_input(
            BenchmarkId::new("named", format!("{key_strategy:?}")),
            &NAMES,
            |b, names| {
                b.iter(|| {
                    for name in names {
                        profiler.mark(Some(black_box(*name)));
                    }
                });
            },
        );
    }

    let mut profiler = Profiler::new();

    group.bench_function("resync", |b| {
        b.iter(|| profiler.mark(None));
    });

    group.finish();
}

fn render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut profiler = Profiler::new();

    group.bench_function("four_checkpoints", |b| {
        b.iter(|| {
            for name in NAMES {
                profiler.mark(Some(name));
            }

            black_box(profiler.render());
        });
    });

    group.finish();
}

criterion_group!(benches, mark, render);
criterion_main!(benches);
