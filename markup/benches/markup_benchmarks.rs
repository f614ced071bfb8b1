//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for markup lexing and dispatch

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use termark_markup::{Dispatcher, Lexer, MarkupConfig, RecordingSink, Token};

const SAMPLE: &str = "%c%%r%%f15%%b3%Hello %f0%world!%r%%lf%";

fn markup_of_size(repeats: usize) -> String {
    SAMPLE.repeat(repeats)
}

// Benchmark splitting into chunks
fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for repeats in [1, 10, 100, 1000].iter() {
        let input = markup_of_size(*repeats);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &input, |b, input| {
            b.iter(|| black_box(Lexer::new(black_box(input)).count()));
        });
    }
    group.finish();
}

// Benchmark classifying single chunks
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for chunk in ["b", "f15", "xy10,20", "lf", "Hello world, this is literal text"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), chunk, |b, chunk| {
            b.iter(|| black_box(Token::classify(black_box(chunk))));
        });
    }
    group.finish();
}

// Benchmark full dispatch into a recording sink
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for (name, config) in [
        ("direct", MarkupConfig::direct()),
        ("legacy", MarkupConfig::legacy()),
    ] {
        let dispatcher = Dispatcher::new(config);
        let input = markup_of_size(100);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| {
                let mut sink = RecordingSink::new();
                dispatcher.parse(black_box(input), &mut sink).unwrap();
                black_box(sink);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lexer, bench_classify, bench_dispatch);
criterion_main!(benches);
