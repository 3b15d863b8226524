//! Template compilation and extraction benchmarks.
//!
//! Run with: `cargo bench --bench extract -p xt-text`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xt_text::{extract_arguments, CompiledTemplate, ComparisonMode, MatchOptions, TemplateCache};

const INPUT: &str = "My name is Aleksey Nagovitsyn. I'm from Russia.";
const TEMPLATE: &str = "My name is {1} {0}. I'm from {2}.";

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_compile");
    for placeholders in [1usize, 4, 16] {
        let template: String = (0..placeholders).map(|i| format!("field{i}={{{i}}};")).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(placeholders),
            &template,
            |b, template| {
                b.iter(|| {
                    CompiledTemplate::new(
                        black_box(template),
                        ComparisonMode::Whole,
                        MatchOptions::default(),
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_extract");
    group.throughput(Throughput::Bytes(INPUT.len() as u64));

    let compiled =
        CompiledTemplate::new(TEMPLATE, ComparisonMode::Default, MatchOptions::default())
            .expect("valid template");
    group.bench_function("precompiled", |b| {
        b.iter(|| compiled.captures(black_box(INPUT)).map(|c| c.values()))
    });

    // Warm the global cache so the loop measures lookup plus matching.
    TemplateCache::global()
        .get_or_compile(TEMPLATE, ComparisonMode::Default, MatchOptions::default())
        .expect("valid template");
    group.bench_function("cached", |b| {
        b.iter(|| extract_arguments(black_box(INPUT), TEMPLATE, ComparisonMode::Default))
    });

    group.bench_function("uncached", |b| {
        let cache = TemplateCache::new();
        b.iter(|| {
            cache.clear();
            cache
                .get_or_compile(TEMPLATE, ComparisonMode::Default, MatchOptions::default())
                .map(|c| c.captures(black_box(INPUT)).map(|c| c.values()))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_extract);
criterion_main!(benches);
