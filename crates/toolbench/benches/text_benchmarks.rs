//! Word counter performance benchmarks.
//!
//! Measures counting and analysis across document sizes and markup styles.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use toolbench::{analyze_text, count_words, WordCountOptions};

const PROSE: &str = "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs! ";

const HTML: &str = "<p>Read <a href=\"https://example.com/docs\">the <b>docs</b></a> first.</p>\
                    <img src=\"a.png\" alt=\"diagram of the flow\"><video src=\"v.mp4\"></video>\
                    <pre><code>let x = 1;</code></pre>&nbsp;&amp; more\n";

const MARKDOWN: &str = "# Heading\n\n> A **bold** and _quiet_ quote.\n\n\
                        See [the guide](https://example.com) and ![a chart](c.png).\n\n\
                        ```\nfn main() {}\n```\n\n---\n";

fn repeat(unit: &str, times: usize) -> String {
    unit.repeat(times)
}

/// Benchmark plain prose of increasing length.
fn bench_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_plain");
    let opts = WordCountOptions::default();

    for times in [1, 100, 1_000].iter() {
        let text = repeat(PROSE, *times);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("repeats", times), &text, |b, text| {
            b.iter(|| black_box(count_words(text, &opts)))
        });
    }

    group.finish();
}

/// Benchmark the full analysis over HTML and Markdown documents.
fn bench_markup_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_markup");
    let opts = WordCountOptions::default();

    for (name, unit) in [("html", HTML), ("markdown", MARKDOWN)] {
        let text = repeat(unit, 200);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("doc", name), &text, |b, text| {
            b.iter(|| black_box(analyze_text(text, &opts)))
        });
    }

    group.finish();
}

/// Benchmark the cost of each option combination on one document.
fn bench_option_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_policies");
    let text = repeat(&format!("{}{}", HTML, MARKDOWN), 100);

    let policies = [
        ("default", WordCountOptions::default()),
        ("raw", WordCountOptions::raw()),
        ("no_code", WordCountOptions::default().with_code_blocks(false)),
        (
            "everything",
            WordCountOptions::default()
                .with_link_urls(true)
                .with_media_elements(true),
        ),
    ];

    for (name, opts) in policies.iter() {
        group.bench_with_input(BenchmarkId::new("policy", name), &text, |b, text| {
            b.iter(|| black_box(count_words(text, opts)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_markup_analysis,
    bench_option_policies,
);
criterion_main!(benches);
