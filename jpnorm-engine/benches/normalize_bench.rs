//! Benchmarks for the normalization pass and the repeat shortener
//!
//! Run with: cargo bench -p jpnorm-engine

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use jpnorm_engine::{DedupOptions, NormalizeOptions, normalize, normalize_for_dedup, shorten_repeat};

const SAMPLE: &str = "ﾜｶﾞﾊｲは㈱である.  ㈴ＭＡＥはまだ迺　　　ＰＲＭＬ　　副　読　本　　　\
                      長音短縮ウェーーーーイ チルダ削除ウェ~∼∾〜〰～イ いろんなハイフン˗֊‐‑‒–⁃⁻₋−";

fn corpus(copies: usize) -> String {
    SAMPLE.repeat(copies)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for copies in [1, 64, 1024] {
        let text = corpus(copies);
        group.throughput(Throughput::Bytes(text.len() as u64));

        let defaults = NormalizeOptions::default();
        group.bench_function(format!("default_x{copies}"), |b| {
            b.iter(|| normalize(black_box(&text), &defaults).unwrap())
        });

        let dedup = DedupOptions::default();
        group.bench_function(format!("dedup_x{copies}"), |b| {
            b.iter(|| normalize_for_dedup(black_box(&text), &dedup).unwrap())
        });
    }

    group.finish();
}

fn bench_shorten_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("shorten_repeat");

    let runs = "かわいいいいいいいいい無駄無駄無駄無駄ァ".repeat(256);
    group.bench_function("runs_t1_m8", |b| {
        b.iter(|| shorten_repeat(black_box(&runs), 1, 8))
    });

    let plain = corpus(64);
    group.bench_function("no_runs_t8_m8", |b| {
        b.iter(|| shorten_repeat(black_box(&plain), 8, 8))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_shorten_repeat);
criterion_main!(benches);
