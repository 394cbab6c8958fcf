//! Benchmarks for conversion throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use kanaco_core::Converter;
use std::hint::black_box;

/// Generate mixed Japanese/ASCII text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "ﾃﾞｰﾀﾍﾞｰｽの設定ファイル（ｖｅｒ．２）を確認してください。Version 3.1 ﾊﾟｽﾜｰﾄﾞ　変更\n";
    let repetitions = (size_kb * 1024) / base_text.len() + 1;
    base_text.repeat(repetitions)
}

fn benchmark_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_modes");
    let text = generate_test_text(256);

    group.throughput(Throughput::Bytes(text.len() as u64));
    for mode in ["", "rns", "KV", "aKS", "hc", "rnaskhcRNASKHC"] {
        let converter = Converter::new(mode);
        let label = if mode.is_empty() { "identity" } else { mode };
        group.bench_function(label, |b| {
            b.iter(|| converter.convert_bytes(black_box(text.as_bytes())));
        });
    }

    group.finish();
}

fn benchmark_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_sizes");
    let converter = Converter::new("rnaK");

    for size_kb in [1, 64, 1024] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size_kb}KB"), |b| {
            b.iter(|| converter.convert_bytes(black_box(text.as_bytes())));
        });
    }

    group.finish();
}

fn benchmark_mode_parsing(c: &mut Criterion) {
    c.bench_function("mode_parse", |b| {
        b.iter(|| Converter::new(black_box("rnaskhcRNASKHC")));
    });
}

criterion_group!(
    benches,
    benchmark_modes,
    benchmark_sizes,
    benchmark_mode_parsing
);
criterion_main!(benches);
