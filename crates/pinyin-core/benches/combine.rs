use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pinyin_core::{BuiltinLookup, OutputMode, ReadingCombiner, TableLookup};

fn polyphonic_table() -> TableLookup {
    [
        ('长', vec!["chang".to_string(), "zhang".to_string()]),
        ('行', vec!["xing".to_string(), "hang".to_string()]),
        ('重', vec!["zhong".to_string(), "chong".to_string()]),
        ('和', vec!["he".to_string(), "huo".to_string(), "hu".to_string()]),
        ('乐', vec!["le".to_string(), "yue".to_string()]),
    ]
    .into_iter()
    .collect()
}

fn bench_table(c: &mut Criterion) {
    let combiner = ReadingCombiner::new(Arc::new(polyphonic_table()));
    let mut group = c.benchmark_group("combine_table");
    for word in ["长行", "长行重", "长行重和乐", "长行重和乐长行重"] {
        group.bench_with_input(BenchmarkId::new("both", word), word, |b, w| {
            b.iter(|| combiner.readings(w, OutputMode::Both))
        });
    }
    group.finish();
}

fn bench_builtin(c: &mut Criterion) {
    let combiner = ReadingCombiner::new(Arc::new(BuiltinLookup::new()));
    let capped = ReadingCombiner::new(Arc::new(BuiltinLookup::new())).with_max_readings(Some(256));
    let mut group = c.benchmark_group("combine_builtin");
    for word in ["中华人民共和国", "重庆银行行长"] {
        group.bench_with_input(BenchmarkId::new("full", word), word, |b, w| {
            b.iter(|| combiner.full_readings(w))
        });
        group.bench_with_input(BenchmarkId::new("full_capped", word), word, |b, w| {
            b.iter(|| capped.full_readings(w))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table, bench_builtin);
criterion_main!(benches);
