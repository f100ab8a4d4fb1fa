//! Lookup-cost benchmarks comparing the two strategies on the embedded
//! corpus.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hix::corpus;
use hix::index::build::reindex;
use hix::index::types::IndexConfig;
use hix::query::executor::Executor;
use hix::session::Session;

fn bench_lookups(c: &mut Criterion) {
    let words = corpus::embedded();
    let first = words.first().unwrap().clone();
    let middle = words[words.len() / 2].clone();
    let last = words.last().unwrap().clone();
    let missing = "zzzznotaword".to_string();

    let session = Session::build(words, &IndexConfig::with_page_size(10)).unwrap();
    let executor = Executor::new(&session);

    let mut group = c.benchmark_group("lookup");
    let probes = [
        ("first", &first),
        ("middle", &middle),
        ("last", &last),
        ("missing", &missing),
    ];
    for (name, word) in probes {
        group.bench_function(format!("table_scan_{name}"), |b| {
            b.iter(|| executor.table_scan(black_box(word)))
        });
        group.bench_function(format!("hash_index_{name}"), |b| {
            b.iter(|| executor.hash_lookup(black_box(word)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let words = corpus::embedded();
    let config = IndexConfig::with_page_size(10);
    c.bench_function("reindex_embedded_corpus", |b| {
        b.iter(|| reindex(black_box(&words), &config).unwrap())
    });
}

criterion_group!(benches, bench_lookups, bench_build);
criterion_main!(benches);
