use criterion::{criterion_group, criterion_main, Criterion};

use lipi_engine::engine::transliterate;
use lipi_engine::table::RuleTable;

fn bench_transliterate(c: &mut Criterion) {
    let table = RuleTable::builtin();
    let devanagari = "नमस्ते दुनिया यह एक लम्बा वाक्य है ".repeat(16);
    let mixed = "order १२३ for नमस्ते and plain text ".repeat(16);
    let ascii = "plain ascii text passes through unchanged ".repeat(16);

    c.bench_function("transliterate_devanagari", |b| {
        b.iter(|| transliterate(&devanagari, table))
    });
    c.bench_function("transliterate_mixed", |b| {
        b.iter(|| transliterate(&mixed, table))
    });
    c.bench_function("transliterate_ascii_passthrough", |b| {
        b.iter(|| transliterate(&ascii, table))
    });
}

fn bench_table_build(c: &mut Criterion) {
    let rules: Vec<(String, String)> = RuleTable::builtin()
        .rules()
        .iter()
        .cloned()
        .collect();

    c.bench_function("table_build_from_pairs", |b| {
        b.iter(|| RuleTable::from_pairs(rules.clone()).unwrap())
    });
}

criterion_group!(benches, bench_transliterate, bench_table_build);
criterion_main!(benches);
