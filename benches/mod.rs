use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    shell::tokenizer::bench_tokenize,
    shell::interpreter::bench_dispatch,
    shell::interpreter::bench_help
);
criterion_main!(benches);
