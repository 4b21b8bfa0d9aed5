use criterion::{BatchSize, Criterion, Throughput};
use libcli::shell::{MAX_LINE_LEN, QuotePolicy, tokenize};
use std::hint::black_box;

const LINES: [(&str, &str); 4] = [
    ("bare", "status"),
    ("args", "conf set mqtt_endpoint broker.local 1883"),
    ("quoted", "set key \"hello world\" \"a \\\"b\\\" c\""),
    ("padded", "   \t set \t  a   b \t c   d   e   f  \r\n"),
];

fn line_of(text: &str) -> [u8; MAX_LINE_LEN] {
    let mut line = [0u8; MAX_LINE_LEN];
    line[..text.len()].copy_from_slice(text.as_bytes());
    line
}

pub fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for (name, text) in LINES {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || line_of(text),
                |line| {
                    let tokens = tokenize(&mut line[..text.len()], QuotePolicy::Lenient)
                        .expect("Failed to tokenize");
                    black_box(tokens.argc());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}
