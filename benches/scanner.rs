use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gemtext_scanner::Scanner;
use std::hint::black_box;
use std::io::{BufRead, BufReader};

const EXAMPLE: &[u8] = include_bytes!("../testdata/example.gmi");

fn document(copies: usize) -> Vec<u8> {
    EXAMPLE.repeat(copies)
}

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    for copies in [1, 100, 1000] {
        let input = document(copies);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("classify", copies), &input, |b, input| {
            b.iter(|| {
                let mut scanner = Scanner::new(&input[..]);
                while scanner.advance() {
                    black_box(scanner.line());
                }
            });
        });

        // Plain line splitting, for comparison.
        group.bench_with_input(BenchmarkId::new("split_lines", copies), &input, |b, input| {
            b.iter(|| {
                let mut reader = BufReader::new(&input[..]);
                let mut line = Vec::new();
                while reader.read_until(b'\n', &mut line).unwrap_or(0) > 0 {
                    black_box(&line);
                    line.clear();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
