use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use fqtally::tally_reader;

fn synthetic_reads(n: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..n {
        // Sequences repeat every 256 reads so the distinct count stays small
        data.extend_from_slice(
            format!("@read{}\nACGTACGTACGTACG{:02x}\n+\nIIIIIIIIIIIIIIIII\n", i, i % 256).as_bytes(),
        );
    }
    data
}

fn bench_tally(c: &mut Criterion) {
    let data = synthetic_reads(10_000);
    let mut group = c.benchmark_group("tally");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("10k_reads", |b| {
        b.iter(|| {
            let summary = tally_reader(Cursor::new(&data)).unwrap();
            assert_eq!(summary.read_count, 10_000);
            summary
        })
    });
    group.finish();
}

criterion_group!(benches, bench_tally);
criterion_main!(benches);
