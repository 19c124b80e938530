// benches/throughput.rs
//! Container and raw CTR throughput benchmarks.

use acrypt::consts::DEFAULT_BUFFER_SIZE;
use acrypt::{ctr_transform, decrypt_file, derive_key, encrypt_file, expand_key, HashKind};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_ctr(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctr_transform");
    let key = derive_key(b"benchmark-password");
    let schedule = expand_key(&key);

    for &size in &[4 * KB, 64 * KB, MB] {
        let mut data = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut counter = [0u8; 16];
                ctr_transform(&schedule, &mut counter, black_box(&mut data));
            })
        });
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let key = derive_key(b"benchmark-password");

    for &size in &[64 * KB, MB, 10 * MB] {
        let input = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut container = Vec::with_capacity(size + 80);
                encrypt_file(
                    &key,
                    Cursor::new(&input),
                    &mut container,
                    HashKind::Sha1,
                    DEFAULT_BUFFER_SIZE,
                )
                .unwrap();

                let mut plaintext = Vec::with_capacity(size);
                decrypt_file(
                    &key,
                    Cursor::new(&container),
                    &mut plaintext,
                    HashKind::Sha1,
                    DEFAULT_BUFFER_SIZE,
                )
                .unwrap();
                black_box(plaintext);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ctr, bench_roundtrip);
criterion_main!(benches);
