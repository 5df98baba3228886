//! crates/md5-engine/benches/throughput.rs
//!
//! Benchmarks for MD5 digest throughput.
//!
//! Run with: `cargo bench -p md5-engine`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use md5_engine::{Md5, digest, digest_batch};

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark one-shot digests for different input sizes.
fn bench_md5_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_one_shot");

    for size in [64, 512, 4096, 65536, 1 << 20] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| black_box(digest(black_box(data))));
        });
    }

    group.finish();
}

/// Benchmark streaming updates with chunk sizes that do not align to blocks.
fn bench_md5_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_streaming");

    let data = generate_random_data(1 << 20);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [1, 37, 64, 1000, 8192] {
        group.bench_with_input(BenchmarkId::new("update", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = Md5::new();
                for part in data.chunks(chunk) {
                    hasher.update(black_box(part));
                }
                black_box(hasher.finalize())
            });
        });
    }

    group.finish();
}

/// Benchmark batch hashing of many small independent inputs.
fn bench_md5_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_batch");

    for count in [16, 256, 4096] {
        let inputs: Vec<Vec<u8>> = (0..count).map(|_| generate_random_data(700)).collect();

        group.throughput(Throughput::Bytes((count * 700) as u64));
        group.bench_with_input(BenchmarkId::new("digest_batch", count), &inputs, |b, inputs| {
            b.iter(|| black_box(digest_batch(black_box(inputs))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_md5_one_shot, bench_md5_streaming, bench_md5_batch);

criterion_main!(benches);
