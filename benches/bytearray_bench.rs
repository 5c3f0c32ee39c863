//! Benchmarks for bytearray reads and rendering

use bytearray_ext::{ByteArray, IntWidth, Signedness};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn mixed_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7) as u8).collect()
}

/// Benchmark the debug rendering for varying buffer sizes
fn bench_tostr(c: &mut Criterion) {
    let mut group = c.benchmark_group("tostr");

    for &size in &[16, 256, 4096] {
        let ba = ByteArray::from_bytes(&mixed_bytes(size));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("{}_bytes", size), |b| {
            b.iter(|| {
                let rendered = ba.to_debug_string();
                black_box(rendered)
            })
        });
    }

    group.finish();
}

/// Benchmark the typed integer read path
fn bench_get_int(c: &mut Criterion) {
    let ba = ByteArray::from_bytes(&mixed_bytes(4096));

    c.bench_function("get_u32_sweep", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for offset in 0..(4096 - 4) {
                sum += ba
                    .get_int(offset as i64, IntWidth::W32, Signedness::Unsigned)
                    .unwrap();
            }
            black_box(sum)
        })
    });
}

/// Benchmark concatenation
fn bench_concat(c: &mut Criterion) {
    let left = ByteArray::from_bytes(&mixed_bytes(1024));
    let right = ByteArray::from_bytes(&mixed_bytes(1024));

    c.bench_function("concat_1k_1k", |b| {
        b.iter(|| {
            let joined = left.concat(&right);
            black_box(joined)
        })
    });
}

criterion_group!(benches, bench_tostr, bench_get_int, bench_concat);
criterion_main!(benches);
