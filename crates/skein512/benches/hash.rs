//! Skein-512 benchmarks
//!
//! Run: `cargo bench -p skein512`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p skein512`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use skein512::{Digest as _, Skein512};

fn bench_skein512(c: &mut Criterion) {
  let mut group = c.benchmark_group("skein512");

  for size in [64, 256, 1024, 4096, 16384, 65536, 1048576] {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| Skein512::digest(core::hint::black_box(data)));
    });
  }

  group.finish();
}

fn bench_skein512_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("skein512_streaming");

  for chunk in [64usize, 1024, 8192] {
    let data = vec![0u8; 65536];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_with_input(BenchmarkId::from_parameter(chunk), &data, |b, data| {
      b.iter(|| {
        let mut h = Skein512::new();
        for part in data.chunks(chunk) {
          h.update(part);
        }
        core::hint::black_box(h.finalize())
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_skein512, bench_skein512_streaming);
criterion_main!(benches);
