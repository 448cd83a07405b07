//! Criterion benchmarks for the plain and unique heaps
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//! cargo bench --bench heap_perf -- 'update/2\^12'
//! ```
//!
//! Each group runs at sizes 2^8, 2^12 and 2^16 so the O(log n) growth of the
//! sift engine is visible, and so is the extra reverse-index cost of the
//! unique heap.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_sift_heaps::{min_heap, min_unique};
use std::collections::BinaryHeap;
use std::hint::black_box;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }
}

const SIZES: [u32; 3] = [8, 12, 16];

fn values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() % 1_000_000).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for log in SIZES {
        let n = 1usize << log;
        let data = values(n, 7);
        let id = format!("2^{}", log);

        group.bench_with_input(BenchmarkId::new("plain", &id), &data, |b, data| {
            b.iter(|| {
                let mut heap = min_heap();
                for &v in data {
                    heap.insert(v);
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("unique", &id), &data, |b, data| {
            b.iter(|| {
                let mut heap = min_unique();
                for (i, &v) in data.iter().enumerate() {
                    heap.insert(v, i as u32);
                }
                while let Some(entry) = heap.pop() {
                    black_box(entry);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std", &id), &data, |b, data| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in data {
                    heap.push(std::cmp::Reverse(v));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for log in SIZES {
        let n = 1usize << log;
        let data = values(n, 11);
        let targets = values(n, 13);
        let id = format!("2^{}", log);

        group.bench_with_input(BenchmarkId::new("unique", &id), &n, |b, &n| {
            let mut heap = min_unique();
            for (i, &v) in data.iter().enumerate() {
                heap.insert(v, i as u32);
            }
            let mut k = 0usize;
            b.iter(|| {
                let payload = (targets[k % n] as usize % n) as u32;
                heap.update(&payload, targets[(k + 1) % n]).unwrap();
                k += 1;
            })
        });

        group.bench_with_input(BenchmarkId::new("plain", &id), &n, |b, &n| {
            let mut heap = min_heap();
            heap.extend(data.iter().copied());
            let mut k = 0usize;
            b.iter(|| {
                let pos = targets[k % n] as usize % n;
                heap.update(pos, targets[(k + 1) % n]).unwrap();
                k += 1;
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_update);
criterion_main!(benches);
