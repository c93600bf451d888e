// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stepwise::algorithm::{advance, distance};
use stepwise::category::{BidirectionalTag, ForwardTag};
use stepwise::position::restricted::Restricted;
use stepwise::reverse::ReversePosition;

const SIZES: [usize; 4] = [16, 256, 4096, 65536];

fn make_data(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for &len in &SIZES {
        let data = make_data(len);
        let first = data.as_ptr();
        let last = first.wrapping_add(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("random_access", len), &len, |b, _| {
            b.iter(|| distance(black_box(first), black_box(last)))
        });

        let slow_first = Restricted::<ForwardTag, _>::new(first);
        let slow_last = Restricted::<ForwardTag, _>::new(last);
        group.bench_with_input(BenchmarkId::new("forward", len), &len, |b, _| {
            b.iter(|| distance(black_box(slow_first), black_box(slow_last)))
        });

        let rfirst = ReversePosition::new(last);
        let rlast = ReversePosition::new(first);
        group.bench_with_input(BenchmarkId::new("reversed", len), &len, |b, _| {
            b.iter(|| distance(black_box(rfirst), black_box(rlast)))
        });
    }

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for &len in &SIZES {
        let data = make_data(len);
        let first = data.as_ptr();
        let n = len as isize;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("random_access", len), &n, |b, &n| {
            b.iter(|| {
                let mut p = black_box(first);
                advance(&mut p, black_box(n));
                p
            })
        });

        group.bench_with_input(BenchmarkId::new("bidirectional", len), &n, |b, &n| {
            b.iter(|| {
                let mut p = Restricted::<BidirectionalTag, _>::new(black_box(first));
                advance(&mut p, black_box(n));
                p
            })
        });

        group.bench_with_input(BenchmarkId::new("forward", len), &n, |b, &n| {
            b.iter(|| {
                let mut p = Restricted::<ForwardTag, _>::new(black_box(first));
                advance(&mut p, black_box(n));
                p
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_advance);
criterion_main!(benches);
