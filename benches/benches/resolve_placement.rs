// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use pergola_placement::{PlacementConfig, Side, resolve};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors spread across the full viewport, so most placements fit as-is.
fn gen_interior_anchors(count: usize, viewport: Size, rng: &mut Rng) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * (viewport.width - 120.0);
        let y = rng.next_f64() * (viewport.height - 60.0);
        out.push(Rect::new(x, y, x + 40.0, y + 20.0));
    }
    out
}

/// Anchors hugging the viewport edges, so nearly every placement flips
/// and/or clamps.
fn gen_edge_anchors(count: usize, viewport: Size, rng: &mut Rng) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let t = rng.next_f64();
        let r = match i % 4 {
            0 => Rect::new(t * viewport.width, 0.0, t * viewport.width + 40.0, 20.0),
            1 => Rect::new(
                t * viewport.width,
                viewport.height - 20.0,
                t * viewport.width + 40.0,
                viewport.height,
            ),
            2 => Rect::new(0.0, t * viewport.height, 40.0, t * viewport.height + 20.0),
            _ => Rect::new(
                viewport.width - 40.0,
                t * viewport.height,
                viewport.width,
                t * viewport.height + 20.0,
            ),
        };
        out.push(r);
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let viewport = Size::new(1920.0, 1080.0);
    let overlay = Size::new(280.0, 96.0);
    let config = PlacementConfig::default();
    let count = 4096_usize;

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(count as u64));

    let mut rng = Rng::new(0x5eed_1);
    let interior = gen_interior_anchors(count, viewport, &mut rng);
    group.bench_function("interior_fits", |b| {
        b.iter(|| {
            for (i, &anchor) in interior.iter().enumerate() {
                let side = Side::ALL[i % 4];
                black_box(resolve(anchor, overlay, viewport, side, &config));
            }
        });
    });

    let mut rng = Rng::new(0x5eed_2);
    let edges = gen_edge_anchors(count, viewport, &mut rng);
    group.bench_function("edge_flip_clamp", |b| {
        b.iter(|| {
            for (i, &anchor) in edges.iter().enumerate() {
                let side = Side::ALL[i % 4];
                black_box(resolve(anchor, overlay, viewport, side, &config));
            }
        });
    });

    // Oversized overlay: both clamp ranges invert and pin to the margin.
    group.bench_function("oversized_pin", |b| {
        let small = Size::new(240.0, 100.0);
        b.iter(|| {
            for &anchor in interior.iter() {
                black_box(resolve(anchor, overlay, small, Side::Top, &config));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
