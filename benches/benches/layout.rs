// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use driftboard_layout::float::{FloatConfig, FloatField, FloatingElement};
use driftboard_layout::spiral::{SpiralConfig, SpiralFrame, spiral_layout};
use kurbo::{Point, Size, Vec2};

const VIEWPORT: Size = Size::new(1440.0, 900.0);

fn bench_spiral(c: &mut Criterion) {
    let config = SpiralConfig::default();
    let frame = SpiralFrame {
        center: Point::new(-340.0, 0.0),
        max_radius: config.max_radius(VIEWPORT, 1.0),
    };

    let mut group = c.benchmark_group("spiral_layout");
    for count in [1_usize, 14, 50, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let slots = spiral_layout(black_box(count), &config, frame);
                black_box(slots.len());
            });
        });
    }
    group.finish();
}

fn bench_float_step(c: &mut Criterion) {
    let field = FloatField::new(VIEWPORT, FloatConfig::default());
    let roam = field.roam();

    let mut group = c.benchmark_group("float_step");
    for count in [64_usize, 1_024] {
        // Evenly spread over the roaming rectangle, all heading diagonally.
        let mut elements: Vec<_> = (0..count)
            .map(|i| {
                let t = i as f64 / count as f64;
                FloatingElement {
                    velocity: Vec2::new(0.06, -0.04),
                    ..FloatingElement::at(Point::new(
                        roam.x0 + roam.width() * t,
                        roam.y0 + roam.height() * (1.0 - t),
                    ))
                }
            })
            .collect();
        group.bench_function(format!("step(n={count})"), |b| {
            b.iter(|| {
                field.step(elements.iter_mut());
                black_box(elements[0].position);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spiral, bench_float_step);
criterion_main!(benches);
