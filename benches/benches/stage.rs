// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use driftboard_stage::{ElementSpec, InputEvent, Phase, Stage, StageConfig};
use driftboard_view::{Camera, CameraConfig};
use kurbo::{Point, Size};

const VIEWPORT: Size = Size::new(1440.0, 900.0);
const FRAME_MS: f64 = 1000.0 / 60.0;

fn build_stage(elements: u32) -> Stage {
    let specs = (0..elements).map(|i| ElementSpec::new(i, format!("project-{}", i % 8)));
    Stage::new(StageConfig::pointer(), VIEWPORT, specs, 0xD81F_7B0A_0000_0001)
        .expect("default config is valid")
}

fn bench_camera_tick(c: &mut Criterion) {
    c.bench_function("camera_tick_with_momentum", |b| {
        b.iter_batched(
            || {
                let mut camera = Camera::new(VIEWPORT, CameraConfig::default());
                camera.push_wheel(-600.0, Point::new(300.0, 200.0));
                camera
            },
            |mut camera| {
                for _ in 0..120 {
                    black_box(camera.tick());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_idle_frame");
    for count in [32_u32, 256] {
        let mut stage = build_stage(count);
        let mut now = 0.0;
        group.bench_function(format!("tick+frame(n={count})"), |b| {
            b.iter(|| {
                now += FRAME_MS;
                stage.tick(now);
                black_box(stage.frame());
            });
        });
    }
    group.finish();
}

fn bench_full_transition(c: &mut Criterion) {
    c.bench_function("activate_to_focused(n=256)", |b| {
        b.iter_batched(
            || build_stage(256),
            |mut stage| {
                stage.handle(InputEvent::Click {
                    element: driftboard_stage::ElementId(3),
                });
                let mut now = 0.0;
                while stage.phase() != Phase::Focused {
                    now += FRAME_MS;
                    stage.tick(now);
                }
                black_box(stage.arrangement().len());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_camera_tick,
    bench_idle_frame,
    bench_full_transition
);
criterion_main!(benches);
