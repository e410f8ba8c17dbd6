// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch input with a trace log.
//!
//! Pinches, lifts one finger early, and keeps panning with it. The trace shows
//! the moves swallowed by the post-pinch lock and the first ones let through.
//!
//! Run:
//! - `cargo run -p driftboard_demos --example touch_trace`

use driftboard_demos::{FRAME_MS, portfolio};
use driftboard_stage::{InputEvent, Stage, StageConfig, TraceLog, TraceRecord};
use kurbo::{Point, Size};

fn main() {
    let viewport = Size::new(390.0, 844.0);
    let mut stage = match Stage::new(StageConfig::touch(), viewport, portfolio(), 7) {
        Ok(stage) => stage,
        Err(err) => {
            eprintln!("cannot build stage: {err}");
            return;
        }
    };
    let mut log = TraceLog::new();
    let mut now = 0.0;

    let touches = |points: &[(f64, f64)]| -> driftboard_stage::TouchPoints {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    };

    stage.handle_with_trace(
        InputEvent::TouchStart {
            touches: touches(&[(150.0, 400.0), (240.0, 400.0)]),
        },
        &mut log,
    );
    for step in 1..=10 {
        let spread = 45.0 + 8.0 * f64::from(step);
        stage.handle_with_trace(
            InputEvent::TouchMove {
                touches: touches(&[(195.0 - spread, 400.0), (195.0 + spread, 400.0)]),
            },
            &mut log,
        );
        now += FRAME_MS;
        stage.tick_with_trace(now, &mut log);
    }
    println!(
        "pinched to scale {:.3}",
        stage.camera().current().scale
    );

    stage.handle_with_trace(
        InputEvent::TouchEnd {
            touches: touches(&[(280.0, 400.0)]),
        },
        &mut log,
    );
    for step in 0..8 {
        let x = 280.0 - 6.0 * f64::from(step);
        stage.handle_with_trace(
            InputEvent::TouchMove {
                touches: touches(&[(x, 400.0)]),
            },
            &mut log,
        );
        println!(
            "t={now:>6.1}ms pinch lock={} target origin={:?}",
            stage.is_pinch_locked(),
            stage.camera().target().origin
        );
        now += FRAME_MS;
        stage.tick_with_trace(now, &mut log);
    }

    println!("trace:");
    for record in log.records() {
        match record {
            TraceRecord::Dropped { input, reason } => println!("  dropped {input:?}: {reason:?}"),
            TraceRecord::Settled(camera) => println!("  settled at {camera:?}"),
            other => println!("  {other:?}"),
        }
    }
}
