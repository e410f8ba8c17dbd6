// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless tour of the canvas.
//!
//! Zooms with the wheel, pans with a drag, focuses a project, drags one of its
//! images, and escapes back to the floating canvas, printing the frame after
//! each step.
//!
//! Run:
//! - `cargo run -p driftboard_demos --example canvas_tour`

use driftboard_demos::{describe, portfolio, run_frames, run_until};
use driftboard_stage::{ElementId, InputEvent, Key, Phase, Stage, StageConfig, StageEvent};
use kurbo::{Point, Size};

fn main() {
    let viewport = Size::new(1440.0, 900.0);
    let mut stage = match Stage::new(StageConfig::pointer(), viewport, portfolio(), 2025) {
        Ok(stage) => stage,
        Err(err) => {
            eprintln!("cannot build stage: {err}");
            return;
        }
    };
    let mut now = 0.0;

    println!("== startup");
    print!("{}", describe(&stage.frame(), 3));

    let pointer = Point::new(900.0, 300.0);
    stage.handle(InputEvent::PointerMove { position: pointer });
    for _ in 0..4 {
        stage.handle(InputEvent::Wheel {
            position: pointer,
            delta_y: -90.0,
        });
        run_frames(&mut stage, &mut now, 2);
    }
    run_frames(&mut stage, &mut now, 120);
    println!("== after wheel zoom at {pointer:?}");
    print!("{}", describe(&stage.frame(), 3));

    stage.handle(InputEvent::press(Point::new(200.0, 700.0), None));
    stage.handle(InputEvent::PointerMove {
        position: Point::new(320.0, 640.0),
    });
    stage.handle(InputEvent::PointerUp {
        position: Point::new(320.0, 640.0),
    });
    run_frames(&mut stage, &mut now, 90);
    println!("== after drag pan");
    print!("{}", describe(&stage.frame(), 3));

    stage.handle(InputEvent::Click {
        element: ElementId(0),
    });
    let frames = run_until(&mut stage, &mut now, Phase::Focused);
    println!("== focused after {frames} frames");
    print!("{}", describe(&stage.frame(), 5));

    if let Some(top) = stage.arrangement().first().copied() {
        let grab = Point::new(432.0, 450.0);
        stage.handle(InputEvent::press(grab, Some(top.element)));
        stage.handle(InputEvent::PointerMove {
            position: grab + (60.0, -40.0),
        });
        stage.handle(InputEvent::PointerUp { position: grab });
        println!("== dragged #{}", top.element.0);
        print!("{}", describe(&stage.frame(), 2));
    }

    stage.handle(InputEvent::Key(Key::Escape));
    run_frames(&mut stage, &mut now, 180);
    println!("== back to the floating canvas");
    print!("{}", describe(&stage.frame(), 3));

    println!("== events");
    for event in stage.take_events() {
        match event {
            StageEvent::PhaseChanged { from, to } => println!("  {from:?} -> {to:?}"),
            StageEvent::ShowDescription(project) => println!("  show description: {project}"),
            StageEvent::HideDescriptions => println!("  hide descriptions"),
        }
    }
}
