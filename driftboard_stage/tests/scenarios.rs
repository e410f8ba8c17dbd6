// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a [`Stage`] driven by synthetic input.

use driftboard_stage::{
    CameraState, DropReason, ElementId, ElementSpec, InputEvent, InputKind, Key, Phase,
    PointerButton, ProjectId, Stage, StageConfig, StageEvent, TraceLog,
};
use kurbo::{Point, Size};

const FRAME_MS: f64 = 16.0;
const DESKTOP: Size = Size::new(1000.0, 800.0);

fn specs(groups: &[(&str, u32)]) -> Vec<ElementSpec> {
    let mut next = 0;
    let mut out = Vec::new();
    for &(project, count) in groups {
        for _ in 0..count {
            out.push(ElementSpec::new(next, project));
            next += 1;
        }
    }
    out
}

fn desktop_stage() -> Stage {
    Stage::new(
        StageConfig::pointer(),
        DESKTOP,
        specs(&[("alpha", 5), ("beta", 3)]),
        21,
    )
    .unwrap()
}

fn touch_stage() -> Stage {
    Stage::new(
        StageConfig::touch(),
        DESKTOP,
        specs(&[("alpha", 5), ("beta", 3)]),
        21,
    )
    .unwrap()
}

fn run_until(stage: &mut Stage, now: &mut f64, phase: Phase) {
    for _ in 0..1_000 {
        if stage.phase() == phase {
            return;
        }
        *now += FRAME_MS;
        stage.tick(*now);
    }
    panic!("stage never reached {phase:?}");
}

fn assert_close(a: Point, b: Point, tolerance: f64) {
    assert!(
        (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance,
        "{a:?} != {b:?}"
    );
}

fn assert_scale_in_range(stage: &Stage) {
    let config = stage.camera().config();
    for state in [stage.camera().current(), stage.camera().target()] {
        assert!(
            state.scale >= config.min_scale && state.scale <= config.max_scale,
            "scale {} outside [{}, {}]",
            state.scale,
            config.min_scale,
            config.max_scale
        );
    }
}

fn touches(points: &[(f64, f64)]) -> driftboard_stage::TouchPoints {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn scale_stays_in_range_under_mixed_pointer_input() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    let deltas = [-900.0, -900.0, 40.0, -2_000.0, 3_000.0, 5_000.0, -120.0, 800.0];
    for (i, &delta_y) in deltas.iter().cycle().take(120).enumerate() {
        let position = Point::new(100.0 + (i * 37 % 800) as f64, 50.0 + (i * 53 % 700) as f64);
        stage.handle(InputEvent::PointerMove { position });
        stage.handle(InputEvent::Wheel { position, delta_y });
        assert_scale_in_range(&stage);
        if i % 7 == 0 {
            stage.handle(InputEvent::press(position, None));
            stage.handle(InputEvent::PointerMove {
                position: position + (4_000.0, -4_000.0),
            });
            stage.handle(InputEvent::PointerUp { position });
        }
        now += FRAME_MS;
        stage.tick(now);
        assert_scale_in_range(&stage);
    }
}

#[test]
fn scale_stays_in_range_under_pinch_and_transition() {
    let mut stage = touch_stage();
    let mut now = 0.0;
    stage.handle(InputEvent::TouchStart {
        touches: touches(&[(490.0, 400.0), (510.0, 400.0)]),
    });
    for spread in [1.0, 5_000.0, 0.01, 300.0] {
        stage.handle(InputEvent::TouchMove {
            touches: touches(&[(500.0 - spread, 400.0), (500.0 + spread, 400.0)]),
        });
        assert_scale_in_range(&stage);
    }
    stage.handle(InputEvent::TouchEnd {
        touches: touches(&[]),
    });

    // The pulled-back scale lies below the touch minimum; it is clamped.
    stage.activate("beta".into());
    while stage.phase() != Phase::Focused {
        now += FRAME_MS;
        stage.tick(now);
        assert_scale_in_range(&stage);
    }
}

#[test]
fn wheel_zoom_keeps_world_point_under_pointer() {
    let mut stage = desktop_stage();
    let pointer = Point::new(300.0, 250.0);
    let before = stage.camera().current().screen_to_world(pointer);

    stage.handle(InputEvent::PointerMove { position: pointer });
    stage.handle(InputEvent::Wheel {
        position: pointer,
        delta_y: -100.0,
    });
    stage.tick(FRAME_MS);

    let current = stage.camera().current();
    assert!(current.scale > 1.0);
    assert_eq!(current, stage.camera().target());
    assert_close(current.screen_to_world(pointer), before, 1e-9);
}

#[test]
fn wheel_zoom_follows_the_pointer_while_momentum_decays() {
    let mut stage = desktop_stage();
    stage.handle(InputEvent::Wheel {
        position: Point::new(100.0, 100.0),
        delta_y: -400.0,
    });
    stage.tick(FRAME_MS);

    let pointer = Point::new(800.0, 600.0);
    stage.handle(InputEvent::PointerMove { position: pointer });
    assert_eq!(stage.camera().momentum().anchor(), pointer);
    let before = stage.camera().current().screen_to_world(pointer);
    let scale = stage.camera().current().scale;
    stage.tick(2.0 * FRAME_MS);

    let current = stage.camera().current();
    assert!(current.scale > scale);
    assert_eq!(current, stage.camera().target());
    assert_close(current.screen_to_world(pointer), before, 1e-9);
}

#[test]
fn pinch_keeps_world_point_under_midpoint() {
    let mut stage = touch_stage();
    let mid = Point::new(400.0, 300.0);
    let before = stage.camera().current().screen_to_world(mid);

    stage.handle(InputEvent::TouchStart {
        touches: touches(&[(350.0, 300.0), (450.0, 300.0)]),
    });
    stage.handle(InputEvent::TouchMove {
        touches: touches(&[(320.0, 300.0), (480.0, 300.0)]),
    });

    let current = stage.camera().current();
    assert!((current.scale - 1.6).abs() < 1e-12);
    assert_eq!(current, stage.camera().target());
    assert_close(current.screen_to_world(mid), before, 1e-9);
}

#[test]
fn transition_zooms_keep_their_anchors() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    let center = stage.camera().center();
    let focus = stage.config().transition.focus_anchor(DESKTOP);

    stage.activate("alpha".into());
    let under_center = stage.camera().current().screen_to_world(center);
    while stage.phase() == Phase::ZoomingOut {
        now += FRAME_MS;
        stage.tick(now);
        if stage.phase() == Phase::ZoomingOut {
            assert_close(stage.camera().current().screen_to_world(center), under_center, 1e-9);
        }
    }

    // The push-in ends at the camera home, zooming about the screen point
    // both ends of the move share.
    assert_eq!(stage.phase(), Phase::ZoomingIn);
    let home = CameraState::new(center, 1.0);
    let anchor = stage.camera().current().fixed_point(&home).unwrap();
    let under_anchor = stage.camera().current().screen_to_world(anchor);
    while stage.phase() == Phase::ZoomingIn {
        now += FRAME_MS;
        stage.tick(now);
        assert_close(stage.camera().current().screen_to_world(anchor), under_anchor, 1e-9);
    }

    assert_eq!(stage.phase(), Phase::Focused);
    assert_eq!(stage.camera().current().scale, 1.0);
    // The spiral is centered on the focus anchor once the push-in ends.
    let spiral_center = stage.arrangement()[0].position;
    assert_close(stage.camera().current().world_to_screen(spiral_center), focus, 1e-9);
}

#[test]
fn focused_group_holds_the_focus_anchor_after_panning_to_the_edge() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    let center = stage.camera().center();
    for _ in 0..20 {
        stage.handle(InputEvent::Wheel {
            position: center,
            delta_y: -2_000.0,
        });
        now += FRAME_MS;
        stage.tick(now);
    }
    stage.handle(InputEvent::press(center, None));
    stage.handle(InputEvent::PointerMove {
        position: Point::new(5_000.0, 400.0),
    });
    stage.handle(InputEvent::PointerUp {
        position: Point::new(5_000.0, 400.0),
    });
    for _ in 0..300 {
        now += FRAME_MS;
        stage.tick(now);
    }
    assert_eq!(stage.camera().current().scale, 2.0);
    assert_close(stage.camera().target().origin, Point::new(1_860.0, 400.0), 1e-9);

    stage.activate("alpha".into());
    run_until(&mut stage, &mut now, Phase::Focused);
    let focus = stage.config().transition.focus_anchor(DESKTOP);
    let spiral_center = stage.arrangement()[0].position;
    assert_close(stage.camera().current().world_to_screen(spiral_center), focus, 1e-9);

    for _ in 0..400 {
        now += FRAME_MS;
        stage.tick(now);
    }
    assert_eq!(stage.camera().current(), CameraState::new(center, 1.0));
    assert_eq!(stage.camera().current(), stage.camera().target());
    assert_close(stage.camera().current().world_to_screen(spiral_center), focus, 1e-9);
}

#[test]
fn arrangement_depends_only_on_group_size_and_view() {
    let arrange = |seed: u64| {
        let mut stage = Stage::new(
            StageConfig::pointer(),
            DESKTOP,
            specs(&[("alpha", 9), ("beta", 2)]),
            seed,
        )
        .unwrap();
        let mut now = 0.0;
        stage.activate("alpha".into());
        run_until(&mut stage, &mut now, Phase::Focused);
        stage.arrangement().to_vec()
    };
    let a = arrange(1);
    let b = arrange(2);
    assert_eq!(a.len(), 9);
    assert_eq!(a, b);
    for pair in a.windows(2) {
        assert!(pair[0].z_index > pair[1].z_index);
    }
}

#[test]
fn escape_right_after_activation_restores_everything() {
    let mut stage = desktop_stage();
    let homes: Vec<_> = stage.elements().map(|e| (e.id(), e.position())).collect();
    let snapshot = stage.camera().target();

    stage.activate("alpha".into());
    stage.handle(InputEvent::Key(Key::Escape));

    assert_eq!(stage.phase(), Phase::Idle);
    assert_eq!(stage.active_project(), None);
    assert_eq!(stage.camera().target(), snapshot);
    for (id, home) in homes {
        let element = stage.element(id).unwrap();
        assert_close(element.position(), home, 1e-9);
        assert!(element.is_floating());
        assert_eq!(element.visual().opacity, 1.0);
    }
}

#[test]
fn escape_after_focus_restores_homes_and_camera() {
    let mut stage = desktop_stage();
    let mut now = 0.0;

    // Drift and pan a little so the snapshot is not the initial state.
    stage.handle(InputEvent::press(Point::new(500.0, 400.0), None));
    stage.handle(InputEvent::PointerMove {
        position: Point::new(560.0, 430.0),
    });
    stage.handle(InputEvent::PointerUp {
        position: Point::new(560.0, 430.0),
    });
    for _ in 0..30 {
        now += FRAME_MS;
        stage.tick(now);
    }
    let snapshot = stage.camera().target();
    let homes: Vec<_> = stage.elements().map(|e| (e.id(), e.home())).collect();

    stage.activate("beta".into());
    assert_eq!(stage.stored_camera(), Some(snapshot));
    run_until(&mut stage, &mut now, Phase::Focused);

    assert!(stage.exit());
    assert_eq!(stage.camera().target(), snapshot);
    for (id, home) in homes {
        let element = stage.element(id).unwrap();
        assert_close(element.position(), home, 1e-9);
        assert_eq!(element.visual().width, 100.0);
        assert_eq!(element.visual().z_index, 1);
        assert_eq!(element.visual().opacity, 1.0);
    }
    assert!(!stage.exit());
}

#[test]
fn locked_transition_ignores_camera_input() {
    let mut stage = desktop_stage();
    stage.activate("alpha".into());
    assert!(stage.phase().is_locked());
    let target = stage.camera().target();

    let mut log = TraceLog::new();
    stage.handle_with_trace(
        InputEvent::Wheel {
            position: Point::new(200.0, 200.0),
            delta_y: -500.0,
        },
        &mut log,
    );
    stage.handle_with_trace(InputEvent::press(Point::new(100.0, 100.0), None), &mut log);
    stage.handle_with_trace(
        InputEvent::PointerMove {
            position: Point::new(900.0, 700.0),
        },
        &mut log,
    );

    assert_eq!(stage.camera().target(), target);
    assert_eq!(stage.camera().momentum().value(), 0.0);
    assert_eq!(
        log.drops().collect::<Vec<_>>(),
        vec![
            (InputKind::Wheel, DropReason::Locked),
            (InputKind::PointerDown, DropReason::Locked),
        ]
    );
}

#[test]
fn locked_transition_ignores_pinch() {
    let mut stage = touch_stage();
    stage.activate("alpha".into());
    let target = stage.camera().target();

    let mut log = TraceLog::new();
    stage.handle_with_trace(
        InputEvent::TouchStart {
            touches: touches(&[(100.0, 100.0), (200.0, 100.0)]),
        },
        &mut log,
    );
    stage.handle_with_trace(
        InputEvent::TouchMove {
            touches: touches(&[(0.0, 100.0), (300.0, 100.0)]),
        },
        &mut log,
    );
    stage.handle_with_trace(
        InputEvent::TouchMove {
            touches: touches(&[(50.0, 50.0)]),
        },
        &mut log,
    );

    assert_eq!(stage.camera().target(), target);
    assert!(log.drops().all(|(_, reason)| reason == DropReason::Locked));
    assert_eq!(log.drops().count(), 3);
}

#[test]
fn focused_group_ignores_canvas_navigation() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    stage.activate("alpha".into());
    run_until(&mut stage, &mut now, Phase::Focused);
    assert!(!stage.phase().is_locked());
    let target = stage.camera().target();

    let mut log = TraceLog::new();
    stage.handle_with_trace(
        InputEvent::Wheel {
            position: Point::new(10.0, 10.0),
            delta_y: -300.0,
        },
        &mut log,
    );
    stage.handle_with_trace(InputEvent::press(Point::new(10.0, 10.0), None), &mut log);
    assert_eq!(stage.camera().target(), target);
    assert!(
        log.drops()
            .all(|(_, reason)| reason == DropReason::GroupActive)
    );
    assert_eq!(log.drops().count(), 2);
}

#[test]
fn wheel_zoom_in_settles_within_limits() {
    let mut stage = desktop_stage();
    assert_eq!(
        stage.camera().target(),
        CameraState::new(Point::new(500.0, 400.0), 1.0)
    );
    let center = Point::new(500.0, 400.0);
    let mut now = 0.0;
    for _ in 0..5 {
        stage.handle(InputEvent::Wheel {
            position: center,
            delta_y: -100.0,
        });
        now += FRAME_MS;
        stage.tick(now);
    }
    let mut frames = 0;
    while stage.camera().momentum().value() != 0.0 {
        now += FRAME_MS;
        stage.tick(now);
        frames += 1;
        assert!(frames < 10_000, "momentum never decayed");
    }

    let scale = stage.camera().target().scale;
    assert!(scale > 1.0);
    assert!(scale <= 2.0);
    assert!(stage.camera().current().scale <= 2.0);
}

#[test]
fn fourteen_member_spiral_in_wide_viewport() {
    let viewport = Size::new(1200.0, 900.0);
    let mut stage = Stage::new(
        StageConfig::pointer(),
        viewport,
        specs(&[("big", 14), ("small", 3)]),
        5,
    )
    .unwrap();
    let spiral = stage.config().spiral;
    assert_eq!(spiral.density(14), 1.0);
    assert_eq!(spiral.spacing(14), 360.0);

    let mut now = 0.0;
    stage.activate("big".into());
    run_until(&mut stage, &mut now, Phase::Focused);

    let placements = stage.arrangement();
    assert_eq!(placements.len(), 14);
    let center = placements[0].position;
    let max_radius = spiral.max_radius(viewport, stage.config().transition.focus_scale);
    assert_eq!(max_radius, 300.0);
    assert!(center.distance(placements[13].position) <= max_radius + 1e-9);
    assert_eq!(placements[0].z_index, 2000);
    assert_eq!(placements[13].z_index, 1987);

    let focus = stage.config().transition.focus_anchor(viewport);
    assert_close(stage.camera().current().world_to_screen(center), focus, 1e-9);

    for placement in placements {
        let element = stage.element(placement.element).unwrap();
        assert_eq!(element.position(), placement.position);
        assert_eq!(element.visual().width, 320.0);
        assert!(!element.is_floating());
    }
}

#[test]
fn selecting_another_group_supersedes_the_transition() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    let snapshot = stage.camera().target();

    assert!(stage.select(ElementId(0)));
    let first = stage.generation();
    for _ in 0..10 {
        now += FRAME_MS;
        stage.tick(now);
    }
    stage.take_events();

    let mut log = TraceLog::new();
    stage.handle_with_trace(InputEvent::Click { element: ElementId(6) }, &mut log);
    assert_eq!(stage.active_project(), Some(&ProjectId::from("beta")));
    assert_eq!(stage.phase(), Phase::ZoomingOut);
    assert!(stage.generation() > first);
    assert_eq!(stage.stored_camera(), Some(snapshot));
    assert_eq!(
        log.phases().collect::<Vec<_>>(),
        vec![Phase::Restoring, Phase::Idle, Phase::ZoomingOut]
    );
    assert!(stage.take_events().contains(&StageEvent::HideDescriptions));

    run_until(&mut stage, &mut now, Phase::Focused);
    assert_eq!(stage.arrangement().len(), 3);
    assert!(
        stage
            .arrangement()
            .iter()
            .all(|p| stage.element(p.element).unwrap().project().as_str() == "beta")
    );

    // Selecting the active group again changes nothing.
    let generation = stage.generation();
    assert!(!stage.select(ElementId(7)));
    assert_eq!(stage.generation(), generation);
    assert_eq!(stage.phase(), Phase::Focused);
}

#[test]
fn empty_group_still_completes() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    stage.activate("nobody".into());
    run_until(&mut stage, &mut now, Phase::Focused);
    assert!(stage.arrangement().is_empty());
    assert!(
        stage
            .take_events()
            .contains(&StageEvent::ShowDescription("nobody".into()))
    );
    for element in stage.elements() {
        assert_eq!(element.visual().opacity, 0.15);
    }
}

#[test]
fn description_events_follow_the_phases() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    stage.activate("alpha".into());
    run_until(&mut stage, &mut now, Phase::Focused);
    stage.handle(InputEvent::Key(Key::Escape));

    let changed = |from, to| StageEvent::PhaseChanged { from, to };
    assert_eq!(
        stage.take_events(),
        vec![
            changed(Phase::Idle, Phase::ZoomingOut),
            changed(Phase::ZoomingOut, Phase::Arranging),
            changed(Phase::Arranging, Phase::ZoomingIn),
            changed(Phase::ZoomingIn, Phase::Focused),
            StageEvent::ShowDescription("alpha".into()),
            changed(Phase::Focused, Phase::Restoring),
            StageEvent::HideDescriptions,
            changed(Phase::Restoring, Phase::Idle),
        ]
    );
    assert!(stage.take_events().is_empty());
}

#[test]
fn zero_length_tweens_finish_on_the_next_tick() {
    let mut config = StageConfig::pointer();
    config.transition.zoom_out_ms = 0.0;
    config.transition.zoom_in_ms = 0.0;
    let mut stage = Stage::new(config, DESKTOP, specs(&[("alpha", 4)]), 3).unwrap();
    stage.activate("alpha".into());
    stage.tick(FRAME_MS);
    assert_eq!(stage.phase(), Phase::Focused);
    assert_eq!(stage.arrangement().len(), 4);
}

#[test]
fn members_can_be_dragged_in_a_focused_group() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    stage.activate("alpha".into());
    run_until(&mut stage, &mut now, Phase::Focused);

    let dragged = stage.arrangement()[2].element;
    let start = stage.element(dragged).unwrap().position();
    let bystander = stage.arrangement()[1].element;
    let bystander_at = stage.element(bystander).unwrap().position();
    let target = stage.camera().target();
    let scale = stage.camera().current().scale;

    stage.handle(InputEvent::press(Point::new(100.0, 100.0), Some(dragged)));
    assert_eq!(stage.element(dragged).unwrap().visual().z_index, 3000);
    stage.handle(InputEvent::PointerMove {
        position: Point::new(150.0, 120.0),
    });
    let moved = stage.element(dragged).unwrap().position();
    assert_close(moved, start + (50.0 / scale, 20.0 / scale), 1e-9);
    assert_eq!(stage.element(bystander).unwrap().position(), bystander_at);
    assert_eq!(stage.camera().target(), target);

    stage.handle(InputEvent::PointerUp {
        position: Point::new(150.0, 120.0),
    });
    stage.handle(InputEvent::PointerMove {
        position: Point::new(400.0, 400.0),
    });
    assert_eq!(stage.element(dragged).unwrap().position(), moved);
}

#[test]
fn non_members_and_secondary_buttons_do_not_drag() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    stage.activate("alpha".into());
    run_until(&mut stage, &mut now, Phase::Focused);

    let outsider = ElementId(6);
    let at = stage.element(outsider).unwrap().position();
    stage.handle(InputEvent::press(Point::ZERO, Some(outsider)));
    stage.handle(InputEvent::PointerMove {
        position: Point::new(80.0, 80.0),
    });
    assert_eq!(stage.element(outsider).unwrap().position(), at);

    let member = stage.arrangement()[0].element;
    let at = stage.element(member).unwrap().position();
    stage.handle(InputEvent::PointerDown {
        position: Point::ZERO,
        button: PointerButton::Other,
        hit: Some(member),
    });
    stage.handle(InputEvent::PointerMove {
        position: Point::new(80.0, 80.0),
    });
    assert_eq!(stage.element(member).unwrap().position(), at);
}

#[test]
fn one_finger_pan_waits_for_the_pinch_lock() {
    let mut stage = touch_stage();
    stage.tick(100.0);

    stage.handle(InputEvent::TouchStart {
        touches: touches(&[(450.0, 400.0), (550.0, 400.0)]),
    });
    stage.handle(InputEvent::TouchMove {
        touches: touches(&[(400.0, 400.0), (600.0, 400.0)]),
    });
    assert_eq!(stage.camera().current().scale, 2.0);
    stage.handle(InputEvent::TouchEnd {
        touches: touches(&[(600.0, 400.0)]),
    });
    assert!(stage.is_pinch_locked());

    let mut log = TraceLog::new();
    let target = stage.camera().target();
    stage.handle_with_trace(
        InputEvent::TouchMove {
            touches: touches(&[(640.0, 420.0)]),
        },
        &mut log,
    );
    assert_eq!(stage.camera().target(), target);
    assert_eq!(
        log.drops().collect::<Vec<_>>(),
        vec![(InputKind::TouchMove, DropReason::PinchLock)]
    );

    stage.tick(159.0);
    assert!(stage.is_pinch_locked());
    stage.tick(160.0);
    assert!(!stage.is_pinch_locked());

    let target = stage.camera().target();
    stage.handle(InputEvent::TouchMove {
        touches: touches(&[(640.0, 420.0)]),
    });
    assert_eq!(stage.camera().target(), target);
    stage.handle(InputEvent::TouchMove {
        touches: touches(&[(610.0, 450.0)]),
    });
    assert_close(
        stage.camera().target().origin,
        target.origin + (-30.0, 30.0),
        1e-9,
    );
}

#[test]
fn each_profile_ignores_the_other_devices() {
    let mut desktop = desktop_stage();
    let mut log = TraceLog::new();
    let target = desktop.camera().target();
    desktop.handle_with_trace(
        InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        },
        &mut log,
    );
    desktop.handle_with_trace(
        InputEvent::TouchEnd {
            touches: touches(&[]),
        },
        &mut log,
    );
    assert_eq!(desktop.camera().target(), target);
    assert!(log.drops().all(|(_, reason)| reason == DropReason::Profile));
    assert_eq!(log.drops().count(), 2);

    let mut touch = touch_stage();
    let mut log = TraceLog::new();
    touch.handle_with_trace(
        InputEvent::Wheel {
            position: Point::ZERO,
            delta_y: -100.0,
        },
        &mut log,
    );
    touch.handle_with_trace(InputEvent::press(Point::ZERO, None), &mut log);
    assert_eq!(touch.camera().momentum().value(), 0.0);
    assert_eq!(
        log.drops().collect::<Vec<_>>(),
        vec![
            (InputKind::Wheel, DropReason::Profile),
            (InputKind::PointerDown, DropReason::Profile),
        ]
    );
}

#[test]
fn drag_pan_cancels_wheel_momentum() {
    let mut stage = desktop_stage();
    stage.handle(InputEvent::Wheel {
        position: Point::new(500.0, 400.0),
        delta_y: -300.0,
    });
    assert_eq!(stage.camera().momentum().value(), -300.0);
    stage.handle(InputEvent::press(Point::new(500.0, 400.0), None));
    assert_eq!(stage.camera().momentum().value(), 0.0);

    stage.handle(InputEvent::PointerMove {
        position: Point::new(540.0, 380.0),
    });
    assert_eq!(stage.camera().target().origin, Point::new(540.0, 380.0));
    // The rendered view catches up over the following frames.
    assert_eq!(stage.camera().current().origin, Point::new(500.0, 400.0));
}

#[test]
fn floating_stops_while_a_group_is_active() {
    let mut stage = desktop_stage();
    let mut now = 0.0;
    for _ in 0..10 {
        now += FRAME_MS;
        stage.tick(now);
    }
    assert!(stage.elements().any(|e| e.position() != e.home()));

    stage.activate("alpha".into());
    let frozen = stage.frame();
    for _ in 0..10 {
        now += FRAME_MS;
        stage.tick(now);
    }
    for element in stage.elements() {
        assert!(!element.is_floating());
        if element.project().as_str() == "beta" {
            assert_eq!(
                Some(element.position()),
                frozen.element(element.id()).map(|e| e.position)
            );
            assert_eq!(element.visual().opacity, 0.15);
        }
    }
}

#[test]
fn unknown_elements_and_idle_escape_are_reported() {
    let mut stage = desktop_stage();
    let mut log = TraceLog::new();
    stage.handle_with_trace(InputEvent::Click { element: ElementId(99) }, &mut log);
    stage.handle_with_trace(InputEvent::Key(Key::Escape), &mut log);
    stage.handle_with_trace(InputEvent::Key(Key::Other), &mut log);
    assert_eq!(
        log.drops().collect::<Vec<_>>(),
        vec![
            (InputKind::Click, DropReason::UnknownElement),
            (InputKind::Key, DropReason::NotFocused),
        ]
    );
    assert_eq!(stage.phase(), Phase::Idle);
}

#[test]
fn resize_moves_the_camera_home() {
    let mut stage = desktop_stage();
    stage.set_viewport(Size::new(1200.0, 900.0));
    assert_eq!(stage.camera().center(), Point::new(600.0, 450.0));
    assert_eq!(stage.camera().current().origin, Point::new(600.0, 450.0));

    stage.set_viewport(Size::new(-1.0, 900.0));
    assert_eq!(stage.camera().viewport(), Size::new(1200.0, 900.0));
}
