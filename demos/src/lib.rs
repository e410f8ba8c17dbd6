// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Driftboard demos.
//!
//! The demos drive a [`Stage`] headlessly and print what a renderer would
//! draw. Run them with, for example:
//! - `cargo run -p driftboard_demos --example canvas_tour`

use core::fmt::Write as _;

use driftboard_stage::{ElementSpec, Frame, Phase, Stage};

/// Milliseconds per frame at 60 Hz.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// A small portfolio: three projects of different sizes.
#[must_use]
pub fn portfolio() -> Vec<ElementSpec> {
    let projects = [("harbor", 14), ("orchard", 5), ("lantern", 3)];
    let mut id = 0;
    let mut specs = Vec::new();
    for (project, count) in projects {
        for _ in 0..count {
            specs.push(ElementSpec::new(id, project));
            id += 1;
        }
    }
    specs
}

/// Ticks `stage` for `frames` frames, advancing `now` by [`FRAME_MS`] each.
pub fn run_frames(stage: &mut Stage, now: &mut f64, frames: usize) {
    for _ in 0..frames {
        *now += FRAME_MS;
        stage.tick(*now);
    }
}

/// Ticks `stage` until it reaches `phase`, giving up after ten seconds of
/// simulated time. Returns the number of frames run.
pub fn run_until(stage: &mut Stage, now: &mut f64, phase: Phase) -> usize {
    let mut frames = 0;
    while stage.phase() != phase && frames < 600 {
        *now += FRAME_MS;
        stage.tick(*now);
        frames += 1;
    }
    frames
}

/// One-line summary of the camera, then one line per element drawn on top.
#[must_use]
pub fn describe(frame: &Frame, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "camera: translate=({:.1}, {:.1}) scale={:.3}",
        frame.camera.translate.x, frame.camera.translate.y, frame.camera.scale
    );
    let to_screen = frame.camera.to_affine();
    let mut elements: Vec<_> = frame.elements.iter().collect();
    elements.sort_by(|a, b| b.z_index.cmp(&a.z_index));
    for e in elements.into_iter().take(top) {
        let screen = to_screen * e.position;
        let _ = writeln!(
            out,
            "  #{:<3} at ({:>8.1}, {:>8.1}) screen ({:>7.1}, {:>7.1}) z={:<5} opacity={:.2} width={}",
            e.id.0, e.position.x, e.position.y, screen.x, screen.y, e.z_index, e.opacity, e.width
        );
    }
    out
}
