// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading stage tuning from JSON.
//!
//! Starts from the desktop preset, overrides a few values from a JSON
//! document, validates the result, and shows how long the focus transition
//! takes with the new timing.
//!
//! Run:
//! - `cargo run -p driftboard_demos --example tuning_from_json`

use driftboard_demos::{portfolio, run_until};
use driftboard_stage::{ElementId, Phase, Stage, StageConfig};
use kurbo::Size;

fn main() {
    let mut value = match serde_json::to_value(StageConfig::pointer()) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("cannot serialize preset: {err}");
            return;
        }
    };
    value["transition"]["zoom_out_ms"] = 400.0.into();
    value["transition"]["zoom_in_ms"] = 250.0.into();
    value["transition"]["easing"] = "SmoothStep".into();
    value["camera"]["max_scale"] = 4.0.into();

    let config: StageConfig = match serde_json::from_value(value) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad tuning: {err}");
            return;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("rejected tuning: {err}");
        return;
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&config.transition).unwrap_or_default()
    );

    let mut stage = match Stage::new(config, Size::new(1280.0, 800.0), portfolio(), 1) {
        Ok(stage) => stage,
        Err(err) => {
            eprintln!("cannot build stage: {err}");
            return;
        }
    };
    let mut now = 0.0;
    stage.select(ElementId(15));
    let frames = run_until(&mut stage, &mut now, Phase::Focused);
    println!("focused after {frames} frames ({now:.0} ms)");

    // An inverted zoom range is caught before a stage is built.
    let mut broken = config;
    broken.camera.min_scale = 5.0;
    if let Err(err) = broken.validate() {
        println!("as expected: {err}");
    }
}
