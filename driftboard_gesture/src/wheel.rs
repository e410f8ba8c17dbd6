// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use driftboard_view::Camera;
use kurbo::Point;

/// Wheel zoom: remembers where the pointer is and feeds wheel deltas into the
/// camera's momentum, anchored there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelZoom {
    anchor: Point,
}

impl WheelZoom {
    /// Creates a wheel adapter anchored at `anchor` until the pointer moves.
    #[must_use]
    pub fn new(anchor: Point) -> Self {
        Self { anchor }
    }

    /// Records the latest pointer position and re-anchors any wheel momentum
    /// still decaying in `camera`.
    pub fn track(&mut self, pointer: Point, camera: &mut Camera) {
        self.anchor = pointer;
        camera.set_wheel_anchor(pointer);
    }

    /// The screen point the next wheel zoom anchors at.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Adds a wheel delta to the camera's momentum.
    pub fn scroll(&self, delta_y: f64, camera: &mut Camera) {
        camera.push_wheel(delta_y, self.anchor);
    }
}
