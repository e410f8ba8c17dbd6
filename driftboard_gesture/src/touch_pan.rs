// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use driftboard_view::Camera;
use kurbo::Point;

/// One-finger touch pan: finger motion accumulates into the target origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPan {
    last: Option<Point>,
}

impl TouchPan {
    /// Records the finger position at touch start.
    pub fn begin(&mut self, touch: Point) {
        self.last = Some(touch);
    }

    /// Pans the camera target by the finger's motion since the last event.
    ///
    /// Without a previous position the touch is only recorded. Returns `true`
    /// if the target moved.
    pub fn update(&mut self, touch: Point, camera: &mut Camera) -> bool {
        let last = self.last.replace(touch);
        match last {
            Some(last) => {
                camera.pan_target_by(touch - last);
                true
            }
            None => false,
        }
    }

    /// Forgets the finger position.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a finger position is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}
