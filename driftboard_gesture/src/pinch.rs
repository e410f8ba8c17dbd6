// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch zoom anchored at the pinch midpoint.
//!
//! A pinch snapshots the camera when the second finger lands. Every move
//! rescales that snapshot by `distance / start_distance` around the current
//! midpoint, so moving both fingers together also pans. The result is written
//! to both the current and target camera state: the view tracks the fingers
//! 1:1 instead of easing behind them.
//!
//! Ending a pinch leaves a short lock engaged so that a finger lifted a moment
//! after the other does not start a one-finger pan with a jump.

use driftboard_timing::Hold;
use driftboard_view::{Camera, CameraState};
use kurbo::Point;

/// Exactly two touch points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPair {
    /// First touch, in screen space.
    pub a: Point,
    /// Second touch, in screen space.
    pub b: Point,
}

impl TouchPair {
    /// Builds a pair from a touch list, which must hold exactly two points.
    #[must_use]
    pub fn from_touches(touches: &[Point]) -> Option<Self> {
        match touches {
            [a, b] => Some(Self { a: *a, b: *b }),
            _ => None,
        }
    }

    /// Distance between the two touches.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Midpoint between the two touches.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchStart {
    distance: f64,
    camera: CameraState,
}

/// Pinch zoom state plus the post-pinch lock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchZoom {
    start: Option<PinchStart>,
    lock: Hold,
    lock_grace_ms: f64,
}

impl Default for PinchZoom {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl PinchZoom {
    /// Creates an idle pinch whose lock lingers `lock_grace_ms` after it ends.
    #[must_use]
    pub fn new(lock_grace_ms: f64) -> Self {
        Self {
            start: None,
            lock: Hold::Free,
            lock_grace_ms,
        }
    }

    /// Starts a pinch from the camera's current state.
    pub fn begin(&mut self, pair: TouchPair, camera: &Camera) {
        self.start = Some(PinchStart {
            distance: pair.distance(),
            camera: camera.current(),
        });
        self.lock.engage();
    }

    /// Applies the pinch for the current finger positions.
    ///
    /// A zero start distance yields a zoom factor of `1.0`. Returns `false`
    /// when no pinch is active.
    pub fn update(&mut self, pair: TouchPair, camera: &mut Camera) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let factor = if start.distance > 0.0 {
            pair.distance() / start.distance
        } else {
            1.0
        };
        let factor = if factor.is_finite() { factor } else { 1.0 };
        let scale = camera.clamp_scale(start.camera.scale * factor);
        camera.jump_to(start.camera.zoomed_about(pair.midpoint(), scale));
        true
    }

    /// Handles a touch end with `remaining` fingers still down.
    ///
    /// When fewer than two fingers remain the pinch ends: the target is pinned
    /// to the current state and the lock is scheduled for release. Returns
    /// `true` if the pinch ended.
    pub fn end(&mut self, remaining: usize, camera: &mut Camera, now_ms: f64) -> bool {
        if self.start.is_none() || remaining >= 2 {
            return false;
        }
        self.start = None;
        let current = camera.current();
        camera.set_target(current.origin, current.scale);
        self.lock.release_after(now_ms, self.lock_grace_ms);
        true
    }

    /// Abandons any pinch in progress and releases the lock immediately.
    pub fn cancel(&mut self) {
        self.start = None;
        self.lock.release();
    }

    /// Returns `true` while two fingers are pinching.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Returns `true` while one-finger panning must stay suppressed.
    #[must_use]
    pub fn is_locked(&self, now_ms: f64) -> bool {
        self.lock.is_held(now_ms)
    }

    /// Lets an expired lock fall back to free.
    pub fn expire(&mut self, now_ms: f64) {
        self.lock.expire(now_ms);
    }
}
