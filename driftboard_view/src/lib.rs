// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard View: the camera over an infinite canvas.
//!
//! This crate provides a small, headless camera model for a large 2D world
//! viewed through a window measured in screen pixels. It focuses on:
//! - A rendered (current) and desired (target) pan + zoom state.
//! - Per-frame integration: wheel momentum, world-bounds clamping, and
//!   exponential easing of the current state toward the target.
//! - Zoom-to-point math that keeps a screen anchor over the same world point.
//!
//! It does **not** own any input handling or rendering. Callers are expected
//! to:
//! - Translate raw input into target updates (see `driftboard_gesture`).
//! - Call [`Camera::tick`] once per display refresh.
//! - Apply [`Camera::transform`] to their rendering surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use driftboard_view::{Camera, CameraConfig};
//!
//! let mut camera = Camera::new(Size::new(1000.0, 800.0), CameraConfig::default());
//!
//! // Scroll up over a point: momentum builds and zooms in over the next frames.
//! camera.push_wheel(-100.0, Point::new(250.0, 200.0));
//! for _ in 0..120 {
//!     camera.tick();
//! }
//! assert!(camera.current().scale > 1.0);
//! assert!(camera.current().scale <= camera.config().max_scale);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no rotation.
//! - Only the target is clamped to the world bounds; the current state only
//!   ever approaches an already-clamped target.
//! - Easing snaps once within an epsilon so the camera comes to rest.

mod bounds;
mod camera;
pub mod ease;
mod momentum;

pub use bounds::{ClampMode, WorldBounds};
pub use camera::{Camera, CameraConfig, CameraDebugInfo, CameraState, CameraStep, CameraTransform};
pub use momentum::{MomentumConfig, WheelMomentum};
