// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Gesture: input adapters for the canvas camera.
//!
//! Each adapter is a small state machine that turns a stream of pointer,
//! touch, or wheel events into updates of a [`driftboard_view::Camera`]:
//!
//! - [`drag`]: canvas pan drags and single-element drags
//! - [`pinch`]: two-finger pinch zoom with a post-pinch lock
//! - [`touch_pan`]: one-finger touch pan
//! - [`wheel`]: wheel momentum anchored at the pointer
//!
//! Adapters write the camera *target*; the camera's per-frame tick eases the
//! rendered state after it. Pinch is the exception and writes both, so the
//! view tracks the fingers exactly.
//!
//! The adapters do not decide *whether* an event should be handled. Gating
//! (input locks, an active group, which device profile is in use) belongs to
//! the owner of the camera, which simply does not call into the adapter.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use driftboard_gesture::pinch::{PinchZoom, TouchPair};
//! use driftboard_gesture::touch_pan::TouchPan;
//! use driftboard_view::{Camera, CameraConfig};
//!
//! let mut camera = Camera::new(Size::new(800.0, 600.0), CameraConfig::touch());
//! let mut pinch = PinchZoom::default();
//! let mut pan = TouchPan::default();
//!
//! let start = TouchPair { a: Point::new(300.0, 300.0), b: Point::new(500.0, 300.0) };
//! pinch.begin(start, &camera);
//! let wider = TouchPair { a: Point::new(200.0, 300.0), b: Point::new(600.0, 300.0) };
//! pinch.update(wider, &mut camera);
//! assert_eq!(camera.current().scale, 2.0);
//!
//! // One finger lifts; the other must not start panning right away.
//! pinch.end(1, &mut camera, 1_000.0);
//! assert!(pinch.is_locked(1_030.0));
//! if !pinch.is_locked(1_030.0) {
//!     pan.begin(Point::new(600.0, 300.0));
//! }
//! assert!(!pan.is_tracking());
//! ```

pub mod drag;
pub mod pinch;
pub mod touch_pan;
pub mod wheel;
