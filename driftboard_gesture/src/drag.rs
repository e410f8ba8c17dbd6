// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag interactions: panning the canvas and moving a single element.
//!
//! ## Usage
//!
//! 1) On press over empty canvas, call [`PanDrag::start`]; the anchor is the
//!    pointer's offset from the camera's target origin.
//! 2) On each move, call [`PanDrag::update`]; the target origin is set so the
//!    anchor stays under the pointer. Smoothing is left to the camera tick.
//! 3) On release, call [`PanDrag::end`].
//!
//! ```
//! use kurbo::{Point, Size};
//! use driftboard_gesture::drag::PanDrag;
//! use driftboard_view::{Camera, CameraConfig};
//!
//! let mut camera = Camera::new(Size::new(1000.0, 800.0), CameraConfig::default());
//! let mut pan = PanDrag::default();
//!
//! pan.start(Point::new(100.0, 100.0), &mut camera);
//! assert!(pan.is_dragging());
//!
//! pan.update(Point::new(130.0, 90.0), &mut camera);
//! assert_eq!(camera.target().origin, Point::new(530.0, 390.0));
//! ```

use driftboard_view::Camera;
use kurbo::{Point, Vec2};

/// Tracks a canvas pan drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanDrag {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging; `anchor` is the pointer offset from the target origin at press.
    Dragging {
        /// Pointer position minus target origin at drag start.
        anchor: Vec2,
    },
}

impl PanDrag {
    /// Starts a pan at `pointer`. Pending wheel momentum is dropped.
    pub fn start(&mut self, pointer: Point, camera: &mut Camera) {
        camera.clear_momentum();
        *self = Self::Dragging {
            anchor: pointer - camera.target().origin,
        };
    }

    /// Moves the camera target so the drag anchor follows `pointer`.
    ///
    /// Returns `false` when no drag is in progress.
    pub fn update(&mut self, pointer: Point, camera: &mut Camera) -> bool {
        match *self {
            Self::Idle => false,
            Self::Dragging { anchor } => {
                camera.set_target_origin(pointer - anchor);
                true
            }
        }
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Tracks a drag of a single element in world space.
///
/// Pointer motion is converted to world units by dividing by the camera
/// scale, so the element stays under the pointer at any zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementDrag<K> {
    /// No drag in progress.
    Idle,
    /// Dragging `element`.
    Dragging {
        /// The dragged element.
        element: K,
        /// Pointer position at press, in screen space.
        start_pointer: Point,
        /// Element position at press, in world space.
        start_position: Point,
    },
}

impl<K> Default for ElementDrag<K> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<K: Copy> ElementDrag<K> {
    /// Starts dragging `element`, currently at world `position`.
    pub fn start(&mut self, element: K, pointer: Point, position: Point) {
        *self = Self::Dragging {
            element,
            start_pointer: pointer,
            start_position: position,
        };
    }

    /// Returns the dragged element and its new world position.
    ///
    /// Non-positive or non-finite scales are treated as `1.0`.
    pub fn update(&self, pointer: Point, scale: f64) -> Option<(K, Point)> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                element,
                start_pointer,
                start_position,
            } => {
                let scale = if scale.is_finite() && scale > 0.0 {
                    scale
                } else {
                    1.0
                };
                Some((element, start_position + (pointer - start_pointer) / scale))
            }
        }
    }

    /// Ends the drag, returning the element that was being dragged.
    pub fn end(&mut self) -> Option<K> {
        let element = self.element();
        *self = Self::Idle;
        element
    }

    /// The element being dragged, if any.
    #[must_use]
    pub fn element(&self) -> Option<K> {
        match *self {
            Self::Idle => None,
            Self::Dragging { element, .. } => Some(element),
        }
    }
}
