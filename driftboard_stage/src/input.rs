// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-neutral input events.

use kurbo::Point;
use smallvec::SmallVec;

use crate::element::ElementId;

/// Active touch points, in screen coordinates. Two is the common case.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// Pointer buttons the stage distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or primary touch.
    #[default]
    Primary,
    /// Any other button.
    Other,
}

/// Keys the stage reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Leaves the focused group.
    Escape,
    /// Anything else; ignored.
    Other,
}

/// One input event, in screen coordinates.
///
/// Hit testing is the host's job: pointer presses and clicks carry the element
/// under the pointer, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A button went down.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Which button.
        button: PointerButton,
        /// Element under the pointer; `None` over empty canvas.
        hit: Option<ElementId>,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// A button went up.
    PointerUp {
        /// Pointer position.
        position: Point,
    },
    /// An element was clicked (press and release without a drag).
    Click {
        /// The clicked element.
        element: ElementId,
    },
    /// Wheel scroll. Negative `delta_y` zooms in.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Raw vertical delta.
        delta_y: f64,
    },
    /// Touches began. `touches` holds every touch now down.
    TouchStart {
        /// Active touches.
        touches: TouchPoints,
    },
    /// Touches moved. `touches` holds every touch now down.
    TouchMove {
        /// Active touches.
        touches: TouchPoints,
    },
    /// Touches ended. `touches` holds the touches still down.
    TouchEnd {
        /// Remaining touches.
        touches: TouchPoints,
    },
    /// A key was pressed.
    Key(Key),
}

/// The variant of an [`InputEvent`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// [`InputEvent::PointerDown`].
    PointerDown,
    /// [`InputEvent::PointerMove`].
    PointerMove,
    /// [`InputEvent::PointerUp`].
    PointerUp,
    /// [`InputEvent::Click`].
    Click,
    /// [`InputEvent::Wheel`].
    Wheel,
    /// [`InputEvent::TouchStart`].
    TouchStart,
    /// [`InputEvent::TouchMove`].
    TouchMove,
    /// [`InputEvent::TouchEnd`].
    TouchEnd,
    /// [`InputEvent::Key`].
    Key,
}

impl InputEvent {
    /// Which kind of event this is.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::PointerDown { .. } => InputKind::PointerDown,
            Self::PointerMove { .. } => InputKind::PointerMove,
            Self::PointerUp { .. } => InputKind::PointerUp,
            Self::Click { .. } => InputKind::Click,
            Self::Wheel { .. } => InputKind::Wheel,
            Self::TouchStart { .. } => InputKind::TouchStart,
            Self::TouchMove { .. } => InputKind::TouchMove,
            Self::TouchEnd { .. } => InputKind::TouchEnd,
            Self::Key(_) => InputKind::Key,
        }
    }

    /// Shorthand for a primary-button press.
    #[must_use]
    pub fn press(position: Point, hit: Option<ElementId>) -> Self {
        Self::PointerDown {
            position,
            button: PointerButton::Primary,
            hit,
        }
    }

    /// Collects touch points for the touch variants.
    #[must_use]
    pub fn touches(points: &[Point]) -> TouchPoints {
        points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            InputEvent::press(Point::ZERO, None).kind(),
            InputKind::PointerDown
        );
        assert_eq!(
            InputEvent::Wheel {
                position: Point::ZERO,
                delta_y: 1.0
            }
            .kind(),
            InputKind::Wheel
        );
        assert_eq!(InputEvent::Key(Key::Escape).kind(), InputKind::Key);
        assert_eq!(
            InputEvent::TouchEnd {
                touches: TouchPoints::new()
            }
            .kind(),
            InputKind::TouchEnd
        );
    }

    #[test]
    fn two_touches_stay_inline() {
        let touches = InputEvent::touches(&[Point::ZERO, Point::new(1.0, 1.0)]);
        assert_eq!(touches.len(), 2);
        assert!(!touches.spilled());
    }
}
