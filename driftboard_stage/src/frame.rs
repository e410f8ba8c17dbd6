// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the stage hands to the visual layer.

use driftboard_view::CameraTransform;
use kurbo::Point;

use crate::element::{ElementId, ProjectId};
use crate::transition::Phase;

/// One element as it should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementFrame {
    /// Element identifier.
    pub id: ElementId,
    /// Center position in world space.
    pub position: Point,
    /// Stacking order.
    pub z_index: i32,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Width in world units.
    pub width: f64,
}

/// Everything the visual layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// World → screen transform.
    pub camera: CameraTransform,
    /// Elements in host order.
    pub elements: Vec<ElementFrame>,
}

impl Frame {
    /// Looks up an element by id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ElementFrame> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Signals for collaborators outside the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    /// Show the description panel for this project and hide the others.
    ShowDescription(ProjectId),
    /// Hide every description panel.
    HideDescriptions,
    /// The group transition moved to another phase.
    PhaseChanged {
        /// Previous phase.
        from: Phase,
        /// New phase.
        to: Phase,
    },
}
