// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for the focused-group transition.
//!
//! The phase sequence is
//! `Idle → ZoomingOut → Arranging → ZoomingIn → Focused → Restoring → Idle`.
//! [`Stage`](crate::Stage) drives the transitions; this module holds the state
//! and the scripted camera tween.

use driftboard_timing::Tween;
use driftboard_view::CameraState;
use driftboard_view::ease::lerp;
use kurbo::Point;

use crate::element::{ElementId, ProjectId};

/// Where the focused-group transition stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No group is active; elements float and every input adapter runs.
    #[default]
    Idle,
    /// Pulling the camera back before arranging.
    ZoomingOut,
    /// Placing the group on the spiral.
    Arranging,
    /// Pushing the camera in onto the arranged group.
    ZoomingIn,
    /// The group is arranged; only element dragging and exit are honored.
    Focused,
    /// Returning elements and camera to their pre-activation state.
    Restoring,
}

impl Phase {
    /// Returns `true` while the transition owns the camera exclusively.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            Self::ZoomingOut | Self::Arranging | Self::ZoomingIn | Self::Restoring
        )
    }

    /// Returns `true` whenever a group is active or becoming active.
    #[must_use]
    pub fn is_group_active(self) -> bool {
        self != Self::Idle
    }
}

/// Where one member of the focused group was placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// The placed element.
    pub element: ElementId,
    /// Position in world space.
    pub position: Point,
    /// Stacking order.
    pub z_index: i32,
}

/// A duration-based camera move that zooms about a fixed screen anchor.
///
/// The anchor is the screen point that shows the same world point at both
/// ends, so every sample keeps that world point under it. Moves between equal
/// scales have no such point and pan linearly instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CameraTween {
    pub(crate) generation: u64,
    pub(crate) tween: Tween,
    pub(crate) from: CameraState,
    pub(crate) to: CameraState,
    pub(crate) anchor: Option<Point>,
}

impl CameraTween {
    /// Zooms `from` to `scale` about `anchor`.
    pub(crate) fn zoom_about(
        generation: u64,
        tween: Tween,
        from: CameraState,
        anchor: Point,
        scale: f64,
    ) -> Self {
        Self {
            generation,
            tween,
            from,
            to: from.zoomed_about(anchor, scale),
            anchor: Some(anchor),
        }
    }

    /// Moves `from` onto `to`.
    pub(crate) fn between(
        generation: u64,
        tween: Tween,
        from: CameraState,
        to: CameraState,
    ) -> Self {
        Self {
            generation,
            tween,
            from,
            to,
            anchor: from.fixed_point(&to),
        }
    }

    /// Camera state at `now_ms`. The end state is returned exactly once the
    /// tween is done.
    pub(crate) fn sample(&self, now_ms: f64) -> CameraState {
        let t = self.tween.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let scale = lerp(self.from.scale, self.to.scale, t);
        match self.anchor {
            Some(anchor) => self.from.zoomed_about(anchor, scale),
            None => CameraState::new(self.from.origin.lerp(self.to.origin, t), scale),
        }
    }
}

/// State owned by the transition while a group is active.
#[derive(Clone, Debug, Default)]
pub(crate) struct GroupTransition {
    pub(crate) phase: Phase,
    pub(crate) active: Option<ProjectId>,
    pub(crate) stored_camera: Option<CameraState>,
    pub(crate) generation: u64,
    pub(crate) tween: Option<CameraTween>,
    pub(crate) arrangement: Vec<Placement>,
}

impl GroupTransition {
    /// Starts a new generation, orphaning any tween of the previous one.
    pub(crate) fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
        self.stored_camera = None;
        self.tween = None;
        self.arrangement.clear();
    }
}
