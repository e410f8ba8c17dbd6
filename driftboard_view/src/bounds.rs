// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Clamp behavior for the camera target relative to the world bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Do not clamp; the target may pan arbitrarily far.
    None,
    /// Keep the target origin within the world rectangle plus a margin.
    ///
    /// See [`WorldBounds::limit`] for how the allowed travel is derived.
    #[default]
    WorldWithMargin,
}

/// Pan limits derived from the viewport size.
///
/// The world is modeled as a rectangle `world_scale` times the viewport,
/// centered on the camera's home position. At a given zoom the world covers
/// `viewport * world_scale * scale` screen pixels, so the origin may travel
/// half the overhang in either direction, plus `margin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    /// World size as a multiple of the viewport size.
    pub world_scale: f64,
    /// Extra travel allowed beyond the world edge, in screen pixels.
    pub margin: f64,
}

impl WorldBounds {
    /// Returns the maximum distance, per axis, the origin may sit from `center`.
    ///
    /// Never negative: when the world is smaller than the viewport and the
    /// margin does not make up the difference, the origin is pinned to `center`.
    #[must_use]
    pub fn limit(&self, viewport: Size, scale: f64) -> Vec2 {
        let world_w = viewport.width * self.world_scale * scale;
        let world_h = viewport.height * self.world_scale * scale;
        Vec2::new(
            ((world_w - viewport.width) / 2.0 + self.margin).max(0.0),
            ((world_h - viewport.height) / 2.0 + self.margin).max(0.0),
        )
    }

    /// Clamps `origin` into `[center - limit, center + limit]` on both axes.
    #[must_use]
    pub fn clamp_origin(
        &self,
        mode: ClampMode,
        origin: Point,
        center: Point,
        viewport: Size,
        scale: f64,
    ) -> Point {
        if mode == ClampMode::None {
            return origin;
        }
        let limit = self.limit(viewport, scale);
        Point::new(
            origin.x.clamp(center.x - limit.x, center.x + limit.x),
            origin.y.clamp(center.y - limit.y, center.y + limit.y),
        )
    }
}
