// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::bounds::{ClampMode, WorldBounds};
use crate::ease::{approach_point, approach_snapped, clamp_range};
use crate::momentum::{MomentumConfig, WheelMomentum};

/// A pan + uniform zoom mapping from world space to screen space.
///
/// `origin` is the screen position of the world origin, so
/// `screen = origin + world * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Screen-space position of the world origin.
    pub origin: Point,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl CameraState {
    /// Creates a camera state.
    #[must_use]
    pub const fn new(origin: Point, scale: f64) -> Self {
        Self { origin, scale }
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        ((pt - self.origin) / self.scale).to_point()
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.origin + pt.to_vec2() * self.scale
    }

    /// Returns this state rescaled to `scale` around a screen-space anchor.
    ///
    /// The world point under `anchor` stays under `anchor`.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Point, scale: f64) -> Self {
        let world = self.screen_to_world(anchor);
        Self {
            origin: anchor - world.to_vec2() * scale,
            scale,
        }
    }

    /// The screen point showing the same world point in `self` and `other`.
    ///
    /// Zooming `self` about this point to `other.scale` lands exactly on
    /// `other`. Returns `None` when the scales are equal, where the two states
    /// differ by a pure pan.
    #[must_use]
    pub fn fixed_point(&self, other: &Self) -> Option<Point> {
        let ds = other.scale - self.scale;
        if ds.abs() <= f64::EPSILON * self.scale.abs().max(other.scale.abs()) {
            return None;
        }
        let origin = (self.origin.to_vec2() * other.scale - other.origin.to_vec2() * self.scale) / ds;
        Some(origin.to_point())
    }
}

/// The transform published to the visual layer once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    /// Translation in screen pixels, applied after scaling.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
}

impl CameraTransform {
    /// The equivalent affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

/// Tuning for a [`Camera`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    /// Smallest allowed zoom factor.
    pub min_scale: f64,
    /// Largest allowed zoom factor.
    pub max_scale: f64,
    /// Fraction of the remaining pan distance covered per frame.
    pub position_ease: f64,
    /// Fraction of the remaining zoom distance covered per frame.
    pub scale_ease: f64,
    /// Pan distance (pixels) under which the current origin snaps to target.
    pub position_epsilon: f64,
    /// Zoom distance under which the current scale snaps to target.
    pub scale_epsilon: f64,
    /// World size as a multiple of the viewport size.
    pub world_scale: f64,
    /// Extra pan travel beyond the world edge, in pixels.
    pub pan_margin: f64,
    /// Whether the target is clamped to the world bounds.
    pub clamp_mode: ClampMode,
    /// Wheel momentum tuning.
    pub momentum: MomentumConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.7,
            max_scale: 2.0,
            position_ease: 0.07,
            scale_ease: 0.05,
            position_epsilon: 1e-3,
            scale_epsilon: 1e-4,
            world_scale: 1.6,
            pan_margin: 260.0,
            clamp_mode: ClampMode::default(),
            momentum: MomentumConfig::default(),
        }
    }
}

impl CameraConfig {
    /// Settings for touch screens: tighter zoom-out, deeper zoom-in, and a
    /// smaller pan margin.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            min_scale: 0.9,
            max_scale: 3.0,
            pan_margin: 180.0,
            ..Self::default()
        }
    }

    /// World bounds derived from this configuration.
    #[must_use]
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds {
            world_scale: self.world_scale,
            margin: self.pan_margin,
        }
    }
}

/// Outcome of one [`Camera::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CameraStep {
    /// Wheel momentum produced a zoom step this frame.
    pub zoomed: bool,
    /// Current state equals target state after this frame.
    pub settled: bool,
}

/// Camera with a rendered (current) state chasing a desired (target) state.
///
/// Input handlers write the target; [`Camera::tick`] integrates once per
/// frame, easing the current state toward a clamped target. Both states keep
/// their scale within `[min_scale, max_scale]` at all times.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use driftboard_view::{Camera, CameraConfig};
///
/// let mut camera = Camera::new(Size::new(1000.0, 800.0), CameraConfig::default());
/// assert_eq!(camera.current().origin, Point::new(500.0, 400.0));
///
/// camera.pan_target_by((40.0, 0.0).into());
/// camera.tick();
/// assert!(camera.current().origin.x > 500.0);
/// ```
#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    viewport: Size,
    center: Point,
    current: CameraState,
    target: CameraState,
    momentum: WheelMomentum,
}

impl Camera {
    /// Creates a camera centered on the viewport midpoint at zoom `1.0`
    /// (clamped into the configured zoom range).
    #[must_use]
    pub fn new(viewport: Size, config: CameraConfig) -> Self {
        let center = viewport.to_rect().center();
        let scale = clamp_range(1.0, config.min_scale, config.max_scale);
        let state = CameraState::new(center, scale);
        Self {
            config,
            viewport,
            center,
            current: state,
            target: state,
            momentum: WheelMomentum::new(center),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the home position of the world origin (the viewport midpoint).
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the rendered state.
    #[must_use]
    pub fn current(&self) -> CameraState {
        self.current
    }

    /// Returns the desired state.
    #[must_use]
    pub fn target(&self) -> CameraState {
        self.target
    }

    /// Returns the wheel momentum accumulator.
    #[must_use]
    pub fn momentum(&self) -> &WheelMomentum {
        &self.momentum
    }

    /// Clamps a scale into the configured zoom range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if !scale.is_finite() {
            return self.target.scale;
        }
        clamp_range(scale, self.config.min_scale, self.config.max_scale)
    }

    /// Resizes the viewport.
    ///
    /// The home position moves to the new midpoint and both states shift by
    /// the same amount so the view does not jump.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        let center = viewport.to_rect().center();
        let shift = center - self.center;
        self.viewport = viewport;
        self.center = center;
        self.current.origin += shift;
        self.target.origin += shift;
    }

    /// Sets the desired state. Out-of-range scales are clamped.
    pub fn set_target(&mut self, origin: Point, scale: f64) {
        self.target = CameraState::new(origin, self.clamp_scale(scale));
    }

    /// Sets the desired origin, leaving the desired scale untouched.
    pub fn set_target_origin(&mut self, origin: Point) {
        self.target.origin = origin;
    }

    /// Moves the desired origin by a screen-space delta.
    pub fn pan_target_by(&mut self, delta: Vec2) {
        self.target.origin += delta;
    }

    /// Places both current and target at `state`, bypassing easing.
    ///
    /// Used where the rendered view has to track input 1:1 (pinch) or follow a
    /// scripted tween. The scale is clamped.
    pub fn jump_to(&mut self, state: CameraState) {
        let state = CameraState::new(state.origin, self.clamp_scale(state.scale));
        self.current = state;
        self.target = state;
    }

    /// Feeds a raw wheel delta anchored at a screen point.
    pub fn push_wheel(&mut self, delta_y: f64, anchor: Point) {
        self.momentum.push(delta_y, anchor);
    }

    /// Moves the point pending wheel momentum zooms about.
    ///
    /// Hosts call this as the pointer moves so a decaying wheel zoom keeps
    /// following it.
    pub fn set_wheel_anchor(&mut self, anchor: Point) {
        self.momentum.set_anchor(anchor);
    }

    /// Drops any pending wheel momentum.
    pub fn clear_momentum(&mut self) {
        self.momentum.clear();
    }

    /// Returns `true` when the rendered state has reached the target and no
    /// wheel momentum is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target && !self.momentum.is_active(&self.config.momentum)
    }

    /// Clamps the target scale and origin.
    pub fn clamp_target(&mut self) {
        self.target.scale = self.clamp_scale(self.target.scale);
        self.target.origin = self.config.world_bounds().clamp_origin(
            self.config.clamp_mode,
            self.target.origin,
            self.center,
            self.viewport,
            self.target.scale,
        );
    }

    /// Advances the camera by one frame.
    ///
    /// 1. Consumes wheel momentum, zooming both states about the wheel anchor.
    /// 2. Clamps the target scale and origin.
    /// 3. Eases the current state toward the target, snapping when close.
    pub fn tick(&mut self) -> CameraStep {
        let mut zoomed = false;
        if let Some(factor) = self.momentum.step(&self.config.momentum) {
            let scale = self.clamp_scale(self.current.scale * factor);
            let next = self.current.zoomed_about(self.momentum.anchor(), scale);
            self.current = next;
            self.target = next;
            zoomed = true;
        }

        self.clamp_target();

        self.current.origin = approach_point(
            self.current.origin,
            self.target.origin,
            self.config.position_ease,
            self.config.position_epsilon,
        );
        self.current.scale = approach_snapped(
            self.current.scale,
            self.target.scale,
            self.config.scale_ease,
            self.config.scale_epsilon,
        );

        CameraStep {
            zoomed,
            settled: self.is_settled(),
        }
    }

    /// The transform to publish for the rendered state.
    #[must_use]
    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            translate: self.current.origin.to_vec2(),
            scale: self.current.scale,
        }
    }

    /// Snapshot of the camera for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            viewport: self.viewport,
            center: self.center,
            current: self.current,
            target: self.target,
            momentum: self.momentum.value(),
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            pan_limit: self
                .config
                .world_bounds()
                .limit(self.viewport, self.target.scale),
            clamp_mode: self.config.clamp_mode,
        }
    }
}

/// Debug snapshot of a [`Camera`].
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Home position of the world origin.
    pub center: Point,
    /// Rendered state.
    pub current: CameraState,
    /// Desired state.
    pub target: CameraState,
    /// Pending wheel momentum.
    pub momentum: f64,
    /// Minimum zoom factor.
    pub min_scale: f64,
    /// Maximum zoom factor.
    pub max_scale: f64,
    /// Allowed origin travel from `center` at the target scale.
    pub pan_limit: Vec2,
    /// Clamp mode for the target.
    pub clamp_mode: ClampMode,
}
