// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for a [`Stage`](crate::Stage).
//!
//! Every number the engine uses lives here. Two presets cover the common
//! devices: [`StageConfig::pointer`] (mouse and wheel, the default) and
//! [`StageConfig::touch`] (pinch and one-finger pan).

use driftboard_layout::float::FloatConfig;
use driftboard_layout::spiral::SpiralConfig;
use driftboard_timing::Easing;
use driftboard_view::CameraConfig;
use kurbo::{Point, Size};

use crate::error::ConfigError;

/// Which family of input devices drives the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputProfile {
    /// Mouse drag pans, the wheel zooms. Touch input is ignored.
    #[default]
    Pointer,
    /// Two fingers pinch, one finger pans. Wheel and mouse pans are ignored.
    Touch,
}

/// Per-element presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualConfig {
    /// Width of a floating element.
    pub default_width: f64,
    /// Stacking order of a floating element.
    pub default_z: i32,
    /// Stacking order of an element being dragged in a focused group.
    pub dragged_z: i32,
    /// Opacity of elements outside the focused group.
    pub dimmed_opacity: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            default_width: 100.0,
            default_z: 1,
            dragged_z: 3000,
            dimmed_opacity: 0.15,
        }
    }
}

/// The scripted camera moves of a group transition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionConfig {
    /// Duration of the pull-back, in milliseconds.
    pub zoom_out_ms: f64,
    /// Duration of the push-in onto the arranged group, in milliseconds.
    pub zoom_in_ms: f64,
    /// Progress curve for both tweens.
    pub easing: Easing,
    /// Scale of the pulled-back overview.
    pub pulled_back_scale: f64,
    /// Scale the focused group is shown at.
    pub focus_scale: f64,
    /// Screen position of the spiral center, as a fraction of viewport width.
    pub focus_anchor_x: f64,
    /// Screen position of the spiral center, as a fraction of viewport height.
    pub focus_anchor_y: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            zoom_out_ms: 1000.0,
            zoom_in_ms: 500.0,
            easing: Easing::InOutCubic,
            pulled_back_scale: 0.7,
            focus_scale: 1.0,
            focus_anchor_x: 0.3,
            focus_anchor_y: 0.5,
        }
    }
}

impl TransitionConfig {
    /// Screen point the arranged group is centered on. Left of center, so a
    /// description panel fits on the right.
    #[must_use]
    pub fn focus_anchor(&self, viewport: Size) -> Point {
        Point::new(
            viewport.width * self.focus_anchor_x,
            viewport.height * self.focus_anchor_y,
        )
    }
}

/// Everything a [`Stage`](crate::Stage) can be tuned with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageConfig {
    /// Which input devices are honored.
    pub profile: InputProfile,
    /// Camera limits and easing.
    pub camera: CameraConfig,
    /// Ambient floating motion.
    pub float: FloatConfig,
    /// Spiral arrangement of a focused group.
    pub spiral: SpiralConfig,
    /// Group transition timing.
    pub transition: TransitionConfig,
    /// Element presentation.
    pub visual: VisualConfig,
    /// How long one-finger panning stays suppressed after a pinch ends.
    pub pinch_lock_ms: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            profile: InputProfile::default(),
            camera: CameraConfig::default(),
            float: FloatConfig::default(),
            spiral: SpiralConfig::default(),
            transition: TransitionConfig::default(),
            visual: VisualConfig::default(),
            pinch_lock_ms: 60.0,
        }
    }
}

impl StageConfig {
    /// Desktop preset: mouse and wheel. Same as [`StageConfig::default`].
    #[must_use]
    pub fn pointer() -> Self {
        Self::default()
    }

    /// Touch-screen preset: pinch and one-finger pan, wider zoom range,
    /// smaller pan margin.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            profile: InputProfile::Touch,
            camera: CameraConfig::touch(),
            ..Self::pointer()
        }
    }

    /// Checks that the configuration can drive a stage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        let (min, max) = (camera.min_scale, camera.max_scale);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ScaleRange { min, max });
        }
        for (name, value) in [
            ("camera.position_ease", camera.position_ease),
            ("camera.scale_ease", camera.scale_ease),
            ("float.ease", self.float.ease),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::EaseFactor { name, value });
            }
        }
        let decay = camera.momentum.decay;
        if !(decay > 0.0 && decay < 1.0) {
            return Err(ConfigError::MomentumDecay(decay));
        }
        for (name, value) in [
            ("transition.pulled_back_scale", self.transition.pulled_back_scale),
            ("transition.focus_scale", self.transition.focus_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::TransitionScale { name, value });
            }
        }
        let size = self.spiral.element_size;
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::ElementSize(size));
        }
        Ok(())
    }
}

pub(crate) fn validate_viewport(viewport: Size) -> Result<(), ConfigError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(viewport.width) && ok(viewport.height) {
        Ok(())
    } else {
        Err(ConfigError::Viewport(viewport))
    }
}
