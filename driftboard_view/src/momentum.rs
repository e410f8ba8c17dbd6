// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel momentum: raw wheel deltas accumulate here and bleed off over
//! subsequent frames as multiplicative zoom steps.

use kurbo::Point;

/// Tuning for [`WheelMomentum`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumConfig {
    /// Accumulated momentum at or below this magnitude is discarded.
    pub threshold: f64,
    /// Share of the accumulated momentum consumed by a single frame.
    pub per_tick: f64,
    /// Multiplicative decay applied to the accumulator each frame.
    pub decay: f64,
    /// Exponent scale converting consumed momentum into a zoom factor.
    pub zoom_exponent: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            per_tick: 0.12,
            decay: 0.94,
            zoom_exponent: 0.0015,
        }
    }
}

/// Accumulated wheel momentum plus the screen point the zoom anchors at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelMomentum {
    value: f64,
    anchor: Point,
}

impl WheelMomentum {
    /// Creates an empty accumulator anchored at `anchor`.
    #[must_use]
    pub fn new(anchor: Point) -> Self {
        Self { value: 0.0, anchor }
    }

    /// Adds a raw wheel delta and moves the zoom anchor.
    ///
    /// Positive deltas (scrolling down) zoom out; negative deltas zoom in.
    pub fn push(&mut self, delta_y: f64, anchor: Point) {
        if delta_y.is_finite() {
            self.value += delta_y;
        }
        self.anchor = anchor;
    }

    /// Moves the zoom anchor without adding momentum.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Drops all accumulated momentum.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Current accumulated momentum.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Screen point the zoom is anchored at.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns `true` while there is enough momentum left to produce a step.
    #[must_use]
    pub fn is_active(&self, config: &MomentumConfig) -> bool {
        self.value.abs() > config.threshold
    }

    /// Consumes one frame of momentum, returning the zoom factor to apply.
    ///
    /// Returns `None` (and zeroes the accumulator) once the momentum has
    /// decayed to the threshold, so the camera does not jitter forever on
    /// vanishing steps.
    pub fn step(&mut self, config: &MomentumConfig) -> Option<f64> {
        if !self.is_active(config) {
            self.value = 0.0;
            return None;
        }
        let delta = self.value * config.per_tick;
        self.value *= config.decay;
        Some((-delta * config.zoom_exponent).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_delta_zooms_in() {
        let config = MomentumConfig::default();
        let mut m = WheelMomentum::new(Point::ZERO);
        m.push(-100.0, Point::new(10.0, 10.0));
        let factor = m.step(&config).unwrap();
        assert!(factor > 1.0);
        assert_eq!(m.anchor(), Point::new(10.0, 10.0));
    }

    #[test]
    fn momentum_decays_to_zero() {
        let config = MomentumConfig::default();
        let mut m = WheelMomentum::new(Point::ZERO);
        m.push(250.0, Point::ZERO);
        let mut steps = 0;
        while m.step(&config).is_some() {
            steps += 1;
            assert!(steps < 10_000, "momentum never decayed");
        }
        assert_eq!(m.value(), 0.0);
        assert!(steps > 0);
    }

    #[test]
    fn below_threshold_is_ignored() {
        let config = MomentumConfig::default();
        let mut m = WheelMomentum::new(Point::ZERO);
        m.push(0.01, Point::ZERO);
        assert_eq!(m.step(&config), None);
        assert_eq!(m.value(), 0.0);
    }

    #[test]
    fn anchor_moves_without_momentum() {
        let config = MomentumConfig::default();
        let mut m = WheelMomentum::new(Point::ZERO);
        m.push(-200.0, Point::new(100.0, 100.0));
        m.step(&config);
        let left = m.value();
        m.set_anchor(Point::new(800.0, 600.0));
        assert_eq!(m.value(), left);
        assert_eq!(m.anchor(), Point::new(800.0, 600.0));
    }

    #[test]
    fn non_finite_delta_is_dropped() {
        let mut m = WheelMomentum::new(Point::ZERO);
        m.push(f64::NAN, Point::new(1.0, 2.0));
        assert_eq!(m.value(), 0.0);
        assert_eq!(m.anchor(), Point::new(1.0, 2.0));
    }
}
