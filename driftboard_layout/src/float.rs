// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient floating motion.
//!
//! Each element drifts with a constant velocity. The velocity moves a target
//! point; the drawn position eases after the target. When the target leaves
//! the roaming rectangle while still heading outward, that velocity component
//! flips. Positions are never clamped.

use kurbo::{Point, Rect, Size, Vec2};
use rand::Rng;

/// Tuning for [`FloatField`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatConfig {
    /// World size as a multiple of the viewport size.
    pub world_scale: f64,
    /// Inset of the roaming rectangle from the world edge.
    pub margin: f64,
    /// Fraction of the remaining distance to its target an element covers
    /// per frame.
    pub ease: f64,
    /// Largest speed, per axis, handed out by [`FloatingElement::scatter`],
    /// in world units per frame.
    pub max_speed: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            world_scale: 1.6,
            margin: 80.0,
            ease: 0.02,
            max_speed: 0.06,
        }
    }
}

/// Motion state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingElement {
    /// Drawn position in world space.
    pub position: Point,
    /// Point the drawn position eases toward.
    pub target: Point,
    /// Per-frame motion of `target`.
    pub velocity: Vec2,
    /// Whether the simulation moves this element.
    pub floating: bool,
}

impl FloatingElement {
    /// A floating element at rest at `position`.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            target: position,
            velocity: Vec2::ZERO,
            floating: true,
        }
    }

    /// A floating element at a random spot within one viewport of the world
    /// origin (and inside `roam`), with a random velocity.
    #[must_use]
    pub fn scatter<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: Size,
        roam: Rect,
        config: &FloatConfig,
    ) -> Self {
        let half_w = (viewport.width / 2.0).min(roam.width() / 2.0).max(0.0);
        let half_h = (viewport.height / 2.0).min(roam.height() / 2.0).max(0.0);
        let center = roam.center();
        let position = Point::new(
            center.x + symmetric(rng, half_w),
            center.y + symmetric(rng, half_h),
        );
        let velocity = Vec2::new(
            symmetric(rng, config.max_speed),
            symmetric(rng, config.max_speed),
        );
        Self {
            velocity,
            ..Self::at(position)
        }
    }

    /// Teleports the element: position and target both move to `position`.
    pub fn place(&mut self, position: Point) {
        self.position = position;
        self.target = position;
    }
}

/// Uniform sample in `[-half, half)`.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * 2.0 * half
}

/// The roaming area and the per-frame integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatField {
    config: FloatConfig,
    roam: Rect,
}

impl FloatField {
    /// Creates a field for `viewport`, centered on the world origin.
    #[must_use]
    pub fn new(viewport: Size, config: FloatConfig) -> Self {
        Self {
            config,
            roam: roam_rect(viewport, &config),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FloatConfig {
        &self.config
    }

    /// The rectangle element targets bounce inside.
    #[must_use]
    pub fn roam(&self) -> Rect {
        self.roam
    }

    /// Recomputes the roaming rectangle for a new viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.roam = roam_rect(viewport, &self.config);
    }

    /// Advances one element by one frame. Non-floating elements are skipped.
    pub fn step_one(&self, element: &mut FloatingElement) {
        if !element.floating {
            return;
        }
        element.target += element.velocity;

        let t = element.target;
        let v = &mut element.velocity;
        if (t.x < self.roam.x0 && v.x < 0.0) || (t.x > self.roam.x1 && v.x > 0.0) {
            v.x = -v.x;
        }
        if (t.y < self.roam.y0 && v.y < 0.0) || (t.y > self.roam.y1 && v.y > 0.0) {
            v.y = -v.y;
        }

        element.position += (element.target - element.position) * self.config.ease;
    }

    /// Advances every element by one frame.
    pub fn step<'a>(&self, elements: impl IntoIterator<Item = &'a mut FloatingElement>) {
        for element in elements {
            self.step_one(element);
        }
    }
}

fn roam_rect(viewport: Size, config: &FloatConfig) -> Rect {
    let half_w = (viewport.width * config.world_scale / 2.0 - config.margin).max(0.0);
    let half_h = (viewport.height * config.world_scale / 2.0 - config.margin).max(0.0);
    Rect::new(-half_w, -half_h, half_w, half_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    #[test]
    fn roam_rect_is_centered_and_inset() {
        let field = FloatField::new(VIEWPORT, FloatConfig::default());
        assert_eq!(field.roam(), Rect::new(-720.0, -560.0, 720.0, 560.0));
    }

    #[test]
    fn scatter_is_seeded_and_in_range() {
        let field = FloatField::new(VIEWPORT, FloatConfig::default());
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let ea = FloatingElement::scatter(&mut a, VIEWPORT, field.roam(), field.config());
            let eb = FloatingElement::scatter(&mut b, VIEWPORT, field.roam(), field.config());
            assert_eq!(ea, eb);
            assert!(ea.position.x.abs() <= 500.0 && ea.position.y.abs() <= 400.0);
            assert!(ea.velocity.x.abs() <= 0.06 && ea.velocity.y.abs() <= 0.06);
            assert!(ea.floating);
        }
    }

    #[test]
    fn step_moves_target_and_eases_position() {
        let field = FloatField::new(VIEWPORT, FloatConfig::default());
        let mut e = FloatingElement {
            velocity: Vec2::new(1.0, -2.0),
            ..FloatingElement::at(Point::ZERO)
        };
        field.step_one(&mut e);
        assert_eq!(e.target, Point::new(1.0, -2.0));
        assert!((e.position.x - 0.02).abs() < 1e-12);
        assert!((e.position.y + 0.04).abs() < 1e-12);
    }

    #[test]
    fn frozen_elements_do_not_move() {
        let field = FloatField::new(VIEWPORT, FloatConfig::default());
        let mut e = FloatingElement {
            velocity: Vec2::new(1.0, 1.0),
            floating: false,
            ..FloatingElement::at(Point::new(3.0, 4.0))
        };
        field.step_one(&mut e);
        assert_eq!(e.position, Point::new(3.0, 4.0));
        assert_eq!(e.target, Point::new(3.0, 4.0));
    }

    #[test]
    fn velocity_reverses_at_the_edge() {
        let field = FloatField::new(VIEWPORT, FloatConfig::default());
        let mut e = FloatingElement {
            velocity: Vec2::new(5.0, 0.0),
            ..FloatingElement::at(Point::new(719.0, 0.0))
        };
        field.step_one(&mut e);
        assert_eq!(e.velocity.x, -5.0);

        // Outside but already heading inward: no flip.
        e.target = Point::new(800.0, 0.0);
        field.step_one(&mut e);
        assert_eq!(e.target.x, 795.0);
        assert_eq!(e.velocity.x, -5.0);
    }

    #[test]
    fn positions_stay_within_roam_over_time() {
        let config = FloatConfig {
            max_speed: 4.0,
            ..FloatConfig::default()
        };
        let field = FloatField::new(VIEWPORT, config);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut elements: Vec<_> = (0..40)
            .map(|_| FloatingElement::scatter(&mut rng, VIEWPORT, field.roam(), &config))
            .collect();
        let slack = field.roam().inflate(config.max_speed, config.max_speed);
        for _ in 0..5_000 {
            field.step(elements.iter_mut());
            for e in &elements {
                assert!(slack.contains(e.position), "{:?} escaped", e.position);
            }
        }
    }

    #[test]
    fn place_moves_position_and_target() {
        let mut e = FloatingElement::at(Point::ZERO);
        e.place(Point::new(9.0, 9.0));
        assert_eq!(e.position, e.target);
        assert_eq!(e.position, Point::new(9.0, 9.0));
    }
}
