// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golden-angle spiral placement for a focused group.
//!
//! Element `i` of `n` sits at angle `i * GOLDEN_ANGLE` and a radius that
//! blends square-root growth (even area coverage, like seeds in a sunflower
//! head) with linear growth (so the outer ring does not end in a hard edge):
//!
//! ```text
//! density = clamp(n / population, min_density, max_density)
//! spacing = (element_size + min_gap) / density
//! radius  = min(0.4 * sqrt(i) * spacing + 0.6 * (i / n) * max_radius, max_radius)
//! ```
//!
//! The layout is a pure function of `(n, config, frame)`.

use kurbo::{Point, Size};

/// The golden angle, `π (3 − √5)` radians.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Tuning for [`spiral_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralConfig {
    /// Visual size of an arranged element, in world units.
    pub element_size: f64,
    /// Minimum gap between neighbouring elements, in world units.
    pub min_gap: f64,
    /// Group size at which the density factor is `1.0`.
    pub population: f64,
    /// Lower clamp of the density factor.
    pub min_density: f64,
    /// Upper clamp of the density factor.
    pub max_density: f64,
    /// Weight of the square-root growth term.
    pub sqrt_weight: f64,
    /// Weight of the linear growth term.
    pub linear_weight: f64,
    /// Max radius as a fraction of viewport width.
    pub width_fraction: f64,
    /// Max radius as a fraction of viewport height.
    pub height_fraction: f64,
    /// Stacking order of the first element; later elements count down.
    pub top_z: i32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            element_size: 320.0,
            min_gap: 40.0,
            population: 14.0,
            min_density: 0.8,
            max_density: 2.2,
            sqrt_weight: 0.4,
            linear_weight: 0.6,
            width_fraction: 0.25,
            height_fraction: 0.42,
            top_z: 2000,
        }
    }
}

impl SpiralConfig {
    /// Density factor for a group of `count` elements.
    #[must_use]
    pub fn density(&self, count: usize) -> f64 {
        let population = if self.population > 0.0 {
            self.population
        } else {
            1.0
        };
        (count as f64 / population)
            .max(self.min_density)
            .min(self.max_density)
    }

    /// Ring spacing for a group of `count` elements.
    #[must_use]
    pub fn spacing(&self, count: usize) -> f64 {
        (self.element_size + self.min_gap) / self.density(count)
    }

    /// Largest radius that keeps the spiral inside the viewport at `scale`.
    #[must_use]
    pub fn max_radius(&self, viewport: Size, scale: f64) -> f64 {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        (viewport.width * self.width_fraction).min(viewport.height * self.height_fraction) / scale
    }

    /// Radius of element `index` in a group of `count`.
    #[must_use]
    pub fn radius(&self, index: usize, count: usize, max_radius: f64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let i = index as f64;
        let grown = self.sqrt_weight * i.sqrt() * self.spacing(count)
            + self.linear_weight * (i / count as f64) * max_radius;
        grown.min(max_radius)
    }
}

/// Where a spiral is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralFrame {
    /// World-space center of the spiral.
    pub center: Point,
    /// Upper bound on any element's distance from `center`.
    pub max_radius: f64,
}

/// One placed element of a spiral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSlot {
    /// Index into the group's member list.
    pub index: usize,
    /// World-space position.
    pub position: Point,
    /// Stacking order; index 0 is on top.
    pub z_index: i32,
}

/// Lays out `count` elements on a golden-angle spiral.
///
/// An empty group yields an empty layout.
///
/// ```rust
/// use kurbo::Point;
/// use driftboard_layout::spiral::{SpiralConfig, SpiralFrame, spiral_layout};
///
/// let frame = SpiralFrame { center: Point::new(-200.0, 0.0), max_radius: 300.0 };
/// let slots = spiral_layout(5, &SpiralConfig::default(), frame);
/// assert_eq!(slots.len(), 5);
/// assert_eq!(slots[0].position, frame.center);
/// assert!(slots[0].z_index > slots[4].z_index);
/// ```
#[must_use]
pub fn spiral_layout(count: usize, config: &SpiralConfig, frame: SpiralFrame) -> Vec<SpiralSlot> {
    (0..count)
        .map(|index| {
            let angle = index as f64 * GOLDEN_ANGLE;
            let radius = config.radius(index, count, frame.max_radius);
            let (sin, cos) = angle.sin_cos();
            SpiralSlot {
                index,
                position: Point::new(
                    frame.center.x + cos * radius,
                    frame.center.y + sin * radius,
                ),
                z_index: slot_z(config.top_z, index),
            }
        })
        .collect()
}

/// `top - index`, saturating at `i32::MIN`.
fn slot_z(top: i32, index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MIN, |i| top.saturating_sub(i))
}
