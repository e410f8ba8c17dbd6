// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame easing toward a target value.
//!
//! These helpers implement the exponential "chase" used by the camera and the
//! floating elements: every frame, a value moves a fixed fraction of the
//! remaining distance toward its target. Left alone, that converges only
//! asymptotically, so [`approach_snapped`] snaps to the target once the
//! remaining distance drops under an epsilon.

use kurbo::Point;

/// Moves `current` a fraction `factor` of the way toward `target`.
///
/// `factor` is expected in `[0, 1]`; `1.0` jumps straight to the target.
#[must_use]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Like [`approach`], but returns `target` exactly once the result lies
/// within `epsilon` of it.
#[must_use]
pub fn approach_snapped(current: f64, target: f64, factor: f64, epsilon: f64) -> f64 {
    let next = approach(current, target, factor);
    if (target - next).abs() <= epsilon {
        target
    } else {
        next
    }
}

/// Component-wise [`approach_snapped`] for points.
#[must_use]
pub fn approach_point(current: Point, target: Point, factor: f64, epsilon: f64) -> Point {
    Point::new(
        approach_snapped(current.x, target.x, factor, epsilon),
        approach_snapped(current.y, target.y, factor, epsilon),
    )
}

/// Linear interpolation between `from` and `to` at `t`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamps `value` into `[min, max]`, tolerating an inverted range.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the bounds are
/// swapped first.
#[must_use]
pub fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.max(lo).min(hi)
}
