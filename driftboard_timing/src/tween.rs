// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Progress curve mapping linear time in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// No easing.
    Linear,
    /// Hermite smoothstep, `t² (3 − 2t)`.
    SmoothStep,
    /// Cubic ease-in-out.
    #[default]
    InOutCubic,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A fixed-duration tween sampled against an external clock.
///
/// A tween carries no values of its own; callers interpolate with the eased
/// [`Tween::progress`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween starting at `start_ms` and lasting `duration_ms`.
    ///
    /// Negative or non-finite durations are treated as zero; a zero-length
    /// tween is complete as soon as it is sampled.
    #[must_use]
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Start time in milliseconds.
    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn linear(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        self.easing.apply(self.linear(now_ms))
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.linear(now_ms) >= 1.0
    }
}
