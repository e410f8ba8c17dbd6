// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A latch that stays engaged until released, with an optional grace period.
///
/// Typical use: suppress one gesture for a moment after another ends, so that
/// fingers lifted a few milliseconds apart do not register as a new gesture.
///
/// ```rust
/// use driftboard_timing::Hold;
///
/// let mut hold = Hold::default();
/// hold.engage();
/// assert!(hold.is_held(0.0));
///
/// hold.release_after(100.0, 60.0);
/// assert!(hold.is_held(159.0));
/// assert!(!hold.is_held(160.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Hold {
    /// Not engaged.
    #[default]
    Free,
    /// Engaged until explicitly released.
    Held,
    /// Engaged until the given time in milliseconds.
    Until(f64),
}

impl Hold {
    /// Engages the latch indefinitely.
    pub fn engage(&mut self) {
        *self = Self::Held;
    }

    /// Schedules release `grace_ms` after `now_ms`.
    ///
    /// Has no effect on a free latch.
    pub fn release_after(&mut self, now_ms: f64, grace_ms: f64) {
        if *self == Self::Free {
            return;
        }
        *self = if grace_ms > 0.0 {
            Self::Until(now_ms + grace_ms)
        } else {
            Self::Free
        };
    }

    /// Releases immediately.
    pub fn release(&mut self) {
        *self = Self::Free;
    }

    /// Returns `true` while the latch is engaged at `now_ms`.
    #[must_use]
    pub fn is_held(&self, now_ms: f64) -> bool {
        match *self {
            Self::Free => false,
            Self::Held => true,
            Self::Until(until) => now_ms < until,
        }
    }

    /// Collapses an expired [`Hold::Until`] into [`Hold::Free`].
    pub fn expire(&mut self, now_ms: f64) {
        if let Self::Until(until) = *self
            && now_ms >= until
        {
            *self = Self::Free;
        }
    }
}
