// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Timing: time-based animation primitives.
//!
//! Everything here is driven by a caller-supplied clock in milliseconds
//! (typically the frame timestamp); nothing reads the system time.
//!
//! - [`Tween`]: a fixed-duration progress curve with an [`Easing`].
//! - [`Hold`]: a latch that stays engaged until released, optionally with a
//!   grace period after the release request.
//!
//! ```rust
//! use driftboard_timing::{Easing, Tween};
//!
//! let tween = Tween::new(1_000.0, 500.0, Easing::InOutCubic);
//! assert_eq!(tween.progress(1_000.0), 0.0);
//! assert_eq!(tween.progress(1_250.0), 0.5);
//! assert!(tween.is_done(1_500.0));
//! ```

mod hold;
mod tween;

pub use hold::Hold;
pub use tween::{Easing, Tween};
