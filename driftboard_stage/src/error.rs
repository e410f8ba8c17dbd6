// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

use crate::element::ElementId;

/// Error returned when a [`Stage`](crate::Stage) cannot be built.
///
/// Nothing fails once a stage exists: degenerate runtime input is clamped or
/// ignored instead.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Scale limits are non-finite, non-positive, or inverted.
    ScaleRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// A per-frame ease factor lies outside `(0, 1]`.
    EaseFactor {
        /// Which factor.
        name: &'static str,
        /// Its value.
        value: f64,
    },
    /// Wheel momentum decay lies outside `(0, 1)`.
    MomentumDecay(f64),
    /// A transition scale is non-finite or non-positive.
    TransitionScale {
        /// Which scale.
        name: &'static str,
        /// Its value.
        value: f64,
    },
    /// The arranged element size is non-finite or non-positive.
    ElementSize(f64),
    /// The viewport has a non-positive or non-finite dimension.
    Viewport(Size),
    /// Two elements share an id.
    DuplicateElement(ElementId),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max}]")
            }
            Self::EaseFactor { name, value } => {
                write!(f, "ease factor `{name}` must be in (0, 1], got {value}")
            }
            Self::MomentumDecay(value) => {
                write!(f, "momentum decay must be in (0, 1), got {value}")
            }
            Self::TransitionScale { name, value } => {
                write!(f, "transition scale `{name}` must be positive, got {value}")
            }
            Self::ElementSize(value) => {
                write!(f, "element size must be positive, got {value}")
            }
            Self::Viewport(size) => {
                write!(f, "viewport must be non-empty, got {}x{}", size.width, size.height)
            }
            Self::DuplicateElement(id) => write!(f, "duplicate element id {}", id.0),
        }
    }
}

impl core::error::Error for ConfigError {}
