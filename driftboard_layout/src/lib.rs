// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Layout: where canvas elements go.
//!
//! - [`spiral`]: deterministic golden-angle spiral for a focused group.
//! - [`float`]: the ambient drift of unfocused elements, with velocity
//!   reflection at the edge of a roaming rectangle.
//!
//! Both work in world coordinates centered on the world origin, and neither
//! knows about the camera: callers pick the spiral center and radius from
//! their view geometry and decide when the float simulation runs.

pub mod float;
pub mod spiral;
