// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Stage: the infinite-canvas engine.
//!
//! A [`Stage`] owns everything that moves on the canvas:
//!
//! - the camera, with wheel momentum, drag pan, pinch, and one-finger pan
//!   blended into one target that the rendered view eases after;
//! - the floating elements, drifting and bouncing inside a roaming rectangle;
//! - the focused-group transition, which takes the camera over to pull back,
//!   arrange one project's elements on a golden-angle spiral, and push in.
//!
//! The host feeds it [`InputEvent`]s, ticks it once per display refresh, draws
//! the resulting [`Frame`], and drains [`StageEvent`]s for description panels.
//! Nothing here touches a window system; hit testing and rendering stay with
//! the host.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use driftboard_stage::{ElementId, ElementSpec, InputEvent, Phase, Stage, StageConfig, StageEvent};
//!
//! let specs = [
//!     ElementSpec::new(1, "harbor"),
//!     ElementSpec::new(2, "harbor"),
//!     ElementSpec::new(3, "orchard"),
//! ];
//! let mut stage = Stage::new(StageConfig::pointer(), Size::new(1000.0, 800.0), specs, 7).unwrap();
//!
//! // Zoom in at the pointer.
//! stage.handle(InputEvent::Wheel { position: Point::new(400.0, 300.0), delta_y: -120.0 });
//! stage.tick(16.0);
//! assert!(stage.camera().current().scale > 1.0);
//!
//! // Focus a project and let the transition play out.
//! stage.handle(InputEvent::Click { element: ElementId(2) });
//! let mut now = 16.0;
//! while stage.phase() != Phase::Focused {
//!     now += 16.0;
//!     stage.tick(now);
//! }
//! assert_eq!(stage.arrangement().len(), 2);
//! assert!(stage.take_events().contains(&StageEvent::ShowDescription("harbor".into())));
//!
//! // Escape returns everything to where it started.
//! assert!(stage.exit());
//! assert_eq!(stage.phase(), Phase::Idle);
//! ```
//!
//! ## Tracing
//!
//! [`Stage::handle_with_trace`] and [`Stage::tick_with_trace`] report dropped
//! input, phase changes, superseded tweens, and camera settling to a
//! [`StageTrace`]. See the [`trace`] module.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`StageConfig`] and every
//!   configuration struct inside it.

mod config;
mod element;
mod error;
mod frame;
mod input;
mod stage;
pub mod trace;
mod transition;

pub use config::{InputProfile, StageConfig, TransitionConfig, VisualConfig};
pub use element::{Element, ElementId, ElementSpec, ElementVisual, ProjectId};
pub use error::ConfigError;
pub use frame::{ElementFrame, Frame, StageEvent};
pub use input::{InputEvent, InputKind, Key, PointerButton, TouchPoints};
pub use stage::Stage;
pub use trace::{DropReason, StageTrace, TraceLog, TraceRecord};
pub use transition::{Phase, Placement};

pub use driftboard_layout::float::FloatConfig;
pub use driftboard_layout::spiral::SpiralConfig;
pub use driftboard_timing::Easing;
pub use driftboard_view::{Camera, CameraConfig, CameraState, CameraTransform};
