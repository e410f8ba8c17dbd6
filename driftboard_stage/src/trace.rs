// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for the stage.
//!
//! The stage keeps no history of why it ignored an event or when a tween was
//! replaced. Embedders that want to answer "why did that wheel do nothing?"
//! pass a [`StageTrace`] to
//! [`Stage::handle_with_trace`](crate::Stage::handle_with_trace) and
//! [`Stage::tick_with_trace`](crate::Stage::tick_with_trace). `()` discards
//! everything; [`TraceLog`] keeps it all.

use driftboard_view::CameraState;

use crate::input::InputKind;
use crate::transition::Phase;

/// Why an input event had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// A scripted transition owns the camera.
    Locked,
    /// A group is focused; canvas navigation is off.
    GroupActive,
    /// The event belongs to the other input profile.
    Profile,
    /// The event names an element the stage does not know.
    UnknownElement,
    /// The clicked element's group is already active.
    AlreadyFocused,
    /// Exit was requested with no group active.
    NotFocused,
    /// One-finger panning is suppressed right after a pinch.
    PinchLock,
}

/// A callback sink for stage decisions. Every method defaults to a no-op.
pub trait StageTrace {
    /// The transition moved from `from` to `to` within `generation`.
    fn phase(&mut self, from: Phase, to: Phase, generation: u64) {
        let _ = (from, to, generation);
    }

    /// An input event was ignored.
    fn dropped(&mut self, input: InputKind, reason: DropReason) {
        let _ = (input, reason);
    }

    /// A tween from an older generation was discarded.
    fn superseded(&mut self, generation: u64) {
        let _ = generation;
    }

    /// The camera came to rest at `camera`.
    fn settled(&mut self, camera: CameraState) {
        let _ = camera;
    }
}

impl StageTrace for () {}

/// One recorded [`StageTrace`] callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceRecord {
    /// See [`StageTrace::phase`].
    Phase {
        /// Previous phase.
        from: Phase,
        /// New phase.
        to: Phase,
        /// Transition generation.
        generation: u64,
    },
    /// See [`StageTrace::dropped`].
    Dropped {
        /// Ignored event kind.
        input: InputKind,
        /// Why.
        reason: DropReason,
    },
    /// See [`StageTrace::superseded`].
    Superseded {
        /// Generation of the discarded tween.
        generation: u64,
    },
    /// See [`StageTrace::settled`].
    Settled(CameraState),
}

/// Records every callback in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    records: Vec<TraceRecord>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded callbacks, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Reasons of every dropped event, oldest first.
    pub fn drops(&self) -> impl Iterator<Item = (InputKind, DropReason)> + '_ {
        self.records.iter().filter_map(|r| match *r {
            TraceRecord::Dropped { input, reason } => Some((input, reason)),
            _ => None,
        })
    }

    /// Phases entered, oldest first.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.records.iter().filter_map(|r| match *r {
            TraceRecord::Phase { to, .. } => Some(to),
            _ => None,
        })
    }
}

impl StageTrace for TraceLog {
    fn phase(&mut self, from: Phase, to: Phase, generation: u64) {
        self.records.push(TraceRecord::Phase {
            from,
            to,
            generation,
        });
    }

    fn dropped(&mut self, input: InputKind, reason: DropReason) {
        self.records.push(TraceRecord::Dropped { input, reason });
    }

    fn superseded(&mut self, generation: u64) {
        self.records.push(TraceRecord::Superseded { generation });
    }

    fn settled(&mut self, camera: CameraState) {
        self.records.push(TraceRecord::Settled(camera));
    }
}
