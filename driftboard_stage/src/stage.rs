// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use driftboard_gesture::drag::{ElementDrag, PanDrag};
use driftboard_gesture::pinch::{PinchZoom, TouchPair};
use driftboard_gesture::touch_pan::TouchPan;
use driftboard_gesture::wheel::WheelZoom;
use driftboard_layout::float::{FloatField, FloatingElement};
use driftboard_layout::spiral::{SpiralFrame, spiral_layout};
use driftboard_timing::Tween;
use driftboard_view::{Camera, CameraState};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{InputProfile, StageConfig, validate_viewport};
use crate::element::{Element, ElementId, ElementSpec, ElementVisual, Elements, ProjectId};
use crate::error::ConfigError;
use crate::frame::{ElementFrame, Frame, StageEvent};
use crate::input::{InputEvent, Key, PointerButton};
use crate::trace::{DropReason, StageTrace};
use crate::transition::{CameraTween, GroupTransition, Phase, Placement};

/// The engine: camera, elements, input routing, and the group transition.
///
/// A stage is driven from outside. The host forwards input with
/// [`Stage::handle`] as it arrives, calls [`Stage::tick`] once per display
/// refresh with a monotonic clock, and then draws [`Stage::frame`]. Events
/// handled between two ticks see the clock of the earlier tick.
///
/// While a group transition is scripting the camera, or while a group is
/// focused, canvas navigation (wheel, pan, pinch) is ignored. Exit is always
/// available.
#[derive(Clone, Debug)]
pub struct Stage {
    config: StageConfig,
    camera: Camera,
    field: FloatField,
    elements: Elements,
    transition: GroupTransition,
    pan: PanDrag,
    element_drag: ElementDrag<ElementId>,
    pinch: PinchZoom,
    touch_pan: TouchPan,
    wheel: WheelZoom,
    events: Vec<StageEvent>,
    now_ms: f64,
    settled: bool,
}

impl Stage {
    /// Builds a stage and scatters `specs` around the world origin.
    ///
    /// Placement and drift velocities come from a generator seeded with
    /// `seed`, so equal inputs give equal stages.
    pub fn new(
        config: StageConfig,
        viewport: Size,
        specs: impl IntoIterator<Item = ElementSpec>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_viewport(viewport)?;

        let camera = Camera::new(viewport, config.camera);
        let field = FloatField::new(viewport, config.float);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut elements = Elements::default();
        for spec in specs {
            let motion = FloatingElement::scatter(&mut rng, viewport, field.roam(), field.config());
            elements.push(Element {
                id: spec.id,
                project: spec.project,
                home: motion.position,
                motion,
                visual: ElementVisual::resting(&config.visual),
            })?;
        }

        Ok(Self {
            wheel: WheelZoom::new(camera.center()),
            pinch: PinchZoom::new(config.pinch_lock_ms),
            config,
            camera,
            field,
            elements,
            transition: GroupTransition::default(),
            pan: PanDrag::default(),
            element_drag: ElementDrag::default(),
            touch_pan: TouchPan::default(),
            events: Vec::new(),
            now_ms: 0.0,
            settled: true,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.transition.phase
    }

    /// The active project, if a group is active or becoming active.
    #[must_use]
    pub fn active_project(&self) -> Option<&ProjectId> {
        self.transition.active.as_ref()
    }

    /// Transition generation. Every activation and exit starts a new one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.transition.generation
    }

    /// Camera target captured when the active group was activated.
    #[must_use]
    pub fn stored_camera(&self) -> Option<CameraState> {
        self.transition.stored_camera
    }

    /// Where the focused group's members were placed.
    ///
    /// Empty until the group has been arranged.
    #[must_use]
    pub fn arrangement(&self) -> &[Placement] {
        &self.transition.arrangement
    }

    /// Clock of the latest tick, in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// All elements, in the order they were given.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    /// Looks up an element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Returns `true` while one-finger panning is suppressed after a pinch.
    #[must_use]
    pub fn is_pinch_locked(&self) -> bool {
        self.pinch.is_locked(self.now_ms)
    }

    /// Drains the outward events emitted since the previous call.
    pub fn take_events(&mut self) -> Vec<StageEvent> {
        core::mem::take(&mut self.events)
    }

    /// Resizes the viewport. Empty or non-finite sizes are ignored.
    pub fn set_viewport(&mut self, viewport: Size) {
        if validate_viewport(viewport).is_err() {
            return;
        }
        self.camera.set_viewport(viewport);
        self.field.set_viewport(viewport);
    }

    /// What to draw for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            camera: self.camera.transform(),
            elements: self
                .elements
                .iter()
                .map(|e| ElementFrame {
                    id: e.id,
                    position: e.motion.position,
                    z_index: e.visual.z_index,
                    opacity: e.visual.opacity,
                    width: e.visual.width,
                })
                .collect(),
        }
    }

    /// Routes one input event.
    pub fn handle(&mut self, event: InputEvent) {
        self.handle_with_trace(event, &mut ());
    }

    /// Like [`Stage::handle`], reporting ignored events to `trace`.
    pub fn handle_with_trace(&mut self, event: InputEvent, trace: &mut impl StageTrace) {
        let kind = event.kind();
        if let Err(reason) = self.route(event, trace) {
            trace.dropped(kind, reason);
        }
    }

    /// Advances one frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        self.tick_with_trace(now_ms, &mut ());
    }

    /// Like [`Stage::tick`], reporting phase changes and camera settling to
    /// `trace`.
    ///
    /// The clock never runs backwards: an earlier or non-finite `now_ms`
    /// reuses the previous time.
    pub fn tick_with_trace(&mut self, now_ms: f64, trace: &mut impl StageTrace) {
        if now_ms.is_finite() && now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        self.pinch.expire(self.now_ms);

        match self.transition.phase {
            Phase::Idle => {
                self.field
                    .step(self.elements.iter_mut().map(|e| &mut e.motion));
                self.integrate(trace);
            }
            Phase::Focused => self.integrate(trace),
            _ => self.step_tween(trace),
        }
    }

    /// Activates the group of `element`, as a click on it would.
    ///
    /// Returns `false` when the element is unknown or its group is already
    /// active.
    pub fn select(&mut self, element: ElementId) -> bool {
        self.select_traced(element, &mut ()).is_ok()
    }

    /// Activates `project`. A different active group is collapsed first.
    pub fn activate(&mut self, project: ProjectId) {
        self.activate_traced(project, &mut ());
    }

    /// Leaves the active group, restoring elements and camera target.
    ///
    /// Returns `false` when no group was active.
    pub fn exit(&mut self) -> bool {
        self.exit_traced(&mut ()).is_ok()
    }

    fn route(&mut self, event: InputEvent, trace: &mut impl StageTrace) -> Result<(), DropReason> {
        match event {
            InputEvent::PointerDown {
                position,
                button,
                hit,
            } => self.pointer_down(position, button, hit),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { .. } => {
                self.element_drag.end();
                self.pan.end();
                Ok(())
            }
            InputEvent::Click { element } => self.select_traced(element, trace),
            InputEvent::Wheel { position, delta_y } => {
                self.wheel.track(position, &mut self.camera);
                self.camera_gate(InputProfile::Pointer)?;
                self.wheel.scroll(delta_y, &mut self.camera);
                Ok(())
            }
            InputEvent::TouchStart { touches } => self.touch_start(&touches),
            InputEvent::TouchMove { touches } => self.touch_move(&touches),
            InputEvent::TouchEnd { touches } => self.touch_end(&touches),
            InputEvent::Key(Key::Escape) => self.exit_traced(trace),
            InputEvent::Key(Key::Other) => Ok(()),
        }
    }

    /// Checks whether canvas navigation from `profile` may write the camera.
    fn camera_gate(&self, profile: InputProfile) -> Result<(), DropReason> {
        if self.config.profile != profile {
            return Err(DropReason::Profile);
        }
        let phase = self.transition.phase;
        if phase.is_locked() {
            return Err(DropReason::Locked);
        }
        if phase.is_group_active() {
            return Err(DropReason::GroupActive);
        }
        Ok(())
    }

    fn is_active_member(&self, id: ElementId) -> bool {
        match (&self.transition.active, self.elements.get(id)) {
            (Some(active), Some(element)) => &element.project == active,
            _ => false,
        }
    }

    fn pointer_down(
        &mut self,
        position: Point,
        button: PointerButton,
        hit: Option<ElementId>,
    ) -> Result<(), DropReason> {
        if self.transition.phase == Phase::Focused
            && button == PointerButton::Primary
            && let Some(id) = hit
            && self.is_active_member(id)
        {
            let dragged_z = self.config.visual.dragged_z;
            if let Some(element) = self.elements.get_mut(id) {
                element.visual.z_index = dragged_z;
                self.element_drag
                    .start(id, position, element.motion.position);
            }
            return Ok(());
        }

        self.camera_gate(InputProfile::Pointer)?;
        // Presses on elements and secondary buttons never pan.
        if button == PointerButton::Primary && hit.is_none() {
            self.pan.start(position, &mut self.camera);
        }
        Ok(())
    }

    fn pointer_move(&mut self, position: Point) -> Result<(), DropReason> {
        self.wheel.track(position, &mut self.camera);
        if let Some((id, moved)) = self
            .element_drag
            .update(position, self.camera.current().scale)
        {
            if let Some(element) = self.elements.get_mut(id) {
                element.motion.place(moved);
            }
            return Ok(());
        }
        if self.pan.is_dragging() {
            self.camera_gate(InputProfile::Pointer)?;
            self.pan.update(position, &mut self.camera);
        }
        Ok(())
    }

    fn touch_start(&mut self, touches: &[Point]) -> Result<(), DropReason> {
        self.camera_gate(InputProfile::Touch)?;
        if let Some(pair) = TouchPair::from_touches(touches) {
            self.touch_pan.end();
            self.pinch.begin(pair, &self.camera);
            return Ok(());
        }
        if let [touch] = touches {
            if self.pinch.is_active() || self.pinch.is_locked(self.now_ms) {
                return Err(DropReason::PinchLock);
            }
            self.touch_pan.begin(*touch);
        }
        Ok(())
    }

    fn touch_move(&mut self, touches: &[Point]) -> Result<(), DropReason> {
        self.camera_gate(InputProfile::Touch)?;
        if self.pinch.is_active() {
            if let Some(pair) = TouchPair::from_touches(touches) {
                self.pinch.update(pair, &mut self.camera);
            }
            return Ok(());
        }
        if let [touch] = touches {
            if self.pinch.is_locked(self.now_ms) {
                return Err(DropReason::PinchLock);
            }
            self.touch_pan.update(*touch, &mut self.camera);
        }
        Ok(())
    }

    fn touch_end(&mut self, remaining: &[Point]) -> Result<(), DropReason> {
        if self.config.profile != InputProfile::Touch {
            return Err(DropReason::Profile);
        }
        self.touch_pan.end();
        self.pinch
            .end(remaining.len(), &mut self.camera, self.now_ms);
        Ok(())
    }

    fn select_traced(
        &mut self,
        element: ElementId,
        trace: &mut impl StageTrace,
    ) -> Result<(), DropReason> {
        let project = self
            .elements
            .get(element)
            .map(|e| e.project.clone())
            .ok_or(DropReason::UnknownElement)?;
        if self.transition.active.as_ref() == Some(&project) {
            return Err(DropReason::AlreadyFocused);
        }
        self.activate_traced(project, trace);
        Ok(())
    }

    fn activate_traced(&mut self, project: ProjectId, trace: &mut impl StageTrace) {
        if self.transition.phase.is_group_active() {
            self.restore(trace);
        }
        self.cancel_gestures();

        let generation = self.transition.bump();
        self.transition.stored_camera = Some(self.camera.target());
        self.transition.active = Some(project.clone());

        let dimmed = self.config.visual.dimmed_opacity;
        for element in self.elements.iter_mut() {
            element.motion.floating = false;
            element.visual.opacity = if element.project == project {
                1.0
            } else {
                dimmed
            };
        }

        let cfg = self.config.transition;
        self.transition.tween = Some(CameraTween::zoom_about(
            generation,
            Tween::new(self.now_ms, cfg.zoom_out_ms, cfg.easing),
            self.camera.current(),
            self.camera.center(),
            self.camera.clamp_scale(cfg.pulled_back_scale),
        ));
        self.set_phase(Phase::ZoomingOut, trace);
    }

    fn exit_traced(&mut self, trace: &mut impl StageTrace) -> Result<(), DropReason> {
        if !self.transition.phase.is_group_active() {
            return Err(DropReason::NotFocused);
        }
        self.restore(trace);
        Ok(())
    }

    /// Collapses the active group back to the floating canvas, synchronously.
    fn restore(&mut self, trace: &mut impl StageTrace) {
        if let Some(tween) = self.transition.tween.take() {
            trace.superseded(tween.generation);
        }
        self.transition.bump();
        self.set_phase(Phase::Restoring, trace);
        self.cancel_gestures();

        let resting = ElementVisual::resting(&self.config.visual);
        for element in self.elements.iter_mut() {
            element.motion.place(element.home);
            element.motion.floating = true;
            element.visual = resting;
        }
        if let Some(stored) = self.transition.stored_camera {
            self.camera.set_target(stored.origin, stored.scale);
        }
        self.transition.clear();
        self.settled = false;

        self.events.push(StageEvent::HideDescriptions);
        self.set_phase(Phase::Idle, trace);
    }

    fn cancel_gestures(&mut self) {
        self.pan.end();
        self.element_drag.end();
        self.pinch.cancel();
        self.touch_pan.end();
        self.camera.clear_momentum();
    }

    fn set_phase(&mut self, to: Phase, trace: &mut impl StageTrace) {
        let from = self.transition.phase;
        if from == to {
            return;
        }
        self.transition.phase = to;
        trace.phase(from, to, self.transition.generation);
        self.events.push(StageEvent::PhaseChanged { from, to });
    }

    fn integrate(&mut self, trace: &mut impl StageTrace) {
        let step = self.camera.tick();
        if step.settled && !self.settled {
            trace.settled(self.camera.current());
        }
        self.settled = step.settled;
    }

    /// Samples the scripted tween and chains the phases that follow it.
    fn step_tween(&mut self, trace: &mut impl StageTrace) {
        loop {
            let Some(active) = self.transition.tween else {
                return;
            };
            if active.generation != self.transition.generation {
                self.transition.tween = None;
                trace.superseded(active.generation);
                return;
            }

            let state = active.sample(self.now_ms);
            self.camera.jump_to(state);
            if !active.tween.is_done(self.now_ms) {
                return;
            }
            self.transition.tween = None;

            match self.transition.phase {
                Phase::ZoomingOut => {
                    self.arrange(trace);
                    self.begin_zoom_in(trace);
                }
                Phase::ZoomingIn => {
                    self.finish_focus(trace);
                    return;
                }
                _ => return,
            }
        }
    }

    /// The camera state a focused group is shown at: the camera home at the
    /// focus scale. It needs no clamping, so it holds once the push-in ends.
    fn focus_view(&self) -> CameraState {
        let scale = self.camera.clamp_scale(self.config.transition.focus_scale);
        CameraState::new(self.camera.center(), scale)
    }

    /// Places the active group on a spiral centered on the world point the
    /// focus view shows under the focus anchor.
    fn arrange(&mut self, trace: &mut impl StageTrace) {
        self.set_phase(Phase::Arranging, trace);
        self.transition.arrangement.clear();
        let Some(project) = self.transition.active.clone() else {
            return;
        };

        let members = self.elements.members(&project);
        let viewport = self.camera.viewport();
        let view = self.focus_view();
        let anchor = self.config.transition.focus_anchor(viewport);
        let frame = SpiralFrame {
            center: view.screen_to_world(anchor),
            max_radius: self.config.spiral.max_radius(viewport, view.scale),
        };
        let slots = spiral_layout(members.len(), &self.config.spiral, frame);

        let width = self.config.spiral.element_size;
        for (slot, &index) in slots.iter().zip(&members) {
            let element = self.elements.at_mut(index);
            element.motion.place(slot.position);
            element.visual = ElementVisual {
                z_index: slot.z_index,
                opacity: 1.0,
                width,
            };
            self.transition.arrangement.push(Placement {
                element: element.id,
                position: slot.position,
                z_index: slot.z_index,
            });
        }
    }

    fn begin_zoom_in(&mut self, trace: &mut impl StageTrace) {
        let cfg = self.config.transition;
        self.transition.tween = Some(CameraTween::between(
            self.transition.generation,
            Tween::new(self.now_ms, cfg.zoom_in_ms, cfg.easing),
            self.camera.current(),
            self.focus_view(),
        ));
        self.set_phase(Phase::ZoomingIn, trace);
    }

    fn finish_focus(&mut self, trace: &mut impl StageTrace) {
        self.settled = false;
        self.set_phase(Phase::Focused, trace);
        if let Some(project) = self.transition.active.clone() {
            self.events.push(StageEvent::ShowDescription(project));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceLog, TraceRecord};

    fn stage(config: StageConfig) -> Stage {
        let specs = (0..6).map(|i| ElementSpec::new(i, if i < 4 { "alpha" } else { "beta" }));
        Stage::new(config, Size::new(1000.0, 800.0), specs, 11).unwrap()
    }

    #[test]
    fn new_rejects_bad_input() {
        let err = Stage::new(
            StageConfig::pointer(),
            Size::new(0.0, 10.0),
            Vec::<ElementSpec>::new(),
            0,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::Viewport(Size::new(0.0, 10.0)));

        let dupes = [ElementSpec::new(1, "a"), ElementSpec::new(1, "b")];
        let err = Stage::new(StageConfig::pointer(), Size::new(10.0, 10.0), dupes, 0).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateElement(ElementId(1)));
    }

    #[test]
    fn same_seed_same_stage() {
        let a = stage(StageConfig::pointer());
        let b = stage(StageConfig::pointer());
        assert_eq!(a.frame(), b.frame());
        for element in a.elements() {
            assert_eq!(element.position(), element.home());
            assert!(element.is_floating());
        }
    }

    #[test]
    fn gate_reports_reason() {
        let mut stage = stage(StageConfig::pointer());
        assert_eq!(stage.camera_gate(InputProfile::Pointer), Ok(()));
        assert_eq!(
            stage.camera_gate(InputProfile::Touch),
            Err(DropReason::Profile)
        );
        stage.activate("alpha".into());
        assert_eq!(
            stage.camera_gate(InputProfile::Pointer),
            Err(DropReason::Locked)
        );
    }

    #[test]
    fn stale_tween_is_discarded() {
        let mut stage = stage(StageConfig::pointer());
        stage.activate("alpha".into());
        if let Some(tween) = stage.transition.tween.as_mut() {
            tween.generation = stage.transition.generation.wrapping_sub(1);
        }
        let before = stage.camera.current();
        let mut log = TraceLog::new();
        stage.tick_with_trace(100.0, &mut log);
        assert_eq!(stage.camera.current(), before);
        assert!(stage.transition.tween.is_none());
        assert!(
            log.records()
                .iter()
                .any(|r| matches!(r, TraceRecord::Superseded { .. }))
        );
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut stage = stage(StageConfig::pointer());
        stage.tick(50.0);
        stage.tick(20.0);
        stage.tick(f64::NAN);
        assert_eq!(stage.now_ms(), 50.0);
    }
}
