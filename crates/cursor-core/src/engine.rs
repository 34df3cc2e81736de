//! Cursor engine: tracker, resolver and presentation wired together.
//!
//! Input handlers (`on_pointer_*`, `register_attractable`, ...) re-resolve the
//! target immediately; `tick` advances the spring and the style tween once per
//! animation frame. Nothing here touches the DOM.
//!
//! Several pointer events usually arrive between two frames. One-shot edge
//! effects (entry snap, recoil, release nudge) are therefore latched as an
//! offset on top of the resolved target until the next `tick` renders them.

use crate::config::CursorConfig;
use crate::error::ConfigError;
use crate::geometry::{AttractableElement, ElementHandle, PointerSample, Rect};
use crate::jitter::JitterSource;
use crate::presentation::{StyleTween, VisualParams, VisualState};
use crate::resolver::{resolve, ResolveInput, ResolvedTarget};
use crate::spring::Spring;
use crate::tracker::{PointerTracker, Transition};
use glam::Vec2;
use std::time::Duration;

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    /// Smoothed cursor centre.
    pub position: Vec2,
    /// Top-left corner for a box of `params.size`.
    pub top_left: Vec2,
    pub state: VisualState,
    pub params: VisualParams,
}

pub struct CursorEngine<J: JitterSource> {
    config: CursorConfig,
    tracker: PointerTracker,
    jitter: J,
    /// Resolver output without edge effects.
    base: ResolvedTarget,
    pending_edge: Option<Vec2>,
    spring: Spring,
    style: StyleTween,
}

impl<J: JitterSource> CursorEngine<J> {
    pub fn new(config: CursorConfig, jitter: J) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tracker: PointerTracker::new(),
            jitter,
            base: ResolvedTarget::default(),
            pending_edge: None,
            spring: Spring::new(),
            style: StyleTween::default(),
        })
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) -> ResolvedTarget {
        if self.tracker.on_pointer_move(sample) {
            self.recompute(Transition::None);
        }
        self.target()
    }

    pub fn on_pointer_down(&mut self) {
        self.tracker.on_pointer_down();
        // a press drops any snap or recoil still waiting to be drawn
        self.pending_edge = None;
        self.recompute(Transition::None);
    }

    pub fn on_pointer_up(&mut self) {
        self.tracker.on_pointer_up();
        self.recompute(Transition::None);
    }

    pub fn register_attractable(&mut self, element: AttractableElement) -> Transition {
        let transition = self.tracker.register_attractable(element);
        if transition != Transition::None {
            log::debug!("[cursor] entered {:?}", element.handle);
        }
        self.recompute(transition);
        transition
    }

    pub fn unregister_attractable(&mut self, handle: ElementHandle) -> Transition {
        let transition = self.tracker.unregister_attractable(handle);
        if transition == Transition::Exited {
            log::debug!("[cursor] exited {:?}", handle);
            self.recompute(transition);
        }
        transition
    }

    pub fn update_bounds(&mut self, handle: ElementHandle, bounds: Rect) {
        if self.tracker.update_bounds(handle, bounds) {
            self.recompute(Transition::None);
        }
    }

    /// Advance one animation frame.
    pub fn tick(&mut self, dt: Duration) -> RenderFrame {
        let dt_sec = dt.as_secs_f32();
        let state = self.visual_state();
        self.style.set_target(state);
        let params = self.style.step(dt_sec, self.config.style_tau_sec);
        let target = self.target();
        self.pending_edge = None;
        let position = if self.tracker.has_sample() {
            self.spring.step(target.position, dt_sec, &self.config.spring)
        } else {
            self.spring.position
        };
        RenderFrame {
            position,
            top_left: position - Vec2::splat(params.size * 0.5),
            state,
            params,
        }
    }

    /// Resolved target including any edge effect not yet rendered.
    pub fn target(&self) -> ResolvedTarget {
        match self.pending_edge {
            Some(offset) => ResolvedTarget {
                position: self.base.position + offset,
                edge_offset: offset,
                ..self.base
            },
            None => self.base,
        }
    }

    pub fn has_pending_edge(&self) -> bool {
        self.pending_edge.is_some()
    }

    /// True when another `tick` would not visibly change the frame.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.pending_edge.is_none()
            && self.style.target() == self.visual_state()
            && self.style.is_settled(epsilon)
            && self.spring.is_settled(self.base.position, epsilon)
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::from_flags(
            self.tracker.is_clicked(),
            self.tracker.active().is_some(),
            self.base.breaking_free,
        )
    }

    pub fn smoothed_position(&self) -> Vec2 {
        self.spring.position
    }

    pub fn raw_position(&self) -> Vec2 {
        self.tracker.raw_position()
    }

    pub fn active_element(&self) -> Option<&AttractableElement> {
        self.tracker.active()
    }

    pub fn is_clicked(&self) -> bool {
        self.tracker.is_clicked()
    }

    fn recompute(&mut self, transition: Transition) {
        let input = ResolveInput {
            raw: self.tracker.raw_position(),
            active: self.tracker.active().map(|e| e.bounds),
            transition,
            previous_breaking_free: self.base.breaking_free,
            clicked: self.tracker.is_clicked(),
        };
        let mut next = resolve(&input, &self.config, &mut self.jitter);
        if next.breaking_free != self.base.breaking_free {
            log::debug!("[cursor] breaking free: {}", next.breaking_free);
        }
        if next.edge_offset != Vec2::ZERO {
            // a newer edge replaces one that was never rendered
            self.pending_edge = Some(next.edge_offset);
            next.position -= next.edge_offset;
            next.edge_offset = Vec2::ZERO;
        }
        self.base = next;
    }
}
