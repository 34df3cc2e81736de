//! Pointer tracker: latest raw position, button state and the single active
//! attractable element.
//!
//! `active` only changes through `register_attractable` /
//! `unregister_attractable`, each of which reports the edge it caused.

use crate::geometry::{AttractableElement, ElementHandle, PointerSample, Rect};
use glam::Vec2;

/// Edge produced by an enter/leave notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    None,
    Entered,
    Exited,
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    raw: Vec2,
    last_timestamp_ms: f64,
    has_sample: bool,
    clicked: bool,
    active: Option<AttractableElement>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move. Returns false when the sample was discarded (non-finite).
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> bool {
        let p = sample.position();
        if !p.is_finite() {
            log::trace!("[tracker] dropped non-finite sample ({}, {})", sample.x, sample.y);
            return false;
        }
        self.raw = p;
        self.last_timestamp_ms = sample.timestamp_ms;
        self.has_sample = true;
        true
    }

    pub fn on_pointer_down(&mut self) {
        self.clicked = true;
    }

    pub fn on_pointer_up(&mut self) {
        self.clicked = false;
    }

    /// The pointer entered `element`. Last entered wins; a different active
    /// element is exited implicitly. Re-entering the active element is a no-op.
    pub fn register_attractable(&mut self, element: AttractableElement) -> Transition {
        match self.active {
            Some(current) if current.handle == element.handle => {
                self.active = Some(element);
                Transition::None
            }
            Some(current) => {
                log::debug!(
                    "[tracker] element {:?} replaces {:?}",
                    element.handle,
                    current.handle
                );
                self.active = Some(element);
                Transition::Entered
            }
            None => {
                self.active = Some(element);
                Transition::Entered
            }
        }
    }

    /// The pointer left `handle`, or it was removed from the document.
    /// Handles other than the active one are ignored.
    pub fn unregister_attractable(&mut self, handle: ElementHandle) -> Transition {
        match self.active {
            Some(current) if current.handle == handle => {
                self.active = None;
                Transition::Exited
            }
            _ => Transition::None,
        }
    }

    /// Refresh the active element's bounds after scroll or layout changes.
    pub fn update_bounds(&mut self, handle: ElementHandle, bounds: Rect) -> bool {
        match self.active.as_mut() {
            Some(active) if active.handle == handle && bounds.is_finite() => {
                active.bounds = bounds;
                true
            }
            _ => false,
        }
    }

    pub fn raw_position(&self) -> Vec2 {
        self.raw
    }

    pub fn last_timestamp_ms(&self) -> f64 {
        self.last_timestamp_ms
    }

    pub fn has_sample(&self) -> bool {
        self.has_sample
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn active(&self) -> Option<&AttractableElement> {
        self.active.as_ref()
    }
}
