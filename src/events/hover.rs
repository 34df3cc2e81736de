use crate::constants::{EV_OUT, EV_OVER, HANDLE_ATTR, REGISTRY_PRUNE_AT};
use crate::dom;
use crate::events::delegate;
use crate::listeners::ListenerSet;
use crate::session::SharedEngine;
use cursor_core::{AttractableElement, ElementHandle};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedRegistry = Rc<RefCell<ElementRegistry>>;

/// Attractable elements the pointer has reached, keyed by the handle the
/// engine sees. Handles are assigned on first hover, so elements added after
/// mount attract like the rest.
#[derive(Default)]
pub struct ElementRegistry {
    elements: FnvHashMap<ElementHandle, web::Element>,
    next: u32,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle already assigned to `el`, read back from its attribute.
    ///
    /// A copied attribute (e.g. from `cloneNode`) names another element and
    /// does not count.
    pub fn handle_of(&self, el: &web::Element) -> Option<ElementHandle> {
        let handle = ElementHandle(el.get_attribute(HANDLE_ATTR)?.parse().ok()?);
        let node: &web::Node = el.as_ref();
        let known = self.elements.get(&handle)?;
        known.is_same_node(Some(node)).then_some(handle)
    }

    /// Handle for `el`, assigning a fresh one on first sight.
    pub fn handle_for(&mut self, el: &web::Element) -> ElementHandle {
        if let Some(handle) = self.handle_of(el) {
            return handle;
        }
        if self.elements.len() >= REGISTRY_PRUNE_AT {
            self.prune();
        }
        let handle = ElementHandle(self.next);
        self.next = self.next.wrapping_add(1);
        _ = el.set_attribute(HANDLE_ATTR, &handle.0.to_string());
        self.elements.insert(handle, el.clone());
        handle
    }

    pub fn get(&self, handle: ElementHandle) -> Option<&web::Element> {
        self.elements.get(&handle)
    }

    /// Forget elements that are no longer in the document.
    fn prune(&mut self) {
        let before = self.elements.len();
        self.elements.retain(|_, el| {
            let keep = el.is_connected();
            if !keep {
                _ = el.remove_attribute(HANDLE_ATTR);
            }
            keep
        });
        log::debug!(
            "[hover] pruned {} detached elements",
            before - self.elements.len()
        );
    }
}

impl Drop for ElementRegistry {
    fn drop(&mut self) {
        for el in self.elements.values() {
            _ = el.remove_attribute(HANDLE_ATTR);
        }
    }
}

/// Closest element matching `selector` at or above an event target.
fn attractable(target: Option<web::EventTarget>, selector: &str) -> Option<web::Element> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

/// One `mouseover` / `mouseout` pair on the document resolves every hover
/// through `closest(selector)`.
pub fn wire_hover_handlers(
    listeners: &mut ListenerSet,
    document: &web::Document,
    selector: Rc<str>,
    registry: &SharedRegistry,
    engine: &SharedEngine,
) -> anyhow::Result<()> {
    let target: &web::EventTarget = document.as_ref();

    let over_engine = engine.clone();
    let over_registry = registry.clone();
    let over_selector = selector.clone();
    listeners.listen(target, EV_OVER, move |ev: web::Event| {
        let Some(el) = attractable(ev.target(), &over_selector) else {
            return;
        };
        let handle = over_registry.borrow_mut().handle_for(&el);
        let mut engine = over_engine.borrow_mut();
        let active = engine.active_element().map(|a| a.handle);
        if let Some(handle) = delegate::entered(Some(handle), active) {
            engine.register_attractable(AttractableElement::new(handle, dom::element_rect(&el)));
        }
    })?;

    let out_engine = engine.clone();
    let out_registry = registry.clone();
    listeners.listen(target, EV_OUT, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (from, to) = {
            let registry = out_registry.borrow();
            let lookup = |t| attractable(t, &selector).and_then(|el| registry.handle_of(&el));
            (lookup(ev.target()), lookup(ev.related_target()))
        };
        if let Some(handle) = delegate::left(from, to) {
            out_engine.borrow_mut().unregister_attractable(handle);
        }
    })?;

    Ok(())
}
