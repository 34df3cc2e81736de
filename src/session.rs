//! One mounted cursor: engine, listeners, frame loop and the cursor element.
//!
//! Every step of `mount` that changes the page is held by a value whose `Drop`
//! undoes it, so a mount that fails half way leaves the page as it found it.
//! Dropping a `CursorSession` tears everything down; the thread-local slot in
//! `lib.rs` makes sure that happens at most once per mount.

use crate::constants::{DESKTOP_MEDIA_QUERY, EV_MEDIA_CHANGE};
use crate::dom;
use crate::events::{self, ElementRegistry, SharedRegistry};
use crate::frame::{FrameContext, FrameLoop};
use crate::gate::{PaintGate, ViewportGate};
use crate::listeners::ListenerSet;
use crate::settings;
use crate::teardown::OnDrop;
use cursor_core::{CursorEngine, RandomJitter};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub type SharedEngine = Rc<RefCell<CursorEngine<RandomJitter<StdRng>>>>;

// fields drop in order: loop, listeners, registry, then the element
pub struct CursorSession {
    frame_loop: FrameLoop,
    listeners: ListenerSet,
    _registry: SharedRegistry,
    _cursor_el: OnDrop<Box<dyn FnOnce()>>,
}

/// Undo what mounting did to the cursor element: remove it when it was created
/// here, otherwise clear the state this session wrote.
fn cursor_element_guard(el: web::HtmlElement, created: bool) -> OnDrop<Box<dyn FnOnce()>> {
    OnDrop::new(Box::new(move || {
        if created {
            el.remove();
        } else {
            dom::set_visible(&el, true);
            _ = el.remove_attribute("data-state");
        }
    }))
}

impl CursorSession {
    pub fn mount() -> anyhow::Result<CursorSession> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let (cursor_el, created_el) = dom::ensure_cursor_element(&document)?;
        let cursor_guard = cursor_element_guard(cursor_el.clone(), created_el);

        let config = settings::load_config(&cursor_el);
        let selector: Rc<str> = config.selector_query().into();
        let engine: SharedEngine = Rc::new(RefCell::new(
            CursorEngine::new(config, RandomJitter::from_entropy())
                .map_err(|e| anyhow::anyhow!("cursor config: {}", e))?,
        ));
        match document.query_selector(&selector) {
            Ok(Some(_)) => {}
            Ok(None) => log::info!("[cursor] nothing matches {:?} yet", selector),
            Err(e) => log::warn!("[cursor] bad selector {:?}: {:?}", selector, e),
        }

        // removes the handle attributes it assigned once the last clone drops
        let registry: SharedRegistry = Rc::new(RefCell::new(ElementRegistry::new()));

        dom::apply_base_style(&cursor_el);
        let media = dom::media_query(&window, DESKTOP_MEDIA_QUERY)?;
        let mut viewport = ViewportGate::new(media.matches());
        let visible = Rc::new(Cell::new(viewport.is_visible()));
        dom::set_visible(&cursor_el, viewport.is_visible());
        if !viewport.is_visible() {
            log::info!("[cursor] {} does not match, hidden", DESKTOP_MEDIA_QUERY);
        }

        // on error the partial set drops and unregisters whatever was added
        let mut listeners = ListenerSet::new();
        events::wire_pointer_handlers(&mut listeners, &window, &engine, &registry)?;
        events::wire_hover_handlers(&mut listeners, &document, selector, &registry, &engine)?;

        let media_visible = visible.clone();
        let media_el = cursor_el.clone();
        let media_list = media.clone();
        let media_target: &web::EventTarget = media.as_ref();
        listeners.listen(media_target, EV_MEDIA_CHANGE, move |_ev: web::Event| {
            if let Some(show) = viewport.update(media_list.matches()) {
                log::info!("[cursor] viewport change, visible: {}", show);
                dom::set_visible(&media_el, show);
                media_visible.set(show);
            }
        })?;

        let frame_loop = FrameLoop::start(FrameContext {
            engine,
            registry: registry.clone(),
            cursor_el,
            document,
            last_instant: Instant::now(),
            visible,
            paint: PaintGate::new(),
        })?;

        log::info!("[cursor] mounted, {} listeners", listeners.len());
        Ok(CursorSession {
            frame_loop,
            listeners,
            _registry: registry,
            _cursor_el: cursor_guard,
        })
    }
}

impl Drop for CursorSession {
    fn drop(&mut self) {
        self.frame_loop.stop();
        let removed = self.listeners.len();
        self.listeners.clear();
        log::info!("[cursor] unmounted, removed {} listeners", removed);
    }
}
