use crate::constants::SETTLE_EPSILON;
use crate::events::SharedRegistry;
use crate::gate::PaintGate;
use crate::render;
use crate::session::SharedEngine;
use crate::theme::Theme;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: SharedEngine,
    pub registry: SharedRegistry,
    pub cursor_el: web::HtmlElement,
    pub document: web::Document,
    pub last_instant: Instant,
    /// Cleared while the viewport media query does not match.
    pub visible: Rc<Cell<bool>>,
    pub paint: PaintGate<Theme>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut engine = self.engine.borrow_mut();

        // an element removed from the document counts as a leave
        if let Some(handle) = engine.active_element().map(|a| a.handle) {
            let detached = self
                .registry
                .borrow()
                .get(handle)
                .map_or(true, |el| !el.is_connected());
            if detached {
                log::debug!("[frame] active element {:?} detached", handle);
                engine.unregister_attractable(handle);
            }
        }

        let frame = engine.tick(dt);
        let settled = engine.is_settled(SETTLE_EPSILON);
        drop(engine);

        if !self.visible.get() {
            self.paint.invalidate();
            return;
        }
        let theme = Theme::detect(&self.document);
        if self.paint.needs_paint(settled, theme) {
            render::apply_frame(&self.cursor_el, &frame, &theme.palette());
        }
    }
}

/// requestAnimationFrame loop that can be stopped exactly once.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    request_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: FrameContext) -> anyhow::Result<FrameLoop> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let running = Rc::new(Cell::new(true));
        let request_id = Rc::new(Cell::new(None::<i32>));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let request_tick = request_id.clone();
        let mut frame_ctx = frame_ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            request_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.frame();
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => request_tick.set(Some(id)),
                    Err(e) => log::error!("[frame] requestAnimationFrame: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => request_id.set(Some(id)),
            other => {
                tick.borrow_mut().take();
                return Err(anyhow::anyhow!("requestAnimationFrame: {:?}", other));
            }
        }

        Ok(FrameLoop {
            running,
            request_id,
            tick,
        })
    }

    /// Cancel the pending frame and free the closure. Later calls do nothing.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.request_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> Rc -> closure cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
