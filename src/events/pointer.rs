use crate::constants::{EV_POINTER_DOWN, EV_POINTER_MOVE, EV_POINTER_UP};
use crate::dom;
use crate::events::SharedRegistry;
use crate::listeners::ListenerSet;
use crate::session::SharedEngine;
use cursor_core::PointerSample;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level pointer move/down/up.
pub fn wire_pointer_handlers(
    listeners: &mut ListenerSet,
    window: &web::Window,
    engine: &SharedEngine,
    registry: &SharedRegistry,
) -> anyhow::Result<()> {
    let target: &web::EventTarget = window.as_ref();

    let move_engine = engine.clone();
    let move_registry = registry.clone();
    listeners.listen(target, EV_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let sample = PointerSample::new(ev.client_x() as f32, ev.client_y() as f32, ev.time_stamp());
        let mut engine = move_engine.borrow_mut();
        // the element may have scrolled since it was entered
        if let Some(active) = engine.active_element().map(|a| a.handle) {
            if let Some(el) = move_registry.borrow().get(active) {
                engine.update_bounds(active, dom::element_rect(el));
            }
        }
        engine.on_pointer_move(sample);
    })?;

    let down_engine = engine.clone();
    listeners.listen(target, EV_POINTER_DOWN, move |_ev: web::Event| {
        down_engine.borrow_mut().on_pointer_down();
    })?;

    let up_engine = engine.clone();
    listeners.listen(target, EV_POINTER_UP, move |_ev: web::Event| {
        up_engine.borrow_mut().on_pointer_up();
    })?;

    Ok(())
}
