//! Scoped DOM event listeners.
//!
//! Every registration is owned by a `ListenerSet`; dropping the set (or calling
//! `clear`) removes each listener from its target exactly once. A mount that
//! fails half way simply drops its partially filled set.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            log::warn!("[listeners] remove {} failed: {:?}", self.event, e);
        }
    }
}

#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `target` and take ownership of it.
    pub fn listen<F>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every listener, most recent first.
    pub fn clear(&mut self) {
        while let Some(l) = self.listeners.pop() {
            drop(l);
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
