#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod gate;
mod listeners;
mod render;
mod session;
mod settings;
mod teardown;
mod theme;

use session::CursorSession;

thread_local! {
    static SESSION: RefCell<Option<CursorSession>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-cursor starting");
    mount_cursor()
}

/// Mount the cursor for this page. Calling it while mounted does nothing.
#[wasm_bindgen]
pub fn mount_cursor() -> Result<(), JsValue> {
    if is_cursor_mounted() {
        log::warn!("[cursor] already mounted");
        return Ok(());
    }
    let session = CursorSession::mount().map_err(|e| {
        log::error!("[cursor] mount failed: {:?}", e);
        JsValue::from_str(&e.to_string())
    })?;
    SESSION.with(|s| *s.borrow_mut() = Some(session));
    Ok(())
}

/// Tear the cursor down: listeners removed, frame loop cancelled.
#[wasm_bindgen]
pub fn unmount_cursor() {
    // take first so the drop runs outside the borrow and only once
    let session = SESSION.with(|s| s.borrow_mut().take());
    drop(session);
}

#[wasm_bindgen]
pub fn is_cursor_mounted() -> bool {
    SESSION.with(|s| s.borrow().is_some())
}
