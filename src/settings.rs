use crate::constants::CONFIG_ATTR_PREFIX;
use cursor_core::CursorConfig;
use web_sys as web;

/// Defaults plus any `data-*` overrides found on the cursor element.
///
/// A bad attribute is logged and skipped; if the combination fails validation
/// the defaults are used as a whole.
pub fn load_config(cursor_el: &web::Element) -> CursorConfig {
    let mut cfg = CursorConfig::default();
    for key in CursorConfig::OVERRIDE_KEYS {
        let attr = format!("{}{}", CONFIG_ATTR_PREFIX, key);
        if let Some(value) = cursor_el.get_attribute(&attr) {
            if let Err(e) = cfg.apply_override(key, &value) {
                log::warn!("[cursor] ignoring {}: {}", attr, e);
            }
        }
    }
    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[cursor] invalid configuration ({}), using defaults", e);
            CursorConfig::default()
        }
    }
}
