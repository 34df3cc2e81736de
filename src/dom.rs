use crate::constants::{CURSOR_ELEMENT_ID, CURSOR_Z_INDEX};
use cursor_core::Rect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// The `MediaQueryList` for `query`, so its `change` event can be observed.
pub fn media_query(window: &web::Window, query: &str) -> anyhow::Result<web::MediaQueryList> {
    window
        .match_media(query)
        .map_err(|e| anyhow::anyhow!("matchMedia {}: {:?}", query, e))?
        .ok_or_else(|| anyhow::anyhow!("matchMedia {} unsupported", query))
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let style = el.style();
    if visible {
        _ = style.remove_property("display");
    } else {
        _ = style.set_property("display", "none");
    }
}

/// Find `#custom-cursor`, creating and appending it to `<body>` when absent.
/// Returns the element and whether it was created here.
pub fn ensure_cursor_element(document: &web::Document) -> anyhow::Result<(web::HtmlElement, bool)> {
    if let Some(el) = document.get_element_by_id(CURSOR_ELEMENT_ID) {
        let el = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", CURSOR_ELEMENT_ID, e))?;
        return Ok((el, false));
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(CURSOR_ELEMENT_ID);
    body.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((el, true))
}

/// Fixed, non-interactive, round base style for the cursor element.
pub fn apply_base_style(el: &web::HtmlElement) {
    let style = el.style();
    for (k, v) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("border-radius", "50%"),
        ("border-style", "solid"),
        ("pointer-events", "none"),
        ("z-index", CURSOR_Z_INDEX),
        ("will-change", "transform, width, height"),
    ] {
        _ = style.set_property(k, v);
    }
}
