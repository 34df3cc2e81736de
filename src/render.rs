use crate::theme::{rgba, Palette};
use cursor_core::RenderFrame;
use web_sys as web;

/// Write one frame's position and appearance to the cursor element.
pub fn apply_frame(el: &web::HtmlElement, frame: &RenderFrame, palette: &Palette) {
    let style = el.style();
    let p = &frame.params;
    let transform = format!(
        "translate3d({:.2}px, {:.2}px, 0)",
        frame.top_left.x, frame.top_left.y
    );
    let size = format!("{:.2}px", p.size);
    let border = format!("{:.2}px", p.border_width);
    let fill = rgba(palette.fill_rgb, p.fill_opacity);
    let shadow = if p.glow > 0.05 {
        format!(
            "0 0 {:.1}px {}",
            p.glow,
            rgba(palette.glow_rgb, palette.glow_alpha)
        )
    } else {
        "none".to_string()
    };

    _ = style.set_property("transform", &transform);
    _ = style.set_property("width", &size);
    _ = style.set_property("height", &size);
    _ = style.set_property("border-width", &border);
    _ = style.set_property("border-color", palette.ring);
    _ = style.set_property("background-color", &fill);
    _ = style.set_property("box-shadow", &shadow);
    _ = style.set_property("mix-blend-mode", p.blend.css());
    _ = el.set_attribute("data-state", frame.state.name());
}
