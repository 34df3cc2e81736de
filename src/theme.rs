use crate::constants::*;
use web_sys as web;

/// Site theme. Only colours depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Read the `dark` class on `<html>`; light when it is absent.
    pub fn detect(document: &web::Document) -> Theme {
        let dark = document
            .document_element()
            .map(|el| el.class_list().contains(DARK_THEME_CLASS))
            .unwrap_or(false);
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                ring: ACCENT_DARK,
                fill_rgb: FILL_DARK_RGB,
                glow_rgb: GLOW_DARK_RGB,
                glow_alpha: GLOW_ALPHA_DARK,
            },
            Theme::Light => Palette {
                ring: ACCENT_LIGHT,
                fill_rgb: FILL_LIGHT_RGB,
                glow_rgb: GLOW_LIGHT_RGB,
                glow_alpha: GLOW_ALPHA_LIGHT,
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub ring: &'static str,
    pub fill_rgb: [u8; 3],
    pub glow_rgb: [u8; 3],
    pub glow_alpha: f32,
}

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}
