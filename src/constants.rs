// DOM names and theme colours used by the web front-end.

// Cursor element
pub const CURSOR_ELEMENT_ID: &str = "custom-cursor";
pub const CURSOR_Z_INDEX: &str = "50";

// Prefix of the configuration attributes read from the cursor element
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Attribute holding the engine handle of an attractable element, assigned the
// first time the pointer reaches it and removed on unmount
pub const HANDLE_ATTR: &str = "data-cursor-handle";

// Handles for elements that left the document are pruned past this many
pub const REGISTRY_PRUNE_AT: usize = 256;

// The cursor is hidden below the `md` breakpoint and on touch-only devices
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

// Below this spring/style distance nothing is written to the element
pub const SETTLE_EPSILON: f32 = 0.01;

// Class on <html> that selects the dark theme
pub const DARK_THEME_CLASS: &str = "dark";

// Palette (CSS colour strings)
pub const ACCENT_DARK: &str = "#8352FD"; // violet ring on the dark theme
pub const ACCENT_LIGHT: &str = "#5B2BD9"; // deeper violet for contrast on white
pub const FILL_DARK_RGB: [u8; 3] = [131, 82, 253];
pub const FILL_LIGHT_RGB: [u8; 3] = [91, 43, 217];
pub const GLOW_DARK_RGB: [u8; 3] = [145, 94, 255];
pub const GLOW_LIGHT_RGB: [u8; 3] = [91, 43, 217];
pub const GLOW_ALPHA_DARK: f32 = 0.55;
pub const GLOW_ALPHA_LIGHT: f32 = 0.35;

// Pointer and hover event names (hover is delegated from the document)
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_DOWN: &str = "pointerdown";
pub const EV_POINTER_UP: &str = "pointerup";
pub const EV_OVER: &str = "mouseover";
pub const EV_OUT: &str = "mouseout";
pub const EV_MEDIA_CHANGE: &str = "change";
