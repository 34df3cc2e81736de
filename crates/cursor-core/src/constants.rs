// Default tuning for the magnetic cursor. Every value here can be overridden
// through `CursorConfig`; these are starting points, not contract values.

// Attraction radii (CSS px, measured from the element centre)
pub const STICKY_RADIUS: f32 = 100.0; // outer edge of influence
pub const BREAKING_POINT: f32 = 60.0; // inner band with strong pull

// Pull strength curve
pub const MAX_PULL: f32 = 1.0; // pull at the element centre
pub const FAR_PULL: f32 = 0.35; // pull at the breaking point, decays to 0 at the sticky radius
pub const NEAR_EXPONENT: f32 = 0.5; // shape of the near-band curve
pub const FAR_EXPONENT: f32 = 0.33; // shape of the far-band curve
pub const BREAKING_FREE_FRACTION: f32 = 0.88; // fraction of the sticky radius that starts breaking free

// Edge effects (CSS px unless noted)
pub const SNAP_BIAS: f32 = 0.25; // extra pull on the first frame inside an element (0..1)
pub const RECOIL_DISTANCE: f32 = 8.0; // overshoot when breaking free completes
pub const RELEASE_JITTER: f32 = 3.0; // random nudge when an element is left

// Spring smoothing of the rendered position
pub const SPRING_STIFFNESS: f32 = 500.0;
pub const SPRING_DAMPING: f32 = 32.0; // just above critical (2 * sqrt(k * m) ~= 31.6)
pub const SPRING_MASS: f32 = 0.5;
pub const MAX_SPRING_STEP_SEC: f32 = 1.0 / 240.0; // integrator sub-step ceiling
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // frame delta cap after a stalled tab

// Visual parameter interpolation time constant (seconds)
pub const STYLE_TAU_SEC: f32 = 0.08;

// Elements that attract the cursor
pub const DEFAULT_SELECTORS: [&str; 10] = [
    "a",
    "button",
    "[role=\"button\"]",
    "h1",
    "h2",
    "h3",
    "input",
    "textarea",
    "select",
    ".card",
];
