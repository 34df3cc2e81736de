//! Visual states of the cursor and their appearance parameters.

/// Mutually exclusive visual state, derived fresh every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    #[default]
    Default,
    Clicked,
    Hovered,
    BreakingFree,
}

/// How the cursor composites with the page underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Difference,
}

impl BlendMode {
    pub fn css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Difference => "difference",
        }
    }
}

/// Declarative appearance for one state. Sizes are CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub size: f32,
    pub border_width: f32,
    /// Fill opacity in [0, 1].
    pub fill_opacity: f32,
    /// Glow blur radius; 0 disables the glow.
    pub glow: f32,
    pub blend: BlendMode,
}

impl VisualParams {
    pub fn lerp(&self, to: &VisualParams, t: f32) -> VisualParams {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        VisualParams {
            size: mix(self.size, to.size),
            border_width: mix(self.border_width, to.border_width),
            fill_opacity: mix(self.fill_opacity, to.fill_opacity),
            glow: mix(self.glow, to.glow),
            // blend modes cannot be interpolated
            blend: to.blend,
        }
    }

    fn max_abs_diff(&self, other: &VisualParams) -> f32 {
        (self.size - other.size)
            .abs()
            .max((self.border_width - other.border_width).abs())
            .max((self.fill_opacity - other.fill_opacity).abs())
            .max((self.glow - other.glow).abs())
    }
}

impl VisualState {
    /// Precedence: BreakingFree > Hovered > Clicked > Default.
    pub fn from_flags(clicked: bool, hovered: bool, breaking_free: bool) -> Self {
        if breaking_free {
            VisualState::BreakingFree
        } else if hovered {
            VisualState::Hovered
        } else if clicked {
            VisualState::Clicked
        } else {
            VisualState::Default
        }
    }

    pub fn params(self) -> VisualParams {
        match self {
            VisualState::Default => VisualParams {
                size: 32.0,
                border_width: 2.0,
                fill_opacity: 0.0,
                glow: 0.0,
                blend: BlendMode::Normal,
            },
            VisualState::Clicked => VisualParams {
                size: 28.0,
                border_width: 2.0,
                fill_opacity: 0.2,
                glow: 0.0,
                blend: BlendMode::Normal,
            },
            VisualState::Hovered => VisualParams {
                size: 48.0,
                border_width: 2.0,
                fill_opacity: 0.0,
                glow: 6.0,
                blend: BlendMode::Difference,
            },
            VisualState::BreakingFree => VisualParams {
                size: 40.0,
                border_width: 3.0,
                fill_opacity: 0.1,
                glow: 14.0,
                blend: BlendMode::Normal,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualState::Default => "default",
            VisualState::Clicked => "clicked",
            VisualState::Hovered => "hovered",
            VisualState::BreakingFree => "breaking-free",
        }
    }
}

/// Eases the current parameters toward the active state's table entry.
#[derive(Clone, Copy, Debug)]
pub struct StyleTween {
    current: VisualParams,
    target: VisualState,
}

impl Default for StyleTween {
    fn default() -> Self {
        Self::new(VisualState::Default)
    }
}

impl StyleTween {
    pub fn new(state: VisualState) -> Self {
        Self {
            current: state.params(),
            target: state,
        }
    }

    pub fn set_target(&mut self, state: VisualState) {
        if self.target != state {
            self.target = state;
            self.current.blend = state.params().blend;
        }
    }

    /// Exponential approach with time constant `tau_sec`; `tau_sec <= 0` jumps.
    pub fn step(&mut self, dt_sec: f32, tau_sec: f32) -> VisualParams {
        let to = self.target.params();
        let alpha = if tau_sec > 0.0 {
            1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
        } else {
            1.0
        };
        self.current = self.current.lerp(&to, alpha);
        self.current
    }

    pub fn current(&self) -> VisualParams {
        self.current
    }

    pub fn target(&self) -> VisualState {
        self.target
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.current.max_abs_diff(&self.target.params()) < epsilon
    }
}
