//! Magnetic field resolver.
//!
//! Turns the raw pointer position and the active element into the position
//! the cursor should head for. Pure apart from the jitter source, which is
//! only consulted on the exit edge.
//!
//! Pull strength as a function of distance `d` from the element centre:
//!
//! ```text
//! d <  bp        far + (max - far) * (1 - (d / bp)^near_exp)
//! bp <= d < sr   far * (1 - ((d - bp) / (sr - bp))^far_exp)
//! d >= sr        0
//! ```
//!
//! The target is `raw - (raw - centre) * pull`, so 0 follows the pointer and
//! 1 pins the cursor to the centre.

use crate::config::CursorConfig;
use crate::geometry::Rect;
use crate::jitter::JitterSource;
use crate::tracker::Transition;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveInput {
    pub raw: Vec2,
    pub active: Option<Rect>,
    pub transition: Transition,
    pub previous_breaking_free: bool,
    pub clicked: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedTarget {
    pub position: Vec2,
    pub breaking_free: bool,
    /// Pull applied this frame, after clamping.
    pub pull: f32,
    /// Part of `position` caused by a one-shot edge effect (entry snap,
    /// recoil, release nudge). Zero on ordinary frames.
    pub edge_offset: Vec2,
}

impl ResolvedTarget {
    pub fn free(position: Vec2) -> Self {
        Self {
            position,
            breaking_free: false,
            pull: 0.0,
            edge_offset: Vec2::ZERO,
        }
    }

    /// Free target displaced by a one-shot `offset`.
    pub fn nudged(raw: Vec2, offset: Vec2) -> Self {
        Self {
            position: raw + offset,
            edge_offset: offset,
            ..Self::free(raw)
        }
    }
}

/// Pull strength at `distance` from the centre, clamped to [0, 1].
pub fn pull_strength(distance: f32, config: &CursorConfig) -> f32 {
    let sticky = config.sticky_radius;
    let breaking = config.breaking_point;
    let max_pull = config.max_pull.clamp(0.0, 1.0);
    let far_pull = config.far_pull.clamp(0.0, max_pull);

    if distance.is_nan() || distance >= sticky {
        return 0.0;
    }
    if breaking <= 0.0 || distance <= 0.0 {
        return max_pull;
    }
    let pull = if distance < breaking {
        let ratio = distance / breaking;
        far_pull + (max_pull - far_pull) * (1.0 - ratio.powf(config.near_exponent))
    } else {
        let span = sticky - breaking;
        if span <= 0.0 {
            return 0.0;
        }
        let ratio = (distance - breaking) / span;
        far_pull * (1.0 - ratio.powf(config.far_exponent))
    };
    pull.clamp(0.0, 1.0)
}

pub fn resolve<J: JitterSource>(
    input: &ResolveInput,
    config: &CursorConfig,
    jitter: &mut J,
) -> ResolvedTarget {
    let raw = input.raw;

    let rect = match input.active {
        Some(rect) if rect.is_finite() && !input.clicked => rect,
        // held button suspends attraction; unusable bounds never attract
        Some(_) => return ResolvedTarget::free(raw),
        None if input.transition == Transition::Exited => {
            // the release nudge applies even while the button is held
            let nudge = jitter.direction() * config.release_jitter;
            return ResolvedTarget::nudged(raw, nudge);
        }
        None => return ResolvedTarget::free(raw),
    };

    let center = rect.center();
    let delta = raw - center;
    let distance = delta.length();
    let entered = input.transition == Transition::Entered;

    let (mut pull, breaking_free) = if distance >= config.sticky_radius {
        if input.previous_breaking_free && !entered {
            let recoil = delta.normalize_or_zero() * config.recoil_distance;
            return ResolvedTarget::nudged(raw, recoil);
        }
        (0.0, false)
    } else if distance >= config.breaking_point {
        let crossed = distance > config.sticky_radius * config.breaking_free_fraction;
        (
            pull_strength(distance, config),
            (input.previous_breaking_free || crossed) && !entered,
        )
    } else {
        (pull_strength(distance, config), false)
    };

    pull = pull.clamp(0.0, 1.0);
    let mut edge_offset = Vec2::ZERO;
    if entered {
        let snapped = (pull + config.snap_bias).clamp(0.0, 1.0);
        edge_offset = -delta * (snapped - pull);
        pull = snapped;
    }

    ResolvedTarget {
        position: raw - delta * pull,
        breaking_free,
        pull,
        edge_offset,
    }
}
