//! Damped spring that drags the rendered cursor toward the resolved target.
//!
//! Each sub-step integrates the damped harmonic oscillator with
//! semi-implicit Euler:
//!
//! ```text
//! acceleration = (stiffness * (target - position) - damping * velocity) / mass
//! velocity    += acceleration * dt
//! position    += velocity * dt
//! ```
//!
//! The oscillator is critically damped when `damping == 2 * sqrt(stiffness * mass)`.
//! Frame deltas are capped at `MAX_FRAME_DT_SEC` and split into sub-steps no
//! longer than `MAX_SPRING_STEP_SEC`.

use crate::constants::{
    MAX_FRAME_DT_SEC, MAX_SPRING_STEP_SEC, SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    /// Damping that makes these parameters critically damped.
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// `damping / critical_damping`; 1 is critical, below 1 overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }
}

/// Two-dimensional spring state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring {
    pub position: Vec2,
    pub velocity: Vec2,
    initialized: bool,
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Jump straight to `position` with zero velocity.
    pub fn reset(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
            self.velocity = Vec2::ZERO;
            self.initialized = true;
        }
    }

    /// Advance by `dt_sec` toward `target` and return the new position.
    ///
    /// The first finite target snaps the spring into place. Non-finite targets
    /// and deltas leave the state untouched.
    pub fn step(&mut self, target: Vec2, dt_sec: f32, params: &SpringParams) -> Vec2 {
        if !target.is_finite() {
            return self.position;
        }
        if !self.initialized {
            self.reset(target);
            return self.position;
        }
        if dt_sec.is_nan() || dt_sec <= 0.0 {
            return self.position;
        }

        let dt = dt_sec.min(MAX_FRAME_DT_SEC);
        let steps = (dt / MAX_SPRING_STEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let inv_mass = 1.0 / params.mass;
        for _ in 0..steps {
            let accel = (params.stiffness * (target - self.position) - params.damping * self.velocity)
                * inv_mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            log::warn!("[spring] diverged, snapping to target");
            self.reset(target);
        }
        self.position
    }

    /// True once both the offset and the velocity are below `epsilon`.
    pub fn is_settled(&self, target: Vec2, epsilon: f32) -> bool {
        self.position.distance(target) < epsilon && self.velocity.length() < epsilon
    }
}
