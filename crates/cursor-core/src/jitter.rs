//! Randomness for the release nudge, injectable so tests can pin it down.

use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

pub trait JitterSource {
    /// A unit-length direction.
    fn direction(&mut self) -> Vec2;
}

/// Uniformly distributed directions drawn from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn direction(&mut self) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        Vec2::from_angle(angle)
    }
}

/// Always returns the same direction (normalised, falling back to +X).
#[derive(Clone, Copy, Debug)]
pub struct FixedJitter(pub Vec2);

impl JitterSource for FixedJitter {
    fn direction(&mut self) -> Vec2 {
        self.0.try_normalize().unwrap_or(Vec2::X)
    }
}
