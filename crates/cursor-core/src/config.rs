//! Cursor tuning: radii, pull curve, edge effects, spring and style timing.
//!
//! `CursorConfig::default()` mirrors `constants.rs`. The web front-end layers
//! `data-*` attribute overrides on top through [`CursorConfig::apply_override`]
//! and then calls [`CursorConfig::validate`].

use crate::constants::*;
use crate::error::ConfigError;
use crate::spring::SpringParams;
use smallvec::SmallVec;

pub type SelectorList = SmallVec<[String; 10]>;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub sticky_radius: f32,
    pub breaking_point: f32,
    pub max_pull: f32,
    pub far_pull: f32,
    pub near_exponent: f32,
    pub far_exponent: f32,
    pub breaking_free_fraction: f32,
    pub snap_bias: f32,
    pub recoil_distance: f32,
    pub release_jitter: f32,
    pub spring: SpringParams,
    pub style_tau_sec: f32,
    pub selectors: SelectorList,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            sticky_radius: STICKY_RADIUS,
            breaking_point: BREAKING_POINT,
            max_pull: MAX_PULL,
            far_pull: FAR_PULL,
            near_exponent: NEAR_EXPONENT,
            far_exponent: FAR_EXPONENT,
            breaking_free_fraction: BREAKING_FREE_FRACTION,
            snap_bias: SNAP_BIAS,
            recoil_distance: RECOIL_DISTANCE,
            release_jitter: RELEASE_JITTER,
            spring: SpringParams::default(),
            style_tau_sec: STYLE_TAU_SEC,
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    // NaN fails `contains`
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.breaking_point > 0.0
            && self.sticky_radius.is_finite()
            && self.breaking_point < self.sticky_radius)
        {
            return Err(ConfigError::RadiusOrder {
                breaking_point: self.breaking_point,
                sticky_radius: self.sticky_radius,
            });
        }
        check_range("max_pull", self.max_pull, 0.0, 1.0)?;
        check_range("far_pull", self.far_pull, 0.0, 1.0)?;
        if self.far_pull > self.max_pull {
            return Err(ConfigError::PullOrder {
                far_pull: self.far_pull,
                max_pull: self.max_pull,
            });
        }
        check_range("near_exponent", self.near_exponent, f32::EPSILON, 8.0)?;
        check_range("far_exponent", self.far_exponent, f32::EPSILON, 8.0)?;
        check_range("breaking_free_fraction", self.breaking_free_fraction, 0.0, 1.0)?;
        // snap must be positive
        check_range("snap_bias", self.snap_bias, f32::EPSILON, 1.0)?;
        check_range("recoil_distance", self.recoil_distance, 0.0, self.sticky_radius)?;
        check_range("release_jitter", self.release_jitter, f32::EPSILON, self.breaking_point)?;
        check_range("stiffness", self.spring.stiffness, f32::EPSILON, 1.0e5)?;
        check_range("damping", self.spring.damping, 0.0, 1.0e4)?;
        check_range("mass", self.spring.mass, 1.0e-3, 1.0e3)?;
        check_range("style_tau_sec", self.style_tau_sec, 0.0, 10.0)?;
        if self.selectors.is_empty() {
            return Err(ConfigError::NoSelectors);
        }
        Ok(())
    }

    /// Apply one `key = value` override. Keys use the kebab-case form of the
    /// `data-*` attribute without the prefix (`sticky-radius`, `stiffness`, ...).
    /// `selectors` takes a comma separated list.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if key == "selectors" {
            let list: SelectorList = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if list.is_empty() {
                return Err(ConfigError::NoSelectors);
            }
            self.selectors = list;
            return Ok(());
        }

        let slot = match key {
            "sticky-radius" => &mut self.sticky_radius,
            "breaking-point" => &mut self.breaking_point,
            "max-pull" => &mut self.max_pull,
            "far-pull" => &mut self.far_pull,
            "near-exponent" => &mut self.near_exponent,
            "far-exponent" => &mut self.far_exponent,
            "breaking-free-fraction" => &mut self.breaking_free_fraction,
            "snap-bias" => &mut self.snap_bias,
            "recoil-distance" => &mut self.recoil_distance,
            "release-jitter" => &mut self.release_jitter,
            "stiffness" => &mut self.spring.stiffness,
            "damping" => &mut self.spring.damping,
            "mass" => &mut self.spring.mass,
            "style-tau" => &mut self.style_tau_sec,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        let parsed = value
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        *slot = parsed;
        Ok(())
    }

    /// All overridable keys, in the order the front-end reads them.
    pub const OVERRIDE_KEYS: [&'static str; 15] = [
        "sticky-radius",
        "breaking-point",
        "max-pull",
        "far-pull",
        "near-exponent",
        "far-exponent",
        "breaking-free-fraction",
        "snap-bias",
        "recoil-distance",
        "release-jitter",
        "stiffness",
        "damping",
        "mass",
        "style-tau",
        "selectors",
    ];

    /// Selectors joined for `querySelectorAll`.
    pub fn selector_query(&self) -> String {
        self.selectors.join(", ")
    }
}
