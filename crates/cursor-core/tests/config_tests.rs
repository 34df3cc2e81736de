// Host-side tests for cursor configuration defaults, validation and overrides.

use cursor_core::constants::*;
use cursor_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_constants_have_logical_relationships() {
    assert!(BREAKING_POINT > 0.0);
    assert!(STICKY_RADIUS > BREAKING_POINT);
    assert!(FAR_PULL <= MAX_PULL && MAX_PULL <= 1.0);
    assert!(BREAKING_FREE_FRACTION > 0.5 && BREAKING_FREE_FRACTION < 1.0);
    assert!(RELEASE_JITTER > 0.0 && RELEASE_JITTER < BREAKING_POINT);
    assert!(MAX_SPRING_STEP_SEC < MAX_FRAME_DT_SEC);
}

#[test]
fn default_config_validates() {
    let cfg = CursorConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.selectors.len(), DEFAULT_SELECTORS.len());
    assert!(cfg.selector_query().starts_with("a, button"));
}

#[test]
fn rejects_inverted_radii() {
    let cfg = CursorConfig {
        sticky_radius: 50.0,
        breaking_point: 60.0,
        ..CursorConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::RadiusOrder { .. })));

    let cfg = CursorConfig {
        breaking_point: 0.0,
        ..CursorConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::RadiusOrder { .. })));
}

#[test]
fn rejects_out_of_range_strengths() {
    let cfg = CursorConfig {
        max_pull: 1.5,
        ..CursorConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "max_pull", .. })
    ));

    let cfg = CursorConfig {
        max_pull: 0.2,
        far_pull: 0.3,
        ..CursorConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::PullOrder { .. })));

    let cfg = CursorConfig {
        snap_bias: 0.0,
        ..CursorConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn overrides_parse_known_keys() {
    let mut cfg = CursorConfig::default();
    cfg.apply_override("sticky-radius", " 240 ").unwrap();
    cfg.apply_override("breaking-point", "120").unwrap();
    cfg.apply_override("stiffness", "300").unwrap();
    cfg.apply_override("selectors", "a, .card ,, button").unwrap();
    assert_eq!(cfg.sticky_radius, 240.0);
    assert_eq!(cfg.breaking_point, 120.0);
    assert_eq!(cfg.spring.stiffness, 300.0);
    assert_eq!(cfg.selectors.as_slice(), ["a", ".card", "button"]);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn overrides_reject_bad_input() {
    let mut cfg = CursorConfig::default();
    assert_eq!(
        cfg.apply_override("gravity", "1"),
        Err(ConfigError::UnknownKey("gravity".into()))
    );
    assert!(matches!(
        cfg.apply_override("mass", "heavy"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(cfg.apply_override("damping", "NaN").is_err());
    assert_eq!(cfg.apply_override("selectors", " , "), Err(ConfigError::NoSelectors));
    // failed overrides leave the config untouched
    assert_eq!(cfg, CursorConfig::default());
}

#[test]
fn every_advertised_key_is_accepted() {
    for key in CursorConfig::OVERRIDE_KEYS {
        let mut cfg = CursorConfig::default();
        let value = if key == "selectors" { "a" } else { "0.5" };
        assert!(cfg.apply_override(key, value).is_ok(), "key {key}");
    }
}

#[test]
fn engine_refuses_invalid_config() {
    let cfg = CursorConfig {
        sticky_radius: 10.0,
        ..CursorConfig::default()
    };
    assert!(CursorEngine::new(cfg, FixedJitter(glam::Vec2::X)).is_err());
}
