use thiserror::Error;

/// Rejected cursor configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("breaking point ({breaking_point}) must be positive and below the sticky radius ({sticky_radius})")]
    RadiusOrder {
        breaking_point: f32,
        sticky_radius: f32,
    },
    #[error("{name} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("far pull ({far_pull}) must not exceed max pull ({max_pull})")]
    PullOrder { far_pull: f32, max_pull: f32 },
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("selector list is empty")]
    NoSelectors,
}
