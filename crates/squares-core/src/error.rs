use thiserror::Error;

/// Rejected configuration. The simulation itself never fails once built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown background variant `{0}` (expected drift, gravity, flicker or cursor-flicker)")]
    UnknownVariant(String),

    #[error("palette needs at least two steps, got {0}")]
    TooFewSteps(usize),

    #[error("{name} range is inverted or not finite: [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must lie in [0, 1], got {value}")]
    NotUnit { name: &'static str, value: f64 },

    #[error("size table has no drawable size")]
    NoDrawableSize,

    #[error("{feature} requires {requires}")]
    FeatureConflict {
        feature: &'static str,
        requires: &'static str,
    },
}
