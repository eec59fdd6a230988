//! Error types for the interaction core and configuration.

use thiserror::Error;

/// Rejected carousel input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("a carousel needs at least one slide")]
    EmptyCarousel,
    #[error("slide index {index} is out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
}

/// Configuration that could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration document")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
