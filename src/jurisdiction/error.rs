//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading jurisdiction rules
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be decoded
    #[error("Failed to parse jurisdiction rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// A rule value is outside its meaningful range
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: &'static str, reason: String },
}
