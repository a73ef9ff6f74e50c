//! # Background Error Types
//!
//! Only configuration can fail. The animator itself never returns errors.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::BackgroundConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackgroundError {
    /// The TOML text could not be parsed.
    #[error("malformed background config: {0}")]
    Parse(String),

    /// The glyph catalog has no entries.
    #[error("glyph catalog is empty")]
    EmptyCatalog,

    /// A random range is inverted, empty or not finite.
    #[error("invalid range for {name}: [{min}, {max})")]
    InvalidRange {
        /// Which attribute the range belongs to.
        name: &'static str,
        /// Lower bound (inclusive).
        min: f32,
        /// Upper bound (exclusive).
        max: f32,
    },

    /// Any other rejected value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for background configuration.
pub type BackgroundResult<T> = Result<T, BackgroundError>;
