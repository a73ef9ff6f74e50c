//! # Site Error Types
//!
//! Loading the site config is the only step that can fail. Everything after
//! that degrades silently when an element is missing.

use thiserror::Error;
use vitrine_background::BackgroundError;

/// Errors raised while loading or validating a [`crate::SiteConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    /// The TOML text could not be parsed.
    #[error("malformed site config: {0}")]
    Parse(String),

    /// The `[background]` table was rejected.
    #[error("background: {0}")]
    Background(#[from] BackgroundError),

    /// The typing effect has nothing to type.
    #[error("typing word list is empty")]
    NoTypingWords,

    /// A typing word is empty.
    #[error("typing word {0} is empty")]
    EmptyTypingWord(usize),

    /// A project entry is unusable.
    #[error("project {index} is invalid: {reason}")]
    InvalidProject {
        /// Position in the catalog.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Any other rejected value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for site configuration.
pub type SiteResult<T> = Result<T, SiteError>;
