//! Error types for HerbMind

use thiserror::Error;

use crate::utils::atomic::AtomicError;

/// Result type alias using HerbError
pub type HerbResult<T> = std::result::Result<T, HerbError>;

/// Main error type for the herb store and its surfaces
#[derive(Debug, Error)]
pub enum HerbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Atomic write failed: {0}")]
    Atomic(#[from] AtomicError),

    #[error("Herb not found: {0}")]
    HerbNotFound(String),

    #[error("Invalid herb: {0}")]
    InvalidHerb(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HerbError {
    /// Whether the error stems from a missing herb rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, HerbError::HerbNotFound(_))
    }
}
