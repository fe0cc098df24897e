//! Error types for polygon filling.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FillError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FillError {
    /// The accumulated output grew past the caller supplied cap.
    #[error("hash limit at {limit}, but already have: {count}")]
    HashLimitExceeded { limit: usize, count: usize },

    #[error("invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Raised by a custom predicate collaborator and passed through untouched.
    #[error("predicate failed: {0}")]
    Predicate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FillError {
    pub fn is_hash_limit(&self) -> bool {
        matches!(self, FillError::HashLimitExceeded { .. })
    }
}

impl From<geohash::GeohashError> for FillError {
    fn from(err: geohash::GeohashError) -> Self {
        FillError::InvalidGeohash(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for FillError {
    fn from(err: toml::de::Error) -> Self {
        FillError::Config(err.to_string())
    }
}
