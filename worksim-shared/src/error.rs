//! Error types for the seeding pipeline
//!
//! Every failure is terminal for a run: there is no retry or partial-success
//! path. The variants only exist so callers (and logs) can tell a bad
//! configuration apart from a store failure.

use thiserror::Error;

/// Result alias used throughout the workspace
pub type SeedResult<T> = Result<T, SeedError>;

/// Seeding errors
#[derive(Error, Debug)]
pub enum SeedError {
    /// Invalid or unparsable configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Weight table that cannot be sampled from
    #[error("Invalid weight table: {0}")]
    InvalidWeights(String),

    /// Schema application, constraint violation or any other store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while resetting the store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a JSON column (custom field enum options)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
