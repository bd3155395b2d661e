//! Error types for the cache engine and benchmark driver
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
///
/// `get` and `put` on the cache never produce one of these; a miss is
/// `None` and a full cache evicts silently.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A construction parameter is out of range (e.g. zero capacity)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input that could not be parsed (e.g. an unknown workload name)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a report failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Drawing the hit-rate chart failed
    #[error("Plot error: {0}")]
    Plot(String),

    /// A benchmark task died before producing a report
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
