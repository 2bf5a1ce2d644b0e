// src/error.rs
//! Error types for the registry
//!
//! Failures fall into two families: caller-shaped (fix the query) and
//! store-shaped (fix the upstream data). Nothing here is transient, so
//! nothing is retried.

use thiserror::Error;

/// Errors that can occur while loading manifests or evaluating queries
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed request input (bad platform version, etc.)
    #[error("{0}")]
    InvalidInput(String),

    /// A version string could not be parsed as a semantic version
    #[error("invalid version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    /// The package store could not supply manifests
    #[error("problem fetching packages: {0}")]
    StoreUnavailable(String),

    /// Upstream data violates a store invariant
    #[error("data quality violation: {0}")]
    DataQuality(String),

    /// JSON rendering failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::MalformedVersion { .. })
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
