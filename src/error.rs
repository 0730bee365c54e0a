// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a seed run. None are recovered locally; the first error
/// surfaces and halts the run unless keep-going mode is set.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure or non-success HTTP status.
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body is not valid JSON, or lacks a usable `Results` array.
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
