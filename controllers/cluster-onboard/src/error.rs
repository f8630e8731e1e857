//! Onboarding errors
//!
//! Resolution failures come from the engine; everything else here is about
//! reading the environment and files the binary is pointed at.

use cluster_resolver::ResolveError;
use thiserror::Error;

/// Errors that can occur while onboarding a cluster.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Missing or malformed environment variable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A file named in the configuration could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Overrides file or output could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credential resolution or cluster construction failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
