//! Resolution errors
//!
//! Every failure is terminal for the current attempt and deterministic in the
//! input, so nothing here is retried. Callers map kinds to user-facing status.

use cluster_models::{AuthMechanism, UnknownMechanism};
use cluster_store::StoreError;
use kubeconfig::KubeconfigError;
use thiserror::Error;

/// Errors that can occur while resolving a cluster candidate
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A value that looked like base64 failed to decode
    #[error("malformed base64 in {field}: {source}")]
    MalformedEncoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    /// Required credential fields are still empty after merging overrides
    #[error("could not resolve {mechanism} credential: missing {}", .missing_fields.join(", "))]
    UnresolvableCredential {
        mechanism: AuthMechanism,
        missing_fields: Vec<&'static str>,
    },

    /// The candidate declares a mechanism tag we do not know
    #[error(transparent)]
    UnsupportedMechanism(#[from] UnknownMechanism),

    /// The server URL could not be reparsed for a hostname override
    #[error("invalid server URL {server:?}: {source}")]
    InvalidServerUrl {
        server: String,
        #[source]
        source: url::ParseError,
    },

    /// Persistence failed; carries `StoreError::NotFound` for unknown ids
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The candidate's kubeconfig could not be parsed
    #[error(transparent)]
    Kubeconfig(#[from] KubeconfigError),

    /// A manual request is missing or contradicts required data
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ResolveError {
    /// True when a persistence read hit an unknown id
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::Store(e) if e.is_not_found())
    }
}
