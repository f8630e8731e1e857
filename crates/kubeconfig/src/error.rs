//! Kubeconfig errors

use thiserror::Error;

/// Errors that can occur while loading a kubeconfig
#[derive(Debug, Error)]
pub enum KubeconfigError {
    /// Reading the kubeconfig file failed
    #[error("failed to read kubeconfig {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid kubeconfig YAML
    #[error("invalid kubeconfig: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A `*-data` field is not valid base64
    #[error("invalid base64 in {entry}.{field}: {source}")]
    InvalidData {
        entry: String,
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },
}
