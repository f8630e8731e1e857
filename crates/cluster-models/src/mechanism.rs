//! Authentication mechanisms a cluster connection can declare

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported strategies for authenticating against a cluster API server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMechanism {
    /// Client certificate and key
    #[serde(rename = "x509")]
    Certificate,
    /// Static bearer token
    #[serde(rename = "bearer")]
    BearerToken,
    /// Username and password
    #[serde(rename = "basic")]
    BasicAuth,
    /// The whole kubeconfig, used as-is
    #[serde(rename = "local")]
    Local,
    /// OIDC auth-provider plugin
    #[serde(rename = "oidc")]
    Oidc,
    /// GCP service account key
    #[serde(rename = "gcp")]
    Gcp,
    /// AWS IAM access key pair
    #[serde(rename = "aws")]
    Aws,
}

impl AuthMechanism {
    /// Every mechanism, in credential-slot order
    pub const ALL: [AuthMechanism; 7] = [
        AuthMechanism::Certificate,
        AuthMechanism::BearerToken,
        AuthMechanism::BasicAuth,
        AuthMechanism::Local,
        AuthMechanism::Oidc,
        AuthMechanism::Gcp,
        AuthMechanism::Aws,
    ];

    /// Wire tag for this mechanism
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMechanism::Certificate => "x509",
            AuthMechanism::BearerToken => "bearer",
            AuthMechanism::BasicAuth => "basic",
            AuthMechanism::Local => "local",
            AuthMechanism::Oidc => "oidc",
            AuthMechanism::Gcp => "gcp",
            AuthMechanism::Aws => "aws",
        }
    }
}

impl fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mechanism tag that matches none of the known variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported auth mechanism: {0:?}")]
pub struct UnknownMechanism(pub String);

impl FromStr for AuthMechanism {
    type Err = UnknownMechanism;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        AuthMechanism::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownMechanism(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("x509".parse::<AuthMechanism>(), Ok(AuthMechanism::Certificate));
        assert_eq!("Bearer".parse::<AuthMechanism>(), Ok(AuthMechanism::BearerToken));
        assert_eq!(" aws ".parse::<AuthMechanism>(), Ok(AuthMechanism::Aws));
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "kerberos".parse::<AuthMechanism>().unwrap_err();
        assert_eq!(err, UnknownMechanism("kerberos".to_string()));
    }

    #[test]
    fn test_display_matches_serde_tag() {
        for mechanism in AuthMechanism::ALL {
            let json = serde_json::to_string(&mechanism).unwrap();
            assert_eq!(json, format!("\"{}\"", mechanism));
        }
    }
}
