//! Operator-supplied resolver values

use serde::{Deserialize, Serialize};

/// Explicit values that take precedence over data found in the kubeconfig
///
/// An empty string means "not supplied". Fields merge one at a time, so
/// overriding the client key alone keeps the kubeconfig's client certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ResolverOverrides {
    /// Base64 cluster CA bundle
    pub cluster_ca_data: String,
    /// Replacement host for the server URL, port is kept
    pub cluster_hostname: String,

    /// Base64 client certificate (x509)
    pub client_cert_data: String,
    /// Base64 client key (x509)
    pub client_key_data: String,

    /// Issuer CA, stored as given (oidc)
    pub oidc_issuer_ca_data: String,

    /// Bearer token (bearer)
    pub token_data: String,

    /// Service account key file contents (gcp)
    pub gcp_key_data: String,

    /// IAM access key id (aws)
    pub aws_access_key_id: String,
    /// IAM secret access key (aws)
    pub aws_secret_access_key: String,
    /// EKS cluster name (aws)
    pub aws_cluster_id: String,
}

impl ResolverOverrides {
    /// Names of the fields that carry a value; never the values themselves
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        [
            ("cluster_ca_data", &self.cluster_ca_data),
            ("cluster_hostname", &self.cluster_hostname),
            ("client_cert_data", &self.client_cert_data),
            ("client_key_data", &self.client_key_data),
            ("oidc_issuer_ca_data", &self.oidc_issuer_ca_data),
            ("token_data", &self.token_data),
            ("gcp_key_data", &self.gcp_key_data),
            ("aws_access_key_id", &self.aws_access_key_id),
            ("aws_secret_access_key", &self.aws_secret_access_key),
            ("aws_cluster_id", &self.aws_cluster_id),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let overrides: ResolverOverrides =
            serde_json::from_str(r#"{"token_data": "abc123"}"#).unwrap();
        assert_eq!(overrides.token_data, "abc123");
        assert!(overrides.client_cert_data.is_empty());
        assert_eq!(overrides.supplied_fields(), vec!["token_data"]);
    }

    #[test]
    fn test_no_supplied_fields() {
        assert!(ResolverOverrides::default().supplied_fields().is_empty());
    }
}
