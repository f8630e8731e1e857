//! Connectable cluster descriptors

use crate::credential::CredentialRef;
use crate::mechanism::AuthMechanism;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully resolved cluster connection, ready to persist
///
/// Location-of-origin, TLS server name and impersonation settings are copied
/// from the kubeconfig context the cluster was detected in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClusterDescriptor {
    /// Owning project
    pub project_id: u64,
    /// Display name
    pub name: String,
    /// API server URL, after any hostname override
    pub server: String,

    /// Kubeconfig file the cluster entry came from
    #[serde(default)]
    pub cluster_location_of_origin: String,
    /// Server name used for TLS verification
    #[serde(default)]
    pub tls_server_name: String,
    /// Skip API server certificate verification
    #[serde(default)]
    pub insecure_skip_tls_verify: bool,
    /// Kubeconfig file the user entry came from
    #[serde(default)]
    pub user_location_of_origin: String,
    /// User to impersonate
    #[serde(default)]
    pub user_impersonate: String,
    /// Comma-joined impersonation groups
    #[serde(default)]
    pub user_impersonate_groups: String,

    /// Cluster CA bundle, decoded
    #[serde(default)]
    pub certificate_authority_data: Vec<u8>,

    /// The one credential the cluster authenticates with
    pub credential: CredentialRef,
}

impl ClusterDescriptor {
    /// Descriptor with only the required fields set
    pub fn new(
        project_id: u64,
        name: impl Into<String>,
        server: impl Into<String>,
        credential: CredentialRef,
    ) -> Self {
        Self {
            project_id,
            name: name.into(),
            server: server.into(),
            cluster_location_of_origin: String::new(),
            tls_server_name: String::new(),
            insecure_skip_tls_verify: false,
            user_location_of_origin: String::new(),
            user_impersonate: String::new(),
            user_impersonate_groups: String::new(),
            certificate_authority_data: Vec::new(),
            credential,
        }
    }

    /// Mechanism of the referenced credential
    pub fn auth_mechanism(&self) -> AuthMechanism {
        self.credential.mechanism()
    }
}

/// A persisted cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Store-assigned id
    pub id: u64,
    /// Set by the store on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Everything except the persistence metadata
    #[serde(flatten)]
    pub descriptor: ClusterDescriptor,
}

/// Request for registering a cloud-managed cluster without a kubeconfig
///
/// Exactly one of the integration ids is used; GCP wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateClusterRequest {
    /// Display name
    pub name: String,
    /// Owning project
    pub project_id: u64,
    /// API server URL
    pub server: String,

    /// Id of a stored GCP credential
    #[serde(default)]
    pub gcp_integration_id: Option<u64>,
    /// Id of a stored AWS credential
    #[serde(default)]
    pub aws_integration_id: Option<u64>,

    /// CA bundle, base64 or PEM
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate_authority_data: String,
}
