//! Persisted credential records
//!
//! Each mechanism carries only the fields it needs. The descriptor side refers
//! to a record through [`CredentialRef`], which can name exactly one mechanism.

use crate::mechanism::AuthMechanism;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client certificate material (x509)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateCredential {
    /// PEM client certificate
    pub client_certificate_data: Vec<u8>,
    /// PEM client private key
    pub client_key_data: Vec<u8>,
}

/// Static bearer token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCredential {
    /// Static bearer token
    pub token: Vec<u8>,
}

/// Username/password pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCredential {
    /// Basic auth username
    pub username: Vec<u8>,
    /// Basic auth password
    pub password: Vec<u8>,
}

/// A complete kubeconfig stored verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalCredential {
    /// The whole kubeconfig, verbatim
    pub kubeconfig: Vec<u8>,
}

/// OIDC auth-provider settings
///
/// `certificate_authority_data` holds base64 text, not decoded bytes: the OIDC
/// client plugin decodes it itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcCredential {
    /// OIDC issuer URL (`idp-issuer-url`)
    pub issuer_url: Vec<u8>,
    /// OAuth client id
    pub client_id: Vec<u8>,
    /// OAuth client secret
    pub client_secret: Vec<u8>,
    /// Issuer CA, kept as the base64 text the plugin expects
    pub certificate_authority_data: Vec<u8>,
    /// Cached ID token
    pub id_token: Vec<u8>,
    /// Refresh token
    pub refresh_token: Vec<u8>,
}

/// GCP service account key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpCredential {
    /// Service account key JSON
    pub gcp_key_data: Vec<u8>,
}

/// AWS IAM access key pair bound to an EKS cluster id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCredential {
    /// EKS cluster name
    pub aws_cluster_id: Vec<u8>,
    /// IAM access key id
    pub aws_access_key_id: Vec<u8>,
    /// IAM secret access key
    pub aws_secret_access_key: Vec<u8>,
}

/// Secret material for one mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mechanism", content = "material")]
pub enum CredentialMaterial {
    #[serde(rename = "x509")]
    Certificate(CertificateCredential),
    #[serde(rename = "bearer")]
    BearerToken(TokenCredential),
    #[serde(rename = "basic")]
    BasicAuth(BasicCredential),
    #[serde(rename = "local")]
    Local(LocalCredential),
    #[serde(rename = "oidc")]
    Oidc(OidcCredential),
    #[serde(rename = "gcp")]
    Gcp(GcpCredential),
    #[serde(rename = "aws")]
    Aws(AwsCredential),
}

impl CredentialMaterial {
    /// Mechanism this material authenticates with
    pub fn mechanism(&self) -> AuthMechanism {
        match self {
            CredentialMaterial::Certificate(_) => AuthMechanism::Certificate,
            CredentialMaterial::BearerToken(_) => AuthMechanism::BearerToken,
            CredentialMaterial::BasicAuth(_) => AuthMechanism::BasicAuth,
            CredentialMaterial::Local(_) => AuthMechanism::Local,
            CredentialMaterial::Oidc(_) => AuthMechanism::Oidc,
            CredentialMaterial::Gcp(_) => AuthMechanism::Gcp,
            CredentialMaterial::Aws(_) => AuthMechanism::Aws,
        }
    }

    /// Required fields that are still empty, in declaration order
    ///
    /// A record may only be persisted when this is empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required: Vec<(&'static str, &[u8])> = match self {
            CredentialMaterial::Certificate(c) => vec![
                ("client_certificate_data", c.client_certificate_data.as_slice()),
                ("client_key_data", c.client_key_data.as_slice()),
            ],
            CredentialMaterial::BearerToken(c) => vec![("token", c.token.as_slice())],
            CredentialMaterial::BasicAuth(c) => {
                vec![("username", c.username.as_slice()), ("password", c.password.as_slice())]
            }
            CredentialMaterial::Local(c) => vec![("kubeconfig", c.kubeconfig.as_slice())],
            CredentialMaterial::Oidc(_) => Vec::new(),
            CredentialMaterial::Gcp(c) => vec![("gcp_key_data", c.gcp_key_data.as_slice())],
            CredentialMaterial::Aws(c) => vec![
                ("aws_cluster_id", c.aws_cluster_id.as_slice()),
                ("aws_access_key_id", c.aws_access_key_id.as_slice()),
                ("aws_secret_access_key", c.aws_secret_access_key.as_slice()),
            ],
        };

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// A credential owned by a project/user pair
///
/// `id` and `created_at` are assigned by the store; records are never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Store-assigned id (0 until persisted)
    pub id: u64,
    /// Owning project
    pub project_id: u64,
    /// User who supplied the credential
    pub user_id: u64,
    /// Set by the store on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Mechanism-specific secret material
    pub material: CredentialMaterial,
}

impl CredentialRecord {
    /// Unsaved record; the store assigns the id
    pub fn new(project_id: u64, user_id: u64, material: CredentialMaterial) -> Self {
        Self {
            id: 0,
            project_id,
            user_id,
            created_at: None,
            material,
        }
    }

    /// Mechanism of the stored material
    pub fn mechanism(&self) -> AuthMechanism {
        self.material.mechanism()
    }
}

/// Reference from a cluster to the single credential it authenticates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mechanism", content = "credential_id")]
pub enum CredentialRef {
    #[serde(rename = "x509")]
    Certificate(u64),
    #[serde(rename = "bearer")]
    BearerToken(u64),
    #[serde(rename = "basic")]
    BasicAuth(u64),
    #[serde(rename = "local")]
    Local(u64),
    #[serde(rename = "oidc")]
    Oidc(u64),
    #[serde(rename = "gcp")]
    Gcp(u64),
    #[serde(rename = "aws")]
    Aws(u64),
}

impl CredentialRef {
    /// Reference `credential_id` in the slot for `mechanism`
    pub fn new(mechanism: AuthMechanism, credential_id: u64) -> Self {
        match mechanism {
            AuthMechanism::Certificate => CredentialRef::Certificate(credential_id),
            AuthMechanism::BearerToken => CredentialRef::BearerToken(credential_id),
            AuthMechanism::BasicAuth => CredentialRef::BasicAuth(credential_id),
            AuthMechanism::Local => CredentialRef::Local(credential_id),
            AuthMechanism::Oidc => CredentialRef::Oidc(credential_id),
            AuthMechanism::Gcp => CredentialRef::Gcp(credential_id),
            AuthMechanism::Aws => CredentialRef::Aws(credential_id),
        }
    }

    /// Mechanism whose slot is occupied
    pub fn mechanism(&self) -> AuthMechanism {
        match self {
            CredentialRef::Certificate(_) => AuthMechanism::Certificate,
            CredentialRef::BearerToken(_) => AuthMechanism::BearerToken,
            CredentialRef::BasicAuth(_) => AuthMechanism::BasicAuth,
            CredentialRef::Local(_) => AuthMechanism::Local,
            CredentialRef::Oidc(_) => AuthMechanism::Oidc,
            CredentialRef::Gcp(_) => AuthMechanism::Gcp,
            CredentialRef::Aws(_) => AuthMechanism::Aws,
        }
    }

    /// Id of the referenced credential record
    pub fn credential_id(&self) -> u64 {
        match *self {
            CredentialRef::Certificate(id)
            | CredentialRef::BearerToken(id)
            | CredentialRef::BasicAuth(id)
            | CredentialRef::Local(id)
            | CredentialRef::Oidc(id)
            | CredentialRef::Gcp(id)
            | CredentialRef::Aws(id) => id,
        }
    }

    /// Credential id held in `mechanism`'s slot, if this reference occupies it
    pub fn slot(&self, mechanism: AuthMechanism) -> Option<u64> {
        (self.mechanism() == mechanism).then(|| self.credential_id())
    }
}
