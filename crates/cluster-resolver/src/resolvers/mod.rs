//! Per-mechanism credential resolvers
//!
//! Each resolver merges the kubeconfig's raw auth fields with operator
//! overrides (override wins field by field, see `merge.rs`) and returns the
//! mechanism's credential material. [`resolve_credential`] validates the
//! required fields and persists the record.
//!
//! - `certificate.rs` - client certificate and key (overrides are sniffed for base64)
//! - `token.rs` - bearer token
//! - `basic.rs` - username and password
//! - `local.rs` - the whole kubeconfig, verbatim
//! - `oidc.rs` - auth-provider settings (issuer CA kept as base64 text)
//! - `gcp.rs` - service account key, overrides only
//! - `aws.rs` - access key pair and cluster id, overrides only

mod aws;
mod basic;
mod certificate;
mod gcp;
mod local;
mod oidc;
mod token;

pub use aws::AwsResolver;
pub use basic::BasicAuthResolver;
pub use certificate::CertificateResolver;
pub use gcp::GcpResolver;
pub use local::LocalResolver;
pub use oidc::OidcResolver;
pub use token::BearerTokenResolver;

use crate::error::ResolveError;
use cluster_models::{AuthMechanism, CredentialMaterial, CredentialRecord, ResolverOverrides};
use cluster_store::ClusterStore;
use kubeconfig::AuthInfo;
use tracing::{debug, info};

/// Raw credential data available for a candidate
#[derive(Debug, Clone, Copy)]
pub struct CredentialSource<'a> {
    /// User entry of the candidate's kubeconfig context
    pub auth_info: &'a AuthInfo,
    /// The candidate's kubeconfig, as uploaded
    pub kubeconfig: &'a [u8],
}

/// Strategy for building one mechanism's credential material
pub trait CredentialResolver: Send + Sync {
    fn mechanism(&self) -> AuthMechanism;

    /// Merge raw data with overrides; does not check required fields
    fn extract(
        &self,
        source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError>;
}

/// Resolver for `mechanism`
pub fn resolver_for(mechanism: AuthMechanism) -> &'static dyn CredentialResolver {
    match mechanism {
        AuthMechanism::Certificate => &CertificateResolver,
        AuthMechanism::BearerToken => &BearerTokenResolver,
        AuthMechanism::BasicAuth => &BasicAuthResolver,
        AuthMechanism::Local => &LocalResolver,
        AuthMechanism::Oidc => &OidcResolver,
        AuthMechanism::Gcp => &GcpResolver,
        AuthMechanism::Aws => &AwsResolver,
    }
}

/// Extract, validate and persist a credential, returning its store id
///
/// Nothing is written when a required field is empty after merging.
pub async fn resolve_credential<S>(
    store: &S,
    resolver: &dyn CredentialResolver,
    source: CredentialSource<'_>,
    overrides: &ResolverOverrides,
    project_id: u64,
    user_id: u64,
) -> Result<u64, ResolveError>
where
    S: ClusterStore + ?Sized,
{
    let mechanism = resolver.mechanism();
    let material = resolver.extract(source, overrides)?;

    let missing_fields = material.missing_fields();
    if !missing_fields.is_empty() {
        debug!("{} credential missing fields: {:?}", mechanism, missing_fields);
        return Err(ResolveError::UnresolvableCredential {
            mechanism,
            missing_fields,
        });
    }

    let record = store
        .create_credential(CredentialRecord::new(project_id, user_id, material))
        .await?;

    info!(
        "Created {} credential {} for project {} (user {})",
        mechanism, record.id, project_id, user_id
    );
    Ok(record.id)
}
