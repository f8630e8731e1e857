use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use crate::merge::coalesce;
use cluster_models::{AuthMechanism, CredentialMaterial, GcpCredential, ResolverOverrides};

/// GCP service account auth; kubeconfigs carry no key, so it must be supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct GcpResolver;

impl CredentialResolver for GcpResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::Gcp
    }

    fn extract(
        &self,
        _source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        Ok(CredentialMaterial::Gcp(GcpCredential {
            gcp_key_data: coalesce(Vec::new(), &overrides.gcp_key_data),
        }))
    }
}
