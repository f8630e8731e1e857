use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use cluster_models::{AuthMechanism, CredentialMaterial, LocalCredential, ResolverOverrides};

/// Pre-existing local kubeconfig, stored verbatim
///
/// The blob always comes from the candidate; overrides never touch it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResolver;

impl CredentialResolver for LocalResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::Local
    }

    fn extract(
        &self,
        source: CredentialSource<'_>,
        _overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        Ok(CredentialMaterial::Local(LocalCredential {
            kubeconfig: source.kubeconfig.to_vec(),
        }))
    }
}
