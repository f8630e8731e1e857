use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use cluster_models::{AuthMechanism, BasicCredential, CredentialMaterial, ResolverOverrides};

/// Username/password auth; there are no overrides for basic credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAuthResolver;

impl CredentialResolver for BasicAuthResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::BasicAuth
    }

    fn extract(
        &self,
        source: CredentialSource<'_>,
        _overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        Ok(CredentialMaterial::BasicAuth(BasicCredential {
            username: source.auth_info.username.as_bytes().to_vec(),
            password: source.auth_info.password.as_bytes().to_vec(),
        }))
    }
}
