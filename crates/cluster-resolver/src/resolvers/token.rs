use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use crate::merge::coalesce;
use cluster_models::{AuthMechanism, CredentialMaterial, ResolverOverrides, TokenCredential};

/// Static bearer token auth
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerTokenResolver;

impl CredentialResolver for BearerTokenResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::BearerToken
    }

    fn extract(
        &self,
        source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        let token = coalesce(source.auth_info.token.as_bytes().to_vec(), &overrides.token_data);
        Ok(CredentialMaterial::BearerToken(TokenCredential { token }))
    }
}
