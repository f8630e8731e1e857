use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use crate::merge::coalesce;
use cluster_models::{AuthMechanism, CredentialMaterial, OidcCredential, ResolverOverrides};

/// OIDC auth-provider plugin
///
/// Every setting is optional. The issuer CA is stored as the base64 text the
/// plugin expects, so neither the kubeconfig value nor the override is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OidcResolver;

impl CredentialResolver for OidcResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::Oidc
    }

    fn extract(
        &self,
        source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        let provider = |key: &str| {
            source
                .auth_info
                .auth_provider_value(key)
                .map(|value| value.as_bytes().to_vec())
                .unwrap_or_default()
        };

        Ok(CredentialMaterial::Oidc(OidcCredential {
            issuer_url: provider("idp-issuer-url"),
            client_id: provider("client-id"),
            client_secret: provider("client-secret"),
            certificate_authority_data: coalesce(
                provider("idp-certificate-authority-data"),
                &overrides.oidc_issuer_ca_data,
            ),
            id_token: provider("id-token"),
            refresh_token: provider("refresh-token"),
        }))
    }
}
