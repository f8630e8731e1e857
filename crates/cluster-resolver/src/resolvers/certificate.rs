use super::{CredentialResolver, CredentialSource};
use crate::encoding::sniff_field;
use crate::error::ResolveError;
use crate::merge::coalesce_with;
use cluster_models::{AuthMechanism, CertificateCredential, CredentialMaterial, ResolverOverrides};

/// Client certificate auth
///
/// Overrides arrive base64-encoded from the API and are sniffed before use;
/// kubeconfig data is already decoded by the parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateResolver;

impl CredentialResolver for CertificateResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::Certificate
    }

    fn extract(
        &self,
        source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        let client_certificate_data = coalesce_with(
            source.auth_info.client_certificate_data.clone(),
            &overrides.client_cert_data,
            |value| sniff_field("client_cert_data", value),
        )?;
        let client_key_data = coalesce_with(
            source.auth_info.client_key_data.clone(),
            &overrides.client_key_data,
            |value| sniff_field("client_key_data", value),
        )?;

        Ok(CredentialMaterial::Certificate(CertificateCredential {
            client_certificate_data,
            client_key_data,
        }))
    }
}
