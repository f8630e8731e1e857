use super::{CredentialResolver, CredentialSource};
use crate::error::ResolveError;
use crate::merge::coalesce;
use cluster_models::{AuthMechanism, AwsCredential, CredentialMaterial, ResolverOverrides};

// TODO: accept an optional session token once the AWS credential carries one
/// AWS IAM auth; cluster id and key pair must all be supplied as overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsResolver;

impl CredentialResolver for AwsResolver {
    fn mechanism(&self) -> AuthMechanism {
        AuthMechanism::Aws
    }

    fn extract(
        &self,
        _source: CredentialSource<'_>,
        overrides: &ResolverOverrides,
    ) -> Result<CredentialMaterial, ResolveError> {
        Ok(CredentialMaterial::Aws(AwsCredential {
            aws_cluster_id: coalesce(Vec::new(), &overrides.aws_cluster_id),
            aws_access_key_id: coalesce(Vec::new(), &overrides.aws_access_key_id),
            aws_secret_access_key: coalesce(Vec::new(), &overrides.aws_secret_access_key),
        }))
    }
}
