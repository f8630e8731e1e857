//! Mechanism dispatch
//!
//! Reads the candidate's declared mechanism and hands it to the matching
//! resolver. The tag comes from outside the trust boundary, so an unknown tag
//! is an ordinary error.

use crate::candidate::ParsedCandidate;
use crate::error::ResolveError;
use crate::resolvers::{resolve_credential, resolver_for};
use cluster_models::{AuthMechanism, ResolverOverrides};
use cluster_store::ClusterStore;
use tracing::info;

/// Resolve and persist the candidate's credential
///
/// Returns the mechanism that was resolved and the stored credential's id.
pub async fn dispatch<S>(
    store: &S,
    candidate: &ParsedCandidate<'_>,
    overrides: &ResolverOverrides,
    project_id: u64,
    user_id: u64,
) -> Result<(AuthMechanism, u64), ResolveError>
where
    S: ClusterStore + ?Sized,
{
    let mechanism = candidate.mechanism()?;

    let supplied = overrides.supplied_fields();
    info!(
        "Resolving {} credential for cluster candidate {} (overrides: {:?})",
        mechanism, candidate.candidate.id, supplied
    );

    let credential_id = resolve_credential(
        store,
        resolver_for(mechanism),
        candidate.credential_source(),
        overrides,
        project_id,
        user_id,
    )
    .await?;

    Ok((mechanism, credential_id))
}
